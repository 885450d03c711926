use axum::{http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::server::response::error_response;

#[derive(Debug, ThisError)]
pub enum RecapError {
    #[error("No rows returned by id: {0}")]
    NotFound(String),

    /// A lookup failed for a reason other than row absence.
    #[error("Error fetching a single row from db")]
    Lookup(#[source] SqlxError),

    #[error("Credentials not correct: {0}")]
    InvalidCredentials(String),

    #[error("{context}: {source}")]
    Internal {
        context: String,
        #[source]
        source: SqlxError,
    },

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl RecapError {
    /// Re-tag a driver failure as a lookup failure; absence stays `NotFound`.
    pub fn into_lookup(self) -> Self {
        match self {
            RecapError::Database(e) => RecapError::Lookup(e),
            other => other,
        }
    }

    /// Attach operation context to a driver failure.
    pub fn context(self, context: impl Into<String>) -> Self {
        match self {
            RecapError::Database(source) => RecapError::Internal {
                context: context.into(),
                source,
            },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RecapError::NotFound(_) | RecapError::Lookup(_) | RecapError::InvalidCredentials(_) => {
                StatusCode::NOT_FOUND
            }
            RecapError::Internal { .. } | RecapError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RecapError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match &self {
            RecapError::Lookup(source) => {
                error!(error = %source, "Error while fetching a single row from db");
            }
            _ if status.is_server_error() => {
                error!(status = %status, error = %self, "Server error in API handler");
            }
            _ => {}
        }
        error_response(status, self.to_string())
    }
}
