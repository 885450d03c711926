use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use tracing::warn;

/// JSON body extractor that never rejects.
///
/// Missing fields take their `Default` values; a body that is absent, unreadable
/// or not valid JSON for `T` is logged and replaced by `T::default()`.
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(rejection) => {
                warn!(error = %rejection, "failed to read request body; using defaults");
                return Ok(Self(T::default()));
            }
        };

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(e) => {
                warn!(error = %e, "request body did not decode; using defaults");
                Ok(Self(T::default()))
            }
        }
    }
}
