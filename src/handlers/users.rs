use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use tracing::{debug, info};

use crate::db::{User, UserStore};
use crate::error::RecapError;
use crate::handlers::parse_id;
use crate::middleware::LenientJson;
use crate::server::response::{alive, json_response};

pub fn router(store: UserStore) -> Router {
    Router::new()
        .route("/users/alive", get(alive))
        .route("/users", get(get_users).post(insert_user))
        .route("/users/login", post(login_user).options(login_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(store)
}

/// GET /users
pub async fn get_users(State(store): State<UserStore>) -> Result<Response, RecapError> {
    let users = store
        .find_all()
        .await
        .map_err(|e| e.context("Error invoking findAll"))?;
    Ok(json_response(StatusCode::OK, users))
}

/// GET /users/{id}
pub async fn get_user(
    State(store): State<UserStore>,
    Path(raw_id): Path<String>,
) -> Result<Response, RecapError> {
    let id = parse_id(&raw_id).ok_or_else(|| RecapError::NotFound(raw_id.clone()))?;
    let user = store.find_by_id(id).await.map_err(RecapError::into_lookup)?;
    Ok(json_response(StatusCode::OK, user))
}

/// POST /users -> new id
pub async fn insert_user(
    State(store): State<UserStore>,
    LenientJson(user): LenientJson<User>,
) -> Result<Response, RecapError> {
    let id = store
        .insert(&user)
        .await
        .map_err(|e| e.context("Error while inserting new user"))?;
    info!(id, "user created");
    Ok(json_response(StatusCode::OK, id))
}

/// PUT /users/{id} -> affected rows
pub async fn update_user(
    State(store): State<UserStore>,
    Path(raw_id): Path<String>,
    LenientJson(user): LenientJson<User>,
) -> Result<Response, RecapError> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(json_response(StatusCode::OK, 0u64));
    };
    let affected = store
        .update(id, &user)
        .await
        .map_err(|e| e.context(format!("Error while updating user id {id}")))?;
    Ok(json_response(StatusCode::OK, affected))
}

/// DELETE /users/{id} -> affected rows
pub async fn delete_user(
    State(store): State<UserStore>,
    Path(raw_id): Path<String>,
) -> Result<Response, RecapError> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(json_response(StatusCode::OK, 0u64));
    };
    let affected = store
        .delete(id)
        .await
        .map_err(|e| e.context(format!("Error while deleting user id {id}")))?;
    Ok(json_response(StatusCode::OK, affected))
}

/// POST|OPTIONS /users/login -> `true`, or 404 for wrong credentials and any failure.
pub async fn login_user(
    State(store): State<UserStore>,
    LenientJson(user): LenientJson<User>,
) -> Result<Response, RecapError> {
    debug!(username = %user.username, "login attempt");
    store
        .find_by_credentials(&user.username, &user.password)
        .await
        .map_err(|e| match e {
            RecapError::NotFound(_) => RecapError::InvalidCredentials("no matching user".into()),
            other => RecapError::InvalidCredentials(other.to_string()),
        })?;
    Ok(json_response(StatusCode::OK, true))
}
