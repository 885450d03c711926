//! The two response shapes every module answers with.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

/// Literal liveness body, byte-for-byte.
pub const ALIVE_BODY: &str = r#"{"alive": true}"#;

/// Serialize `payload` as the JSON body with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(payload)).into_response()
}

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message: String = message.into();
    (status, Json(json!({ "error": message }))).into_response()
}

/// Fixed acknowledgement used by mutations that report no id or count.
pub fn ok_result() -> Response {
    json_response(StatusCode::OK, json!({ "result": "OK" }))
}

pub async fn alive() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        ALIVE_BODY,
    )
        .into_response()
}
