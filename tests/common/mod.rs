#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

pub async fn app() -> Router {
    let pool = skill_recap::db::connect_in_memory()
        .await
        .expect("failed to open in-memory database");
    skill_recap::recap_router(skill_recap::RecapState::new(pool))
}

/// A router whose pool is already closed, so every query fails.
pub async fn closed_app() -> Router {
    let pool = skill_recap::db::connect_in_memory()
        .await
        .expect("failed to open in-memory database");
    let app = skill_recap::recap_router(skill_recap::RecapState::new(pool.clone()));
    pool.close().await;
    app
}

/// Send one request and return the status with the raw body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("failed to build request");

    let resp = app.clone().oneshot(request).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let text = String::from_utf8(bytes.to_vec()).expect("response body was not utf-8");
    (status, text)
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, body).await;
    let value = serde_json::from_str(&text).expect("response body was not json");
    (status, value)
}

/// POST a body and return the id the server generated.
pub async fn create(app: &Router, uri: &str, body: &str) -> i64 {
    let (status, value) = send_json(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    value.as_i64().expect("insert did not return an id")
}
