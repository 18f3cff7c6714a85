//! In-process helpers for handler tests.

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::ApiConfig;
use crate::http::server::{build_router, AppState};
use crate::ids::SequentialIds;

/// First id handed out by the test generator.
pub(crate) const FIRST_ID: u64 = 1_000;

pub(crate) fn test_state(config: ApiConfig) -> AppState {
    AppState::new(config, Arc::new(SequentialIds::starting_at(FIRST_ID)))
}

pub(crate) fn test_app() -> Router {
    build_router(test_state(ApiConfig::default()))
}

/// Send a request through the router and decode the JSON response.
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    send_request(app, request).await
}

pub(crate) async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
