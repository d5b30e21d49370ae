#![allow(dead_code)]

use std::time::Instant;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use todo_core::connection::ConnectionState;
use tower::ServiceExt;

use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_db::ConnectionMonitor;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("0".to_string()),
        "CORS_ORIGINS" => Some("http://localhost:3000".to_string()),
        _ => None,
    })
    .expect("test config should be valid")
}

/// Build the full application router against `pool`, with the connection
/// monitor reporting `connected`.
pub fn build_test_app(pool: PgPool) -> Router {
    let monitor = ConnectionMonitor::new();
    monitor.set(ConnectionState::Connected);
    build_test_app_with_monitor(pool, monitor)
}

/// Build the full application router with a caller-controlled monitor.
pub fn build_test_app_with_monitor(pool: PgPool, monitor: ConnectionMonitor) -> Router {
    build_test_app_started_at(pool, monitor, Instant::now())
}

/// Build the full application router as if the process started at `started_at`.
pub fn build_test_app_started_at(
    pool: PgPool,
    monitor: ConnectionMonitor,
    started_at: Instant,
) -> Router {
    let config = test_config();
    let state = AppState::new(pool, monitor, config.clone(), started_at);
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an arbitrary body with an optional content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let request = builder.body(Body::from(body)).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
