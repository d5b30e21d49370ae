use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use todo_core::connection::ConnectionState;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`.
    pub status: &'static str,
    /// Seconds since the server started.
    pub uptime: f64,
    pub database: DatabaseHealth,
    /// RFC 3339 time of the check.
    pub timestamp: String,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    /// Numeric [`ConnectionState`] code.
    pub state: u8,
    pub status: &'static str,
    pub connected: bool,
}

/// GET /health -- 200 when the database is connected and answering,
/// 503 otherwise.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let mut db_state = state.monitor.state();

    if db_state.is_connected() {
        if let Err(e) = todo_db::health_check(&state.pool).await {
            tracing::warn!(error = %e, "Database health check failed");
            db_state = ConnectionState::Disconnected;
        }
    }

    let healthy = db_state.is_connected();
    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        uptime: state.started_at.elapsed().as_secs_f64(),
        database: DatabaseHealth {
            state: db_state.code(),
            status: db_state.name(),
            connected: healthy,
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    };

    (status_code, Json(body))
}

/// Mount health check routes (root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
