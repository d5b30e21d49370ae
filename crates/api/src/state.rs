use std::sync::Arc;
use std::time::Instant;

use todo_db::ConnectionMonitor;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todo_db::DbPool,
    /// Connection state reported by `/health`.
    pub monitor: ConnectionMonitor,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// When the process started, for the uptime figure.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        pool: todo_db::DbPool,
        monitor: ConnectionMonitor,
        config: ServerConfig,
        started_at: Instant,
    ) -> Self {
        Self {
            pool,
            monitor,
            config: Arc::new(config),
            started_at,
        }
    }
}
