use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod bootstrap;
pub mod models;
pub mod repositories;

pub use bootstrap::{
    connect_with_retry, redact_database_url, spawn_bootstrap, ConnectionMonitor,
    DatabaseSettings, Readiness,
};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Opens one connection up front so an unreachable server fails here
/// rather than on the first request.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
