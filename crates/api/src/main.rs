use std::net::SocketAddr;
use std::time::Instant;

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use todo_api::config::{self, ServerConfig};
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_api::telemetry;
use todo_db::ConnectionMonitor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Uptime counts from here, including time spent waiting for the database.
    let started_at = Instant::now();

    // Env files first so RUST_LOG / LOG_FORMAT from them apply.
    let env_files = config::load_env_files();

    // --- Tracing ---
    telemetry::init();
    env_files.log();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid configuration")?;
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Shutdown signal ---
    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            shutdown.cancel();
        }
    });

    // --- Database (retries until connected) ---
    let monitor = ConnectionMonitor::new();
    let mut readiness = todo_db::spawn_bootstrap(config.database.clone(), monitor.clone());

    let pool = tokio::select! {
        pool = readiness.wait() => {
            pool.context("Database bootstrap task exited before connecting")?
        }
        () = shutdown.cancelled() => {
            tracing::info!("Shutdown requested before the database was ready");
            return Ok(());
        }
    };

    todo_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Router ---
    let addr = SocketAddr::new(config.host, config.port);
    let state = AppState::new(pool.clone(), monitor.clone(), config.clone(), started_at);
    let app = build_app_router(state, &config);

    // --- Start server (only after the database is ready) ---
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "Server is up");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    monitor.close_pool(&pool).await;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). If a handler cannot
/// be installed, that signal source is ignored and the other still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
