//! Database connection bootstrap.
//!
//! [`connect_with_retry`] keeps trying to open the pool at a fixed interval
//! until it succeeds. Failures are logged and never returned. The server
//! binary drives it through [`spawn_bootstrap`] and only binds its listener
//! once [`Readiness::wait`] hands over the pool.
//!
//! [`ConnectionMonitor`] tracks the connection state for `/health`. It is a
//! plain cloneable handle owned by whoever starts the bootstrap.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use todo_core::connection::ConnectionState;

use crate::DbPool;

/// Delay between connection attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How long a caller waits for a free connection (or for the server to
/// accept one) before the attempt fails.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything needed to open the pool.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub retry_interval: Duration,
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

// ---------------------------------------------------------------------------
// Connection monitor
// ---------------------------------------------------------------------------

/// Shared view of the database connection state.
///
/// Cloning is cheap; all clones observe the same state.
#[derive(Clone)]
pub struct ConnectionMonitor {
    state: Arc<watch::Sender<ConnectionState>>,
    attempts: Arc<AtomicU32>,
}

impl ConnectionMonitor {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ConnectionState::Disconnected);
        Self {
            state: Arc::new(tx),
            attempts: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    pub fn set(&self, state: ConnectionState) {
        let previous = self.state.send_replace(state);
        if previous != state {
            tracing::debug!(from = %previous, to = %state, "Database connection state changed");
        }
    }

    /// Receive every subsequent state change.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// Number of connection attempts made so far.
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::Relaxed)
    }

    fn record_attempt(&self) -> u32 {
        self.attempts.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Close `pool`, reporting `disconnecting` while in-flight connections
    /// are returned and `disconnected` afterwards.
    pub async fn close_pool(&self, pool: &DbPool) {
        self.set(ConnectionState::Disconnecting);
        pool.close().await;
        self.set(ConnectionState::Disconnected);
        tracing::info!("Database pool closed");
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Retry loop
// ---------------------------------------------------------------------------

/// Strip credentials from a database URL for logging.
///
/// Returns everything after the last `@`, or the input unchanged when the
/// URL carries no userinfo.
pub fn redact_database_url(url: &str) -> &str {
    url.rsplit_once('@').map(|(_, host)| host).unwrap_or(url)
}

/// Open the pool, retrying every `settings.retry_interval` until it works.
///
/// There is no attempt limit and no backoff. This only returns once a
/// connection has been established.
pub async fn connect_with_retry(settings: &DatabaseSettings, monitor: &ConnectionMonitor) -> DbPool {
    let target = redact_database_url(&settings.url);

    loop {
        let attempt = monitor.record_attempt();
        monitor.set(ConnectionState::Connecting);
        tracing::info!(attempt, target = %target, "Attempting database connection");

        match crate::create_pool(
            &settings.url,
            settings.max_connections,
            settings.acquire_timeout,
        )
        .await
        {
            Ok(pool) => {
                let options = pool.connect_options();
                tracing::info!(
                    attempt,
                    database = options.get_database().unwrap_or("<default>"),
                    host = options.get_host(),
                    "Database connected",
                );
                monitor.set(ConnectionState::Connected);
                return pool;
            }
            Err(e) => {
                monitor.set(ConnectionState::Disconnected);
                tracing::warn!(
                    attempt,
                    error = %e,
                    "Database connection failed, retrying in {} seconds",
                    settings.retry_interval.as_secs_f64(),
                );
            }
        }

        tokio::time::sleep(settings.retry_interval).await;
    }
}

// ---------------------------------------------------------------------------
// Readiness
// ---------------------------------------------------------------------------

/// One-shot readiness signal carrying the connected pool.
///
/// Dropping it stops the background retry loop if it is still running.
pub struct Readiness {
    rx: Option<oneshot::Receiver<DbPool>>,
    handle: JoinHandle<()>,
}

impl Readiness {
    /// Wait for the bootstrap to connect.
    ///
    /// Resolves to the pool once. Returns `None` if the bootstrap task died
    /// before connecting or the pool was already handed out. Cancelling the
    /// returned future keeps the signal pending for the next call.
    pub async fn wait(&mut self) -> Option<DbPool> {
        let rx = self.rx.as_mut()?;
        let pool = rx.await.ok();
        self.rx = None;
        pool
    }
}

impl Drop for Readiness {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Run [`connect_with_retry`] on a background task.
pub fn spawn_bootstrap(settings: DatabaseSettings, monitor: ConnectionMonitor) -> Readiness {
    let (tx, rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let pool = connect_with_retry(&settings, &monitor).await;
        tracing::info!("Database ready");
        if tx.send(pool).is_err() {
            tracing::debug!("Readiness receiver dropped before the database connected");
        }
    });

    Readiness {
        rx: Some(rx),
        handle,
    }
}
