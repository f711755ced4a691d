//! Graceful shutdown
//!
//! One watch channel carries the shutdown flag. The HTTP server waits on it,
//! the signal listener sets it, and `shutdown()` closes the pool afterwards.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use super::constants::SHUTDOWN_TIMEOUT_SECS;
use crate::data::SqliteService;

/// What ended the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    CtrlC,
    Terminate,
}

#[derive(Clone)]
pub struct ShutdownService {
    flag: Arc<watch::Sender<bool>>,
    database: Arc<SqliteService>,
}

impl ShutdownService {
    pub fn new(database: Arc<SqliteService>) -> Self {
        let (flag, _) = watch::channel(false);
        Self {
            flag: Arc::new(flag),
            database,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.flag.subscribe()
    }

    pub fn trigger(&self) {
        self.flag.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.flag.borrow()
    }

    /// Owned future resolving once shutdown is triggered, for axum's graceful shutdown
    pub fn wait(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            while !*rx.borrow_and_update() {
                // A dropped sender also ends the wait
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    }

    /// Trigger shutdown and close the pool, giving up after the timeout
    pub async fn shutdown(&self) {
        self.trigger();

        let limit = Duration::from_secs(SHUTDOWN_TIMEOUT_SECS);
        match tokio::time::timeout(limit, self.database.close()).await {
            Ok(()) => tracing::debug!("Shutdown complete"),
            Err(_) => tracing::warn!(
                timeout_secs = limit.as_secs(),
                "Database pool did not close in time"
            ),
        }
    }

    /// Spawn a listener that triggers shutdown on Ctrl+C or SIGTERM
    pub fn install_signal_handlers(&self) {
        let service = self.clone();
        tokio::spawn(async move {
            let reason = wait_for_signal().await;
            tracing::info!(reason = ?reason, "Shutting down");
            service.trigger();
        });
    }
}

async fn wait_for_signal() -> ShutdownReason {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ShutdownReason::CtrlC,
            Err(e) => {
                tracing::error!(error = %e, "Ctrl+C handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                ShutdownReason::Terminate
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<ShutdownReason>();

    tokio::select! {
        reason = ctrl_c => reason,
        reason = terminate => reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::test_support::memory_pool;

    async fn service() -> ShutdownService {
        ShutdownService::new(Arc::new(SqliteService::from_pool(memory_pool().await)))
    }

    #[tokio::test]
    async fn test_trigger_sets_flag() {
        let shutdown = service().await;
        assert!(!shutdown.is_triggered());
        shutdown.trigger();
        assert!(shutdown.is_triggered());
    }

    #[tokio::test]
    async fn test_wait_resolves_after_trigger() {
        let shutdown = service().await;
        let waiter = tokio::spawn(shutdown.wait());
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        shutdown.trigger();
        tokio::time::timeout(Duration::from_millis(200), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_closes_pool_and_notifies() {
        let shutdown = service().await;
        let rx = shutdown.subscribe();

        shutdown.shutdown().await;
        assert!(*rx.borrow());
        assert!(shutdown.database.pool().is_closed());
    }
}
