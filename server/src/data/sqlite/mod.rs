//! SQLite store for pokemon attributes
//!
//! The pool is opened in WAL mode so an external import can write while the
//! server reads. Temp tables live in memory.

pub mod error;
mod migrations;
pub mod repositories;
mod repository_impl;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::SqliteError;
pub use sqlx::SqlitePool;

use std::path::Path;
use std::time::Duration;

use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tracing::log::LevelFilter;

use crate::core::constants::{
    SQLITE_BUSY_TIMEOUT_SECS, SQLITE_CACHE_SIZE, SQLITE_WAL_AUTOCHECKPOINT,
};

fn connect_options(db_path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(SQLITE_BUSY_TIMEOUT_SECS))
        .pragma("cache_size", SQLITE_CACHE_SIZE)
        .pragma("temp_store", "MEMORY")
        .pragma("wal_autocheckpoint", SQLITE_WAL_AUTOCHECKPOINT)
        .log_statements(LevelFilter::Trace)
}

/// Shared handle to the pokemon database
pub struct SqliteService {
    pool: SqlitePool,
}

impl SqliteService {
    /// Open (or create) the database file and bring its schema up to date
    pub async fn init(db_path: &Path, max_connections: u32) -> Result<Self, SqliteError> {
        match db_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir).await?,
            _ => {}
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_options(db_path))
            .await?;
        migrations::run_migrations(&pool).await?;

        tracing::debug!(path = %db_path.display(), max_connections, "Pokemon database open");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    #[cfg(test)]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("Pokemon database closed");
    }
}
