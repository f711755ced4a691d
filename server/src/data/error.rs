//! Backend-neutral data errors

use thiserror::Error;

/// Errors surfaced by `PokemonRepository` implementations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("SQLite error: {0}")]
    Sqlite(sqlx::Error),

    #[error("Migration {version} ({name}) failed on {backend}: {error}")]
    MigrationFailed {
        backend: &'static str,
        version: i32,
        name: String,
        error: String,
    },

    /// Placeholders in a query do not line up with the bound parameters
    #[error("Query has {placeholders} placeholders but {params} parameters were bound")]
    ParamMismatch { placeholders: usize, params: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Pool exhaustion, a closed pool or an IO failure, as opposed to a bad query
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Sqlite(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }
}

impl From<crate::data::sqlite::SqliteError> for DataError {
    fn from(e: crate::data::sqlite::SqliteError) -> Self {
        use crate::data::sqlite::SqliteError;

        match e {
            SqliteError::Database(e) => Self::Sqlite(e),
            SqliteError::MigrationFailed {
                version,
                name,
                error,
            } => Self::MigrationFailed {
                backend: "sqlite",
                version,
                name,
                error,
            },
            SqliteError::ParamMismatch {
                placeholders,
                params,
            } => Self::ParamMismatch {
                placeholders,
                params,
            },
            SqliteError::Io(e) => Self::Io(e),
        }
    }
}
