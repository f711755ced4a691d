//! Local data directory
//!
//! | Platform | Default location |
//! |----------|------------------|
//! | Linux | `$XDG_DATA_HOME/pokedex/` |
//! | macOS | `~/Library/Application Support/Pokedex/` |
//! | Windows | `%APPDATA%\Pokedex\` |
//!
//! `POKEDEX_DATA_DIR` overrides the platform default. The directory only
//! holds the default database; `--database` and `database.path` point
//! elsewhere and are never created or pruned here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::config::AppConfig;
use super::constants::{APP_DOT_FOLDER, APP_NAME, ENV_DATA_DIR, SQLITE_DB_FILENAME, SQLITE_SUBDIR};
use crate::utils::file::expand_path;

#[derive(Debug, Clone)]
pub struct AppStorage {
    data_dir: PathBuf,
    database_path: PathBuf,
}

impl AppStorage {
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let data_dir = Self::resolve_data_dir();
        let sqlite_dir = data_dir.join(SQLITE_SUBDIR);
        tokio::fs::create_dir_all(&sqlite_dir)
            .await
            .with_context(|| format!("Failed to create {}", sqlite_dir.display()))?;

        let data_dir = data_dir.canonicalize().unwrap_or(data_dir);
        let storage = match &config.database.path {
            Some(path) => Self {
                data_dir,
                database_path: path.clone(),
            },
            None => Self::under(data_dir),
        };

        tracing::debug!(
            data_dir = %storage.data_dir.display(),
            database = %storage.database_path.display(),
            "Storage ready"
        );
        if !storage.database_path.exists() {
            tracing::warn!(
                path = %storage.database_path.display(),
                "No database file yet, an empty pokemon table will be created"
            );
        }
        Ok(storage)
    }

    /// Storage rooted at `data_dir` with the default database location
    fn under(data_dir: PathBuf) -> Self {
        let database_path = data_dir.join(SQLITE_SUBDIR).join(SQLITE_DB_FILENAME);
        Self {
            data_dir,
            database_path,
        }
    }

    /// `POKEDEX_DATA_DIR`, else the platform data dir, else `./.pokedex`
    pub fn resolve_data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            return expand_path(&dir);
        }
        ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| expand_path("").join(APP_DOT_FOLDER))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// SQLite file the server opens
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_lives_in_sqlite_subdir() {
        let storage = AppStorage::under(PathBuf::from("/data/pokedex"));
        assert_eq!(storage.data_dir(), Path::new("/data/pokedex"));
        assert_eq!(
            storage.database_path(),
            Path::new("/data/pokedex/sqlite/pokedex.db")
        );
    }

    #[test]
    fn test_resolve_data_dir_is_never_empty() {
        assert!(!AppStorage::resolve_data_dir().as_os_str().is_empty());
    }
}
