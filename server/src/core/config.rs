//! Layered configuration
//!
//! Defaults, then `~/.pokedex/pokedex.json`, then `./pokedex.json` or the file
//! named by `--config`, then CLI flags (clap fills those from env vars).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::utils::file::expand_path;

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR,
    SQLITE_MAX_CONNECTIONS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DatabaseSection {
    path: Option<String>,
    max_connections: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AssetsSection {
    static_dir: Option<String>,
}

/// One `pokedex.json` file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    server: ServerSection,
    database: DatabaseSection,
    assets: AssetsSection,
    #[serde(flatten)]
    unknown: BTreeMap<String, serde_json::Value>,
}

impl FileConfig {
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if !parsed.unknown.is_empty() {
            let keys: Vec<&str> = parsed.unknown.keys().map(String::as_str).collect();
            tracing::warn!(
                path = %path.display(),
                fields = %keys.join(", "),
                "Ignoring unknown config fields"
            );
        }
        Ok(parsed)
    }

    /// Keys set here win over `base`
    fn layered_over(self, base: FileConfig) -> FileConfig {
        FileConfig {
            server: ServerSection {
                host: self.server.host.or(base.server.host),
                port: self.server.port.or(base.server.port),
            },
            database: DatabaseSection {
                path: self.database.path.or(base.database.path),
                max_connections: self.database.max_connections.or(base.database.max_connections),
            },
            assets: AssetsSection {
                static_dir: self.assets.static_dir.or(base.assets.static_dir),
            },
            unknown: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Explicit database file; `None` uses `<data_dir>/sqlite/pokedex.db`
    pub path: Option<PathBuf>,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AssetsConfig {
    /// Root of `all_pokemon_images/` and `radar_plots/`
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub assets: AssetsConfig,
}

impl AppConfig {
    pub fn load(cli: &CliConfig) -> Result<Self, ConfigError> {
        let files = config_files(cli.config.as_deref())?;
        let mut merged = FileConfig::default();
        for path in &files {
            merged = FileConfig::read(path)?.layered_over(merged);
        }
        tracing::debug!(files = ?files, "Config files loaded");

        let config = Self::resolve(cli, merged);
        config.check()?;
        tracing::debug!(
            host = %config.server.host,
            port = config.server.port,
            database = ?config.database.path,
            static_dir = %config.assets.static_dir.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    fn resolve(cli: &CliConfig, file: FileConfig) -> Self {
        let FileConfig {
            server,
            database,
            assets,
            ..
        } = file;

        let database_path = match &cli.database {
            Some(path) => Some(expand_path(&path.to_string_lossy())),
            None => database.path.as_deref().map(expand_path),
        };
        let static_dir = match &cli.static_dir {
            Some(dir) => expand_path(&dir.to_string_lossy()),
            None => expand_path(assets.static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR)),
        };

        Self {
            server: ServerConfig {
                host: cli
                    .host
                    .clone()
                    .or(server.host)
                    .unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: cli.port.or(server.port).unwrap_or(DEFAULT_PORT),
            },
            database: DatabaseConfig {
                path: database_path,
                max_connections: database.max_connections.unwrap_or(SQLITE_MAX_CONNECTIONS),
            },
            assets: AssetsConfig { static_dir },
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be greater than 0"));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Config files to read, lowest precedence first
fn config_files(explicit: Option<&Path>) -> Result<Vec<PathBuf>, ConfigError> {
    let mut files = Vec::new();

    if let Some(profile) = dirs::home_dir()
        .map(|home| home.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
    {
        files.push(profile);
    }

    match explicit {
        Some(path) => {
            let path = expand_path(&path.to_string_lossy());
            if !path.is_file() {
                return Err(ConfigError::NotFound(path));
            }
            files.push(path);
        }
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.is_file() {
                files.push(local);
            }
        }
    }
    Ok(files)
}

/// Wildcard bind addresses
pub(crate) fn is_all_interfaces(host: &str) -> bool {
    matches!(host, "0.0.0.0" | "::" | "[::]")
}
