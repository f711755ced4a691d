//! Core application
//!
//! Wires config, storage, the pokemon store and the search service together,
//! then hands them to the HTTP server.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::ApiServer;
use crate::core::banner;
use crate::core::cli::{self, CliConfig, Commands, SystemCommands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::core::shutdown::ShutdownService;
use crate::core::storage::AppStorage;
use crate::data::SqliteService;
use crate::domain::SearchService;

pub struct CoreApp {
    pub shutdown: ShutdownService,
    pub config: AppConfig,
    pub storage: AppStorage,
    pub database: Arc<SqliteService>,
    pub search: SearchService,
}

impl CoreApp {
    /// Parse the command line and run the selected command
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        install_tracing();

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        if let Some(Commands::System { command }) = command {
            return run_system_command(command);
        }

        let app = Self::init(&cli_config).await?;
        app.serve().await
    }

    async fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        let storage = AppStorage::init(&config).await?;

        let db_path = storage.database_path();
        let database = SqliteService::init(db_path, config.database.max_connections)
            .await
            .with_context(|| format!("Failed to open pokemon database at {}", db_path.display()))?;
        let database = Arc::new(database);

        let static_dir = &config.assets.static_dir;
        if !static_dir.is_dir() {
            tracing::warn!(
                path = %static_dir.display(),
                "Static directory not found, images and charts will not be served"
            );
        }

        Ok(Self {
            search: SearchService::new(Arc::new(database.clone())),
            shutdown: ShutdownService::new(database.clone()),
            config,
            storage,
            database,
        })
    }

    async fn serve(self) -> Result<()> {
        // Signals must be caught before the listener starts accepting
        self.shutdown.install_signal_handlers();

        let pokemon = self.search.count().await;
        if pokemon == 0 {
            tracing::warn!("The pokemonattributes table is empty, every search will come back empty");
        }

        banner::print_banner(
            &self.config.server.host,
            self.config.server.port,
            &self.storage.database_path().display().to_string(),
            &self.config.assets.static_dir.display().to_string(),
            pokemon,
        );

        let app = ApiServer::new(self).start().await?;
        app.shutdown.shutdown().await;
        Ok(())
    }
}

fn run_system_command(command: SystemCommands) -> Result<()> {
    match command {
        SystemCommands::Prune { yes } => prune(&AppStorage::resolve_data_dir(), yes),
    }
}

/// Remove the local data directory, asking first unless `assume_yes` is set
fn prune(data_dir: &Path, assume_yes: bool) -> Result<()> {
    if !data_dir.exists() {
        println!("No local pokedex data at {}", data_dir.display());
        return Ok(());
    }

    let data_dir = data_dir
        .canonicalize()
        .unwrap_or_else(|_| data_dir.to_path_buf());
    println!("Local pokedex data: {}", data_dir.display());
    println!("A database passed with --database or set in database.path is not touched.");

    if !assume_yes {
        let stdin = std::io::stdin();
        if !confirm("Delete it?", &mut stdin.lock(), &mut std::io::stdout())? {
            println!("Aborted.");
            return Ok(());
        }
    }

    std::fs::remove_dir_all(&data_dir)
        .with_context(|| format!("Failed to delete {}", data_dir.display()))?;
    println!("Deleted {}", data_dir.display());
    Ok(())
}

fn confirm(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// POKEDEX_LOG wins over RUST_LOG; both fall back to info
fn log_filter() -> String {
    [ENV_LOG, "RUST_LOG"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok())
        .unwrap_or_else(|| format!("info,{APP_NAME_LOWER}=info"))
}

fn install_tracing() {
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(log_filter())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> bool {
        let mut out = Vec::new();
        confirm("Delete it?", &mut Cursor::new(text.as_bytes()), &mut out).unwrap()
    }

    #[test]
    fn test_confirm_accepts_yes() {
        assert!(answer("y\n"));
        assert!(answer("YES\n"));
        assert!(!answer("\n"));
        assert!(!answer("nope\n"));
    }

    #[test]
    fn test_prune_without_data_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        prune(&missing, true).unwrap();
        assert!(!missing.exists());
    }

    #[test]
    fn test_prune_removes_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(data.join("sqlite")).unwrap();

        prune(&data, true).unwrap();
        assert!(!data.exists());
    }
}
