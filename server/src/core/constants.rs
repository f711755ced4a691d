// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "Pokedex";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "pokedex";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".pokedex";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "pokedex.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "POKEDEX_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "POKEDEX_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "POKEDEX_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "POKEDEX_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5000;

/// Maximum accepted request body (form submissions are small)
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Seconds to wait for in-flight work during shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "POKEDEX_DATA_DIR";

/// Environment variable for an explicit database file
pub const ENV_DATABASE: &str = "POKEDEX_DATABASE";

/// Environment variable for the static assets directory
pub const ENV_STATIC_DIR: &str = "POKEDEX_STATIC_DIR";

// =============================================================================
// SQLite
// =============================================================================

/// Subdirectory of the data directory holding the default database
pub const SQLITE_SUBDIR: &str = "sqlite";

/// Default database file name inside `SQLITE_SUBDIR`
pub const SQLITE_DB_FILENAME: &str = "pokedex.db";

/// Default pool size
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// Busy timeout for locked databases
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// Page cache size (negative value is KiB)
pub const SQLITE_CACHE_SIZE: &str = "-64000";

/// Pages between automatic WAL checkpoints
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

// =============================================================================
// Static Assets
// =============================================================================

/// Default directory holding `all_pokemon_images/` and `radar_plots/`
pub const DEFAULT_STATIC_DIR: &str = "static";

/// URL prefix the static directory is mounted under
pub const STATIC_ROUTE: &str = "/static";
