//! Data storage layer
//!
//! - `sqlite` - SQLite store holding the `pokemonattributes` table
//! - `types` - Bind parameters, dynamic cells and result rows
//! - `traits` - Repository trait the search domain queries through
//! - `error` - Unified error type

pub mod error;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::DataError;
pub use sqlite::SqliteService;
pub use traits::PokemonRepository;
pub use types::{CellValue, Param, ResultRow};
