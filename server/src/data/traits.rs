//! Repository traits for the pokemon store
//!
//! The search domain only talks to the store through this trait, so handlers
//! and tests can run against any backend holding a `pokemonattributes` table.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::types::{Param, ResultRow};

/// Read access to the pokemon attribute table
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Run a `SELECT name, image, ...` query and decode every row
    ///
    /// `params` bind positionally to the `?` placeholders of `sql`.
    async fn fetch_rows(&self, sql: &str, params: &[Param]) -> Result<Vec<ResultRow>, DataError>;

    /// Every stored pokemon name in catalog order
    async fn all_names(&self) -> Result<Vec<String>, DataError>;

    /// Number of stored pokemon
    async fn count(&self) -> Result<u64, DataError>;
}
