//! PokemonRepository trait implementation for SQLite

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::traits::PokemonRepository;
use crate::data::types::{Param, ResultRow};

use super::SqliteService;
use super::repositories::pokemon;

#[async_trait]
impl PokemonRepository for Arc<SqliteService> {
    async fn fetch_rows(&self, sql: &str, params: &[Param]) -> Result<Vec<ResultRow>, DataError> {
        pokemon::fetch_rows(self.pool(), sql, params)
            .await
            .map_err(Into::into)
    }

    async fn all_names(&self) -> Result<Vec<String>, DataError> {
        pokemon::all_names(self.pool()).await.map_err(Into::into)
    }

    async fn count(&self) -> Result<u64, DataError> {
        pokemon::count(self.pool()).await.map_err(Into::into)
    }
}
