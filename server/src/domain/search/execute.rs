//! Query execution

use crate::data::traits::PokemonRepository;
use crate::data::types::ResultRow;

use super::compose::ComposedQuery;

/// What running a composed query produced
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// All matching rows, possibly none
    Rows(Vec<ResultRow>),
    /// The store rejected or failed the query; already logged
    Failed,
}

pub async fn execute(repo: &dyn PokemonRepository, query: &ComposedQuery) -> QueryOutcome {
    let sql = query.sql();
    match repo.fetch_rows(&sql, &query.params).await {
        Ok(rows) => {
            tracing::debug!(rows = rows.len(), "Search query returned");
            QueryOutcome::Rows(rows)
        }
        Err(e) if e.is_transient() => {
            tracing::warn!(error = %e, "Search query hit an unavailable pool");
            QueryOutcome::Failed
        }
        Err(e) => {
            tracing::error!(error = %e, sql = %sql, "Search query failed");
            QueryOutcome::Failed
        }
    }
}
