//! Pokemon search
//!
//! Request flow: form fields are collected into a `FilterSet`, composed into a
//! single parameterized query, executed against the store and assembled into
//! a `ResultsView`.
//!
//! - `registry` - static table of searchable attributes
//! - `filters` - per-group selections
//! - `collect` - form coercion
//! - `names` - name normalization and prefix matching
//! - `compose` - SQL composition
//! - `execute` - store execution
//! - `results` - presentation

pub mod collect;
pub mod compose;
pub mod execute;
pub mod filters;
pub mod names;
pub mod registry;
pub mod results;

use std::sync::Arc;

pub use collect::{CollectError, FormFields};
pub use compose::{ComposedQuery, compose};
pub use execute::{QueryOutcome, execute};
pub use filters::{FilterError, FilterSet, FilterSpec, Selection};
pub use registry::{AttributeSpec, FilterGroup};
pub use results::{Fallback, ResultsView};

use crate::data::PokemonRepository;

/// Runs searches and name lookups against one store
#[derive(Clone)]
pub struct SearchService {
    repo: Arc<dyn PokemonRepository>,
}

impl SearchService {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    /// Build the filter set for a submitted form
    ///
    /// Stored names are only loaded when a name was entered. If they cannot
    /// be loaded the name is matched against nothing and binds as typed.
    pub async fn collect(&self, form: &FormFields) -> Result<FilterSet, CollectError> {
        let name = form.name_query();
        let catalog = if name.is_empty() {
            Vec::new()
        } else {
            self.catalog().await
        };
        collect::collect(form, &name, &catalog)
    }

    /// Run a search and assemble what the client shows
    pub async fn search(&self, filters: &FilterSet) -> ResultsView {
        if filters.is_empty() {
            return ResultsView::fallback(Fallback::NoCriteria);
        }

        let empty_reason = if filters.min_greater_than_max {
            Fallback::MinGreaterThanMax
        } else {
            Fallback::NoMatches
        };

        let query = compose(filters);
        match execute(self.repo.as_ref(), &query).await {
            QueryOutcome::Rows(rows) if rows.is_empty() => ResultsView::fallback(empty_reason),
            QueryOutcome::Rows(rows) => ResultsView::from_rows(&rows, &query.descriptors),
            QueryOutcome::Failed => ResultsView::fallback(empty_reason).mark_failed(),
        }
    }

    /// Collect then search in one step
    pub async fn search_form(&self, form: &FormFields) -> Result<ResultsView, CollectError> {
        let filters = self.collect(form).await?;
        Ok(self.search(&filters).await)
    }

    /// Stored names starting with the normalized `prefix`
    pub async fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let query = names::normalize(prefix);
        if query.is_empty() {
            return Vec::new();
        }
        names::match_prefix(&query, &self.catalog().await)
    }

    /// Number of stored pokemon, zero when the store cannot be read
    pub async fn count(&self) -> u64 {
        self.repo.count().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to count stored pokemon");
            0
        })
    }

    async fn catalog(&self) -> Vec<String> {
        self.repo.all_names().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load pokemon names");
            Vec::new()
        })
    }
}
