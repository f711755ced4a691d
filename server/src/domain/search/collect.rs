//! Form collection
//!
//! Turns the raw search form into a `FilterSet`. Range attributes are toggled
//! by `add_<key>` and bounded by `min_<key>`/`max_<key>`; categorical
//! attributes arrive as a repeated `<key>` field; the name arrives as free
//! text and is resolved against the catalog of stored names.

use thiserror::Error;

use super::filters::{FilterError, FilterSet, Selection};
use super::names::{match_prefix, normalize};
use super::registry::{ATTRIBUTES, ClauseKind, NAME_KEY};

#[derive(Error, Debug, PartialEq)]
pub enum CollectError {
    #[error("Missing form field '{field}'")]
    MissingBound { field: String },

    #[error("Form field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Submitted form fields, keeping repeated keys in submission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted under `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `key`
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Normalized name input, empty when none was given
    pub fn name_query(&self) -> String {
        self.first(NAME_KEY).map(normalize).unwrap_or_default()
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// Build the filter set for one submission
///
/// `name` is the already normalized name input (see `FormFields::name_query`)
/// and `catalog` the stored names it is matched against. The catalog is only
/// consulted when `name` is non-empty.
pub fn collect(
    form: &FormFields,
    name: &str,
    catalog: &[String],
) -> Result<FilterSet, CollectError> {
    let mut filters = FilterSet::default();

    for attr in ATTRIBUTES {
        match attr.kind {
            ClauseKind::Range => {
                if !form.contains(&format!("add_{}", attr.key)) {
                    continue;
                }
                let (min, max) = bounds(form, attr.key)?;
                if parse_bound(&min.field, &min.raw)? > parse_bound(&max.field, &max.raw)? {
                    filters.min_greater_than_max = true;
                }
                filters.insert(
                    attr.key,
                    Selection::Range {
                        min: min.raw,
                        max: max.raw,
                    },
                )?;
            }
            ClauseKind::Choice | ClauseKind::CompositeChoice { .. } => {
                let values: Vec<String> = form
                    .all(attr.key)
                    .into_iter()
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect();
                if !values.is_empty() {
                    filters.insert(attr.key, Selection::Values(values))?;
                }
            }
            ClauseKind::Membership => {
                if name.is_empty() {
                    continue;
                }
                let mut matches = match_prefix(name, catalog);
                if matches.is_empty() {
                    matches.push(name.to_string());
                }
                filters.insert(attr.key, Selection::Values(matches))?;
            }
        }
    }

    if filters.min_greater_than_max {
        tracing::debug!("Search form has a minimum above its maximum");
    }
    Ok(filters)
}

struct Bound {
    field: String,
    raw: String,
}

fn bounds(form: &FormFields, key: &str) -> Result<(Bound, Bound), CollectError> {
    let read = |prefix: &str| {
        let field = format!("{}_{}", prefix, key);
        match form.first(&field) {
            Some(raw) => Ok(Bound {
                raw: raw.to_string(),
                field,
            }),
            None => Err(CollectError::MissingBound { field }),
        }
    };
    Ok((read("min")?, read("max")?))
}

fn parse_bound(field: &str, raw: &str) -> Result<f64, CollectError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CollectError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
