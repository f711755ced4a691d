//! Filter specifications
//!
//! A `FilterSpec` maps the attribute keys of one group to a selection. Keys
//! that are absent are left out of the query entirely. A `FilterSet` bundles
//! the four group specs built for one request.

use std::collections::HashMap;

use thiserror::Error;

use super::registry::{self, AttributeSpec, ClauseKind, FilterGroup};

/// What the user picked for one attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Inclusive bounds, passed to the store verbatim
    Range { min: String, max: String },
    /// Accepted values, never empty
    Values(Vec<String>),
}

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("Attribute '{key}' is not part of the {group} group")]
    UnknownAttribute { group: &'static str, key: String },

    #[error("Attribute '{key}' expects a {expected} selection")]
    ShapeMismatch { key: String, expected: &'static str },

    #[error("Attribute '{key}' has an empty selection")]
    EmptySelection { key: String },
}

/// Selections for one attribute group
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    group: FilterGroup,
    selections: HashMap<&'static str, Selection>,
}

impl FilterSpec {
    pub fn new(group: FilterGroup) -> Self {
        Self {
            group,
            selections: HashMap::new(),
        }
    }

    pub fn group(&self) -> FilterGroup {
        self.group
    }

    /// Set the selection for `key`, replacing any earlier one
    ///
    /// The key must belong to this group and the selection must fit the
    /// attribute's kind (bounds for ranges, at least one value otherwise).
    pub fn insert(&mut self, key: &str, selection: Selection) -> Result<(), FilterError> {
        let spec = registry::lookup(key)
            .filter(|a| a.group == self.group)
            .ok_or_else(|| FilterError::UnknownAttribute {
                group: self.group.as_str(),
                key: key.to_string(),
            })?;

        match (&spec.kind, &selection) {
            (ClauseKind::Range, Selection::Range { .. }) => {}
            (ClauseKind::Range, Selection::Values(_)) => {
                return Err(FilterError::ShapeMismatch {
                    key: key.to_string(),
                    expected: "range",
                });
            }
            (_, Selection::Range { .. }) => {
                return Err(FilterError::ShapeMismatch {
                    key: key.to_string(),
                    expected: "value list",
                });
            }
            (_, Selection::Values(values)) if values.is_empty() => {
                return Err(FilterError::EmptySelection {
                    key: key.to_string(),
                });
            }
            (_, Selection::Values(_)) => {}
        }

        self.selections.insert(spec.key, selection);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Selection> {
        self.selections.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Present selections in registry declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static AttributeSpec, &Selection)> {
        registry::attributes_in(self.group)
            .filter_map(|attr| self.selections.get(attr.key).map(|sel| (attr, sel)))
    }
}

/// The four group specs of one request, plus the min>max flag
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSet {
    pub base: FilterSpec,
    pub quant: FilterSpec,
    pub categorical: FilterSpec,
    pub type_effect: FilterSpec,
    /// Set when any submitted range had a minimum above its maximum
    pub min_greater_than_max: bool,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            base: FilterSpec::new(FilterGroup::Base),
            quant: FilterSpec::new(FilterGroup::Quant),
            categorical: FilterSpec::new(FilterGroup::Categorical),
            type_effect: FilterSpec::new(FilterGroup::TypeEffect),
            min_greater_than_max: false,
        }
    }
}

impl FilterSet {
    pub fn spec(&self, group: FilterGroup) -> &FilterSpec {
        match group {
            FilterGroup::Base => &self.base,
            FilterGroup::Quant => &self.quant,
            FilterGroup::Categorical => &self.categorical,
            FilterGroup::TypeEffect => &self.type_effect,
        }
    }

    pub fn spec_mut(&mut self, group: FilterGroup) -> &mut FilterSpec {
        match group {
            FilterGroup::Base => &mut self.base,
            FilterGroup::Quant => &mut self.quant,
            FilterGroup::Categorical => &mut self.categorical,
            FilterGroup::TypeEffect => &mut self.type_effect,
        }
    }

    /// Insert into whichever group owns `key`
    pub fn insert(&mut self, key: &str, selection: Selection) -> Result<(), FilterError> {
        let group = registry::lookup(key)
            .map(|a| a.group)
            .ok_or_else(|| FilterError::UnknownAttribute {
                group: "any",
                key: key.to_string(),
            })?;
        self.spec_mut(group).insert(key, selection)
    }

    /// True when no group carries any selection (the name included)
    pub fn is_empty(&self) -> bool {
        FilterGroup::ALL.iter().all(|g| self.spec(*g).is_empty())
    }

    /// All present selections in projection order
    pub fn iter(&self) -> impl Iterator<Item = (&'static AttributeSpec, &Selection)> {
        FilterGroup::ALL
            .into_iter()
            .flat_map(move |g| self.spec(g).iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: &str, max: &str) -> Selection {
        Selection::Range {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    fn values(vs: &[&str]) -> Selection {
        Selection::Values(vs.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_insert_checks_group() {
        let mut spec = FilterSpec::new(FilterGroup::Base);
        assert!(spec.insert("hp", range("50", "100")).is_ok());

        let err = spec.insert("height", range("1", "2")).unwrap_err();
        assert_eq!(
            err,
            FilterError::UnknownAttribute {
                group: "base",
                key: "height".to_string()
            }
        );
        assert_eq!(spec.len(), 1);
    }

    #[test]
    fn test_insert_checks_shape() {
        let mut spec = FilterSpec::new(FilterGroup::Categorical);
        assert!(matches!(
            spec.insert("generation", range("1", "3")),
            Err(FilterError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            spec.insert("generation", values(&[])),
            Err(FilterError::EmptySelection { .. })
        ));
        assert!(spec.insert("generation", values(&["1"])).is_ok());

        let mut base = FilterSpec::new(FilterGroup::Base);
        assert!(matches!(
            base.insert("hp", values(&["50"])),
            Err(FilterError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_iter_follows_declaration_order() {
        let mut spec = FilterSpec::new(FilterGroup::Base);
        spec.insert("speed", range("1", "2")).unwrap();
        spec.insert("hp", range("3", "4")).unwrap();
        spec.insert("attack", range("5", "6")).unwrap();

        let keys: Vec<&str> = spec.iter().map(|(a, _)| a.key).collect();
        assert_eq!(keys, vec!["hp", "attack", "speed"]);
    }

    #[test]
    fn test_filter_set_routes_to_group() {
        let mut set = FilterSet::default();
        assert!(set.is_empty());

        set.insert("against_fire", range("0", "1")).unwrap();
        set.insert("egg_type", values(&["Monster"])).unwrap();
        set.insert("name", values(&["Pikachu"])).unwrap();

        assert!(!set.is_empty());
        assert_eq!(set.type_effect.len(), 1);
        assert_eq!(set.categorical.len(), 1);
        assert_eq!(set.base.len(), 1);
        assert!(set.quant.is_empty());

        let keys: Vec<&str> = set.iter().map(|(a, _)| a.key).collect();
        assert_eq!(keys, vec!["name", "egg_type", "against_fire"]);
    }

    #[test]
    fn test_filter_set_unknown_key() {
        let mut set = FilterSet::default();
        assert!(matches!(
            set.insert("shininess", values(&["yes"])),
            Err(FilterError::UnknownAttribute { .. })
        ));
    }
}
