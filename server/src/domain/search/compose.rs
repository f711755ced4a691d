//! Query composer
//!
//! Turns a `FilterSet` into one parameterized SELECT. Every present selection
//! yields exactly one `Clause`; clauses are folded in projection order so the
//! parameter list lines up with the placeholders of the joined WHERE string.

use crate::data::types::Param;

use super::filters::{FilterSet, Selection};
use super::registry::{AttributeSpec, ClauseKind};

/// Table every search runs against
pub const TABLE: &str = "pokemonattributes";

/// Columns every result row starts with
pub const IDENTITY_COLUMNS: [&str; 2] = ["name", "image"];

/// Conjunct used when nothing was selected, so the WHERE is never empty
pub const TAUTOLOGY: &str = "1 = 1";

/// One SQL conjunct with the values and projection it brings along
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub fragment: String,
    pub params: Vec<Param>,
    pub columns: Vec<&'static str>,
    pub descriptors: Vec<&'static str>,
}

/// A composed search query
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedQuery {
    /// `name, image` followed by the selected columns
    pub columns: Vec<&'static str>,
    pub clauses: Vec<String>,
    pub params: Vec<Param>,
    /// One per selected column, aligned with `columns[2..]`
    pub descriptors: Vec<&'static str>,
}

impl ComposedQuery {
    /// Full SELECT statement with `?` placeholders
    pub fn sql(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE {}",
            self.columns.join(", "),
            TABLE,
            self.clauses.join(" AND ")
        )
    }

    /// Columns after the identity pair
    pub fn selected_columns(&self) -> &[&'static str] {
        &self.columns[IDENTITY_COLUMNS.len()..]
    }

    fn push(&mut self, clause: Clause) {
        self.clauses.push(clause.fragment);
        self.params.extend(clause.params);
        self.columns.extend(clause.columns);
        self.descriptors.extend(clause.descriptors);
    }
}

/// Build the clause for one attribute selection
///
/// Returns `None` when the selection does not fit the attribute's kind.
pub fn clause_for(attr: &'static AttributeSpec, selection: &Selection) -> Option<Clause> {
    let (columns, descriptors): (Vec<_>, Vec<_>) = attr.projection().into_iter().unzip();

    let (fragment, params) = match (&attr.kind, selection) {
        (ClauseKind::Range, Selection::Range { min, max }) => (
            format!("{} BETWEEN ? AND ?", attr.column),
            vec![Param::Text(min.clone()), Param::Text(max.clone())],
        ),
        (ClauseKind::Choice, Selection::Values(values)) => {
            let (op, param) = choice_param(values);
            (format!("{} {}", attr.column, op), vec![param])
        }
        (ClauseKind::CompositeChoice { second_column, .. }, Selection::Values(values)) => {
            let (op, param) = choice_param(values);
            (
                format!("({} {} OR {} {})", attr.column, op, second_column, op),
                vec![param.clone(), param],
            )
        }
        (ClauseKind::Membership, Selection::Values(values)) => (
            format!("{} IN ?", attr.column),
            vec![Param::List(values.clone())],
        ),
        _ => return None,
    };

    Some(Clause {
        fragment,
        params,
        columns,
        descriptors,
    })
}

/// `= ?` for a single value, `IN ?` with a list otherwise
fn choice_param(values: &[String]) -> (&'static str, Param) {
    match values {
        [single] => ("= ?", Param::Text(single.clone())),
        _ => ("IN ?", Param::List(values.to_vec())),
    }
}

/// Compose all present selections into one query
pub fn compose(filters: &FilterSet) -> ComposedQuery {
    let mut query = ComposedQuery {
        columns: IDENTITY_COLUMNS.to_vec(),
        clauses: Vec::new(),
        params: Vec::new(),
        descriptors: Vec::new(),
    };

    for (attr, selection) in filters.iter() {
        match clause_for(attr, selection) {
            Some(clause) => query.push(clause),
            None => tracing::warn!(key = attr.key, "Skipping selection that does not fit its attribute"),
        }
    }

    if query.clauses.is_empty() {
        query.clauses.push(TAUTOLOGY.to_string());
    }

    tracing::debug!(
        clauses = query.clauses.len(),
        columns = query.selected_columns().len(),
        params = query.params.len(),
        "Composed search query"
    );
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::registry::lookup;

    fn range(min: &str, max: &str) -> Selection {
        Selection::Range {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    fn values(vs: &[&str]) -> Selection {
        Selection::Values(vs.iter().map(|v| v.to_string()).collect())
    }

    fn text(v: &str) -> Param {
        Param::Text(v.to_string())
    }

    fn list(vs: &[&str]) -> Param {
        Param::List(vs.iter().map(|v| v.to_string()).collect())
    }

    fn placeholder_count(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn test_empty_filters_use_tautology() {
        let query = compose(&FilterSet::default());
        assert_eq!(query.clauses, vec![TAUTOLOGY.to_string()]);
        assert!(query.params.is_empty());
        assert!(query.descriptors.is_empty());
        assert_eq!(
            query.sql(),
            "SELECT name, image FROM pokemonattributes WHERE 1 = 1"
        );
    }

    #[test]
    fn test_single_range() {
        let mut filters = FilterSet::default();
        filters.insert("hp", range("50", "100")).unwrap();

        let query = compose(&filters);
        assert_eq!(
            query.sql(),
            "SELECT name, image, hp FROM pokemonattributes WHERE hp BETWEEN ? AND ?"
        );
        assert_eq!(query.params, vec![text("50"), text("100")]);
        assert_eq!(query.descriptors, vec!["HP: "]);
    }

    #[test]
    fn test_range_values_pass_through_verbatim() {
        let mut filters = FilterSet::default();
        filters.insert("height", range("2.5", "0.5")).unwrap();

        let query = compose(&filters);
        assert_eq!(query.clauses, vec!["height_m BETWEEN ? AND ?"]);
        assert_eq!(query.params, vec![text("2.5"), text("0.5")]);
    }

    #[test]
    fn test_choice_single_vs_many() {
        let attr = lookup("primary_type").unwrap();

        let one = clause_for(attr, &values(&["Fire"])).unwrap();
        assert_eq!(one.fragment, "pokemon_type_1 = ?");
        assert_eq!(one.params, vec![text("Fire")]);

        let many = clause_for(attr, &values(&["Fire", "Water"])).unwrap();
        assert_eq!(many.fragment, "pokemon_type_1 IN ?");
        assert_eq!(many.params, vec![list(&["Fire", "Water"])]);
        assert_eq!(many.descriptors, vec!["Primary Type: "]);
    }

    #[test]
    fn test_egg_type_composite() {
        let attr = lookup("egg_type").unwrap();

        let one = clause_for(attr, &values(&["Monster"])).unwrap();
        assert_eq!(one.fragment, "(egg_type_1 = ? OR egg_type_2 = ?)");
        assert_eq!(one.params, vec![text("Monster"), text("Monster")]);
        assert_eq!(one.columns, vec!["egg_type_1", "egg_type_2"]);
        assert_eq!(
            one.descriptors,
            vec!["Primary Egg Type: ", "Secondary Egg Type: "]
        );

        let many = clause_for(attr, &values(&["Monster", "Dragon"])).unwrap();
        assert_eq!(many.fragment, "(egg_type_1 IN ? OR egg_type_2 IN ?)");
        assert_eq!(
            many.params,
            vec![list(&["Monster", "Dragon"]), list(&["Monster", "Dragon"])]
        );
    }

    #[test]
    fn test_name_membership_projects_nothing() {
        let mut filters = FilterSet::default();
        filters.insert("name", values(&["Charizard"])).unwrap();

        let query = compose(&filters);
        assert_eq!(
            query.sql(),
            "SELECT name, image FROM pokemonattributes WHERE name IN ?"
        );
        assert_eq!(query.params, vec![list(&["Charizard"])]);
        assert!(query.descriptors.is_empty());
    }

    #[test]
    fn test_mismatched_selection_yields_no_clause() {
        let attr = lookup("hp").unwrap();
        assert!(clause_for(attr, &values(&["50"])).is_none());
    }

    #[test]
    fn test_groups_compose_in_projection_order() {
        let mut filters = FilterSet::default();
        filters.insert("against_fire", range("0", "1")).unwrap();
        filters.insert("generation", values(&["1", "2"])).unwrap();
        filters.insert("weight", range("10", "100")).unwrap();
        filters.insert("speed", range("60", "120")).unwrap();
        filters.insert("hp", range("50", "100")).unwrap();
        filters.insert("name", values(&["Charmander", "Charizard"])).unwrap();

        let query = compose(&filters);
        assert_eq!(
            query.columns,
            vec![
                "name",
                "image",
                "hp",
                "speed",
                "weight_kg",
                "generation",
                "against_fire"
            ]
        );
        assert_eq!(
            query.clauses,
            vec![
                "name IN ?",
                "hp BETWEEN ? AND ?",
                "speed BETWEEN ? AND ?",
                "weight_kg BETWEEN ? AND ?",
                "generation IN ?",
                "against_fire BETWEEN ? AND ?",
            ]
        );
        assert_eq!(
            query.params,
            vec![
                list(&["Charmander", "Charizard"]),
                text("50"),
                text("100"),
                text("60"),
                text("120"),
                text("10"),
                text("100"),
                list(&["1", "2"]),
                text("0"),
                text("1"),
            ]
        );
        assert_eq!(
            query.descriptors,
            vec![
                "HP: ",
                "Speed: ",
                "Weight (kg): ",
                "Generation: ",
                "Damage multiplier applied when taking damage from a fire type attack: ",
            ]
        );
    }

    #[test]
    fn test_params_line_up_with_placeholders() {
        let mut filters = FilterSet::default();
        filters.insert("egg_type", values(&["Monster"])).unwrap();
        filters.insert("catch_rate", range("3", "45")).unwrap();
        filters.insert("growth_rate", values(&["Slow", "Medium Slow"])).unwrap();

        let query = compose(&filters);
        assert_eq!(placeholder_count(&query.sql()), query.params.len());
        assert_eq!(
            query.descriptors.len(),
            query.columns.len() - IDENTITY_COLUMNS.len()
        );
        assert_eq!(query.selected_columns().len(), query.descriptors.len());
    }
}
