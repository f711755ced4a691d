//! Name prefix matching

use crate::utils::string::title_case;

/// Normalize free-text name input the way stored names are written
pub fn normalize(input: &str) -> String {
    title_case(input.trim())
}

/// Names that start with `query`, in catalog order
///
/// Matching is case-sensitive and char by char, so callers normalize the
/// query first. An empty query matches nothing.
pub fn match_prefix<'a, I>(query: &str, names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    if query.is_empty() {
        return Vec::new();
    }

    names
        .into_iter()
        .filter(|name| is_prefix(query, name))
        .cloned()
        .collect()
}

fn is_prefix(query: &str, candidate: &str) -> bool {
    let mut candidate = candidate.chars();
    query.chars().all(|q| candidate.next() == Some(q))
}
