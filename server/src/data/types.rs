//! Shared data types for the pokemon store

use std::fmt;

/// A value bound to one `?` placeholder of a composed query
///
/// `List` stands for a whole parenthesized value list (`IN ?`). Backends
/// without native array binding expand it into `(?, ?, ...)` at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Text(String),
    List(Vec<String>),
}

impl Param {
    /// Number of scalar values this parameter binds
    pub fn value_count(&self) -> usize {
        match self {
            Param::Text(_) => 1,
            Param::List(values) => values.len(),
        }
    }
}

/// Dynamically typed cell as returned by the store
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

/// Renders the way the result page has always shown stats: missing values as
/// `None` and whole reals with a trailing `.0` (`2.0`, `87.5`, `45`).
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "None"),
            CellValue::Integer(v) => write!(f, "{}", v),
            CellValue::Real(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{:.1}", v)
            }
            CellValue::Real(v) => write!(f, "{}", v),
            CellValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One matched pokemon: identity columns plus selected values in projection order
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub name: String,
    pub image: String,
    pub values: Vec<CellValue>,
}
