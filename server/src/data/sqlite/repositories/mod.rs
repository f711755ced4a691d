//! SQLite repositories
//!
//! Row types (`ResultRow`, `CellValue`) are imported from `crate::data::types`.

pub mod pokemon;

pub use pokemon::{all_names, count, fetch_rows};
