//! Domain logic
//!
//! - `search` - attribute filters, query composition and result assembly

pub mod search;

pub use search::SearchService;
