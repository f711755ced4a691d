//! API route handlers

pub mod health;
pub mod names;
pub mod search;
