//! Unit tests for the public item API.

pub mod items_base;
pub mod properties;
