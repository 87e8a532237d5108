//! Result collections
//!
//! A [`ResultSet`] holds the records one category matched; a
//! [`CompositeResult`] groups per-category sets in the order the categories
//! were configured.

mod types;

pub use types::{CategoryResults, CompositeResult, ResultSet};
