//! Combined search across configured categories
//!
//! Fans a validated query out to every registered category (or the one a
//! selector names) and collects grouped per-category results.

mod executor;

pub use executor::MultiSearch;
