//! Multisearch: declarative multi-category search over filterable record
//! collections.
//!
//! A [`SearchCategory`] pairs a data source with an ordered list of field
//! lookups; a query string is matched against every lookup and records
//! matching at least one are returned. A [`MultiSearch`] groups several
//! categories behind one combined search that fans a validated query out to
//! each of them and collects grouped per-category results.
//!
//! ```
//! use multisearch::{CategoryRegistry, MemorySource, MultiSearch, QueryForm, SearchCategory};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let people = MemorySource::from_json(vec![
//!     json!({ "name": "Ann" }),
//!     json!({ "name": "Bob", "email": "x@ann.io" }),
//! ]);
//!
//! let mut registry = CategoryRegistry::new();
//! registry.register(Arc::new(
//!     SearchCategory::new("people")
//!         .source(Arc::new(people))
//!         .lookups(["name__icontains", "email__icontains"]),
//! ));
//!
//! let search = MultiSearch::new(Arc::new(registry));
//! let results = search.search(&QueryForm::new("ann")).unwrap();
//! assert_eq!(results.get("people").unwrap().len(), 2);
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod lookup;
pub mod query;
pub mod record;
pub mod results;
pub mod search;

pub use category::{CategoryLoader, CategoryRegistry, ResultProvider, SearchCategory};
pub use config::Settings;
pub use error::SearchError;
pub use lookup::{build_predicate, LookupSpec, MatchOp, Predicate};
pub use query::{Query, QueryForm, ValidationErrors};
pub use record::{DataSource, MemorySource, Record};
pub use results::{CategoryResults, CompositeResult, ResultSet};
pub use search::MultiSearch;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
