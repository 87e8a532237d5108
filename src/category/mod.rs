//! Search categories: named, independently configured search scopes
//!
//! The default [`SearchCategory`] pairs a data source with an ordered list
//! of field lookups and answers queries through the OR-predicate builder.
//! Categories needing different search behavior (a full-text backend, say)
//! implement [`ResultProvider`] themselves and register alongside the
//! declarative ones.

mod loader;
mod registry;

pub use loader::CategoryLoader;
pub use registry::CategoryRegistry;

use crate::error::SearchError;
use crate::lookup::{build_predicate, LookupSpec};
use crate::query::Query;
use crate::record::DataSource;
use crate::results::ResultSet;
use std::sync::Arc;

/// Provider of results for one named search scope
pub trait ResultProvider: Send + Sync {
    /// Category name, unique within a registry
    fn name(&self) -> &str;

    /// Results for a validated query. Read-only: no provider mutates its
    /// data source while answering.
    fn get_results(&self, query: &Query) -> Result<ResultSet, SearchError>;
}

/// Declaratively configured search category: a data source plus ordered
/// field lookups.
///
/// Configuration is checked lazily on the first `get_results` call, not at
/// construction, so a registry can be assembled before every source is
/// bound. A category used with no source or with an empty lookup list fails
/// with [`SearchError::InvalidConfiguration`] naming the category.
pub struct SearchCategory {
    name: String,
    source: Option<Arc<dyn DataSource>>,
    lookups: Vec<LookupSpec>,
}

impl SearchCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            lookups: Vec::new(),
        }
    }

    /// Bind the data source searched by this category
    pub fn source(mut self, source: Arc<dyn DataSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the lookup list, parsing each entry from the `field__op`
    /// shorthand
    pub fn lookups<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lookups = specs
            .into_iter()
            .map(|spec| LookupSpec::parse(spec.as_ref()))
            .collect();
        self
    }

    /// Append one lookup
    pub fn lookup(mut self, spec: LookupSpec) -> Self {
        self.lookups.push(spec);
        self
    }

    fn checked_config(&self) -> Result<(&Arc<dyn DataSource>, &[LookupSpec]), SearchError> {
        let source = self.source.as_ref().ok_or_else(|| {
            SearchError::config(format!(
                "{}: you need to bind a data source and lookups, or register \
                 your own ResultProvider",
                self.name
            ))
        })?;
        if self.lookups.is_empty() {
            return Err(SearchError::config(format!(
                "{}: lookups is empty",
                self.name
            )));
        }
        Ok((source, &self.lookups))
    }
}

impl ResultProvider for SearchCategory {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_results(&self, query: &Query) -> Result<ResultSet, SearchError> {
        let (source, lookups) = self.checked_config()?;
        let predicate = build_predicate(&query.text, lookups)?;
        Ok(source.filter(&predicate).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MemorySource;
    use serde_json::json;

    fn people_source() -> Arc<dyn DataSource> {
        Arc::new(MemorySource::from_json(vec![
            json!({ "name": "Ann" }),
            json!({ "name": "Bob", "email": "x@ann.io" }),
        ]))
    }

    #[test]
    fn test_category_matches_any_lookup() {
        let category = SearchCategory::new("people")
            .source(people_source())
            .lookups(["name__icontains", "email__icontains"]);

        let results = category.get_results(&Query::new("ann")).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_missing_source_fails_on_first_use() {
        // Construction succeeds; the configuration check runs lazily
        let category = SearchCategory::new("people").lookups(["name__icontains"]);

        let err = category.get_results(&Query::new("ann")).unwrap_err();
        match err {
            SearchError::InvalidConfiguration(message) => {
                assert!(message.starts_with("people:"), "got: {}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_lookups_fail_on_first_use() {
        let category = SearchCategory::new("people").source(people_source());

        let err = category.get_results(&Query::new("ann")).unwrap_err();
        match err {
            SearchError::InvalidConfiguration(message) => {
                assert_eq!(message, "people: lookups is empty");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_custom_provider_overrides_lookup_mechanism() {
        struct Everything;

        impl ResultProvider for Everything {
            fn name(&self) -> &str {
                "everything"
            }

            fn get_results(&self, _query: &Query) -> Result<ResultSet, SearchError> {
                Ok(people_source().all().into())
            }
        }

        let results = Everything.get_results(&Query::new("ignored")).unwrap();
        assert_eq!(results.len(), 2);
    }
}
