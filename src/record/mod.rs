//! Record and data source abstractions
//!
//! A [`Record`] exposes named string fields for matching; a [`DataSource`]
//! is a filterable collection of records. Filtering defaults to a linear
//! scan over the source, and backends with a native query capability
//! override it to push the predicate down.

use crate::lookup::Predicate;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Separator between segments of a nested field path
pub const PATH_SEPARATOR: &str = "__";

/// A searchable record with named string-valued fields
pub trait Record: Send + Sync {
    /// Look up a field by path. Nested paths use `__` as the separator
    /// (e.g. `author__email`). Returns `None` when the record has no such
    /// field; a record lacking a field never matches a lookup on it.
    fn field(&self, path: &str) -> Option<Cow<'_, str>>;
}

impl Record for HashMap<String, String> {
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        self.get(path).map(|value| Cow::from(value.as_str()))
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        self.get(path).map(|value| Cow::from(value.as_str()))
    }
}

impl Record for serde_json::Value {
    /// Traverses nested objects segment by segment. Scalar leaves are
    /// rendered as strings; arrays, objects, and null never match.
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        let mut node = self;
        for segment in path.split(PATH_SEPARATOR) {
            node = node.get(segment)?;
        }
        match node {
            serde_json::Value::String(s) => Some(Cow::from(s.as_str())),
            serde_json::Value::Number(n) => Some(Cow::from(n.to_string())),
            serde_json::Value::Bool(b) => Some(Cow::from(if *b { "true" } else { "false" })),
            _ => None,
        }
    }
}

/// A filterable collection of records
pub trait DataSource: Send + Sync {
    /// All records in this source, in source order.
    fn all(&self) -> Vec<Arc<dyn Record>>;

    /// Records matching the predicate, in source order. The default
    /// implementation scans `all()`.
    fn filter(&self, predicate: &Predicate) -> Vec<Arc<dyn Record>> {
        self.all()
            .into_iter()
            .filter(|record| predicate.matches(record.as_ref()))
            .collect()
    }
}

/// In-memory data source preserving insertion order
#[derive(Clone, Default)]
pub struct MemorySource {
    records: Vec<Arc<dyn Record>>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a source from JSON values
    pub fn from_json(records: Vec<serde_json::Value>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| Arc::new(record) as Arc<dyn Record>)
                .collect(),
        }
    }

    /// Append a record
    pub fn push(&mut self, record: impl Record + 'static) {
        self.records.push(Arc::new(record));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DataSource for MemorySource {
    fn all(&self) -> Vec<Arc<dyn Record>> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{build_predicate, LookupSpec};
    use serde_json::json;

    #[test]
    fn test_map_record_field() {
        let mut record = HashMap::new();
        record.insert("name".to_string(), "Ann".to_string());

        assert_eq!(record.field("name").as_deref(), Some("Ann"));
        assert_eq!(record.field("email"), None);
    }

    #[test]
    fn test_json_record_nested_field() {
        let record = json!({
            "title": "Widget",
            "author": { "email": "ann@example.com" },
            "stock": 42,
        });

        assert_eq!(record.field("title").as_deref(), Some("Widget"));
        assert_eq!(
            record.field("author__email").as_deref(),
            Some("ann@example.com")
        );
        assert_eq!(record.field("stock").as_deref(), Some("42"));
        assert_eq!(record.field("author__name"), None);
        // Non-scalar leaves never match
        assert_eq!(record.field("author"), None);
    }

    #[test]
    fn test_memory_source_filter_preserves_order() {
        let source = MemorySource::from_json(vec![
            json!({ "name": "Ann" }),
            json!({ "name": "Bob" }),
            json!({ "name": "Anna" }),
        ]);

        let lookups = vec![LookupSpec::parse("name__icontains")];
        let predicate = build_predicate("ann", &lookups).unwrap();
        let matched = source.filter(&predicate);

        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].field("name").as_deref(), Some("Ann"));
        assert_eq!(matched[1].field("name").as_deref(), Some("Anna"));
    }
}
