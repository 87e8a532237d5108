//! Result collection types

use crate::record::Record;
use std::sync::Arc;

/// Records matched by one category, in data source order
#[derive(Clone, Default)]
pub struct ResultSet {
    records: Vec<Arc<dyn Record>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Record>> {
        self.records.iter()
    }

    /// Consume the set, yielding the underlying records
    pub fn into_records(self) -> Vec<Arc<dyn Record>> {
        self.records
    }
}

impl From<Vec<Arc<dyn Record>>> for ResultSet {
    fn from(records: Vec<Arc<dyn Record>>) -> Self {
        Self { records }
    }
}

impl IntoIterator for ResultSet {
    type Item = Arc<dyn Record>;
    type IntoIter = std::vec::IntoIter<Arc<dyn Record>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Arc<dyn Record>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn Record>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::fmt::Debug for ResultSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultSet")
            .field("len", &self.records.len())
            .finish()
    }
}

/// Results for one named category
#[derive(Debug, Clone)]
pub struct CategoryResults {
    /// Category name
    pub category: String,
    /// Matched records
    pub results: ResultSet,
}

/// Per-category results grouped in category registration order
#[derive(Debug, Clone, Default)]
pub struct CompositeResult {
    entries: Vec<CategoryResults>,
}

impl CompositeResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one category's results, preserving call order
    pub fn push(&mut self, entry: CategoryResults) {
        self.entries.push(entry);
    }

    /// Result set for a category, by name
    pub fn get(&self, category: &str) -> Option<&ResultSet> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| &entry.results)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryResults> {
        self.entries.iter()
    }

    /// Number of category entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total records matched across all categories
    pub fn total_results(&self) -> usize {
        self.entries.iter().map(|entry| entry.results.len()).sum()
    }
}

impl IntoIterator for CompositeResult {
    type Item = CategoryResults;
    type IntoIter = std::vec::IntoIter<CategoryResults>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(records: Vec<serde_json::Value>) -> ResultSet {
        records
            .into_iter()
            .map(|r| Arc::new(r) as Arc<dyn Record>)
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_composite_preserves_order_and_counts() {
        let mut composite = CompositeResult::new();
        composite.push(CategoryResults {
            category: "people".to_string(),
            results: set_of(vec![serde_json::json!({ "name": "Ann" })]),
        });
        composite.push(CategoryResults {
            category: "products".to_string(),
            results: ResultSet::new(),
        });

        let names: Vec<&str> = composite.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(names, vec!["people", "products"]);
        assert_eq!(composite.len(), 2);
        assert_eq!(composite.total_results(), 1);
        assert_eq!(composite.get("products").unwrap().len(), 0);
        assert!(composite.get("places").is_none());
    }
}
