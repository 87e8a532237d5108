//! Category registry preserving registration order

use super::ResultProvider;
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered registry of the configured search categories.
///
/// Registration order is the order categories appear in grouped results, so
/// it is preserved; re-registering a name replaces the provider in place.
/// The registry is assembled at startup and immutable afterwards, which is
/// the only sharing the search layer relies on.
#[derive(Default)]
pub struct CategoryRegistry {
    providers: Vec<Arc<dyn ResultProvider>>,
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name
    pub fn register(&mut self, provider: Arc<dyn ResultProvider>) {
        let name = provider.name().to_string();
        match self.index.get(&name) {
            Some(&position) => self.providers[position] = provider,
            None => {
                self.index.insert(name, self.providers.len());
                self.providers.push(provider);
            }
        }
    }

    /// Get a provider by category name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ResultProvider>> {
        self.index.get(name).map(|&position| &self.providers[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Category names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Providers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ResultProvider>> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::SearchCategory;

    #[test]
    fn test_registration_order_is_preserved() {
        let mut registry = CategoryRegistry::new();
        registry.register(Arc::new(SearchCategory::new("people")));
        registry.register(Arc::new(SearchCategory::new("products")));
        registry.register(Arc::new(SearchCategory::new("articles")));

        assert_eq!(registry.names(), vec!["people", "products", "articles"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("products"));
        assert!(!registry.contains("places"));
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let mut registry = CategoryRegistry::new();
        registry.register(Arc::new(SearchCategory::new("people")));
        registry.register(Arc::new(SearchCategory::new("products")));
        registry.register(Arc::new(SearchCategory::new("people")));

        assert_eq!(registry.names(), vec!["people", "products"]);
    }
}
