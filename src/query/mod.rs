//! Query forms and validated queries
//!
//! Raw request parameters arrive as a [`QueryForm`] (field names `q` and
//! `category`, matching the conventional search form); validating the form
//! against the configured categories produces an immutable [`Query`].
//! Failed validation is not a search error: the combined search treats it
//! as "no query" and returns an empty result.

use crate::category::CategoryRegistry;
use serde::{Deserialize, Serialize};

/// Raw, unvalidated search parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryForm {
    /// Search text (form field `q`)
    pub q: Option<String>,
    /// Optional category selector
    pub category: Option<String>,
}

impl QueryForm {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            category: None,
        }
    }

    /// Select a single category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Validate against the configured categories: `q` must be non-blank
    /// after trimming, and `category`, when given, must name a registered
    /// category.
    pub fn validate(&self, categories: &CategoryRegistry) -> Result<Query, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let text = self.q.as_deref().map(str::trim).unwrap_or("");
        if text.is_empty() {
            errors.add("q", "this field is required");
        }

        let category = match self.category.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                if categories.contains(name) {
                    Some(name.to_string())
                } else {
                    errors.add("category", format!("unknown category `{}`", name));
                    None
                }
            }
            _ => None,
        };

        if errors.is_empty() {
            Ok(Query {
                text: text.to_string(),
                category,
            })
        } else {
            Err(errors)
        }
    }
}

/// A validated search query, immutable once produced and never shared
/// across requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// The search text
    pub text: String,
    /// Restrict the search to one category
    pub category: Option<String>,
}

impl Query {
    /// Build a query directly, bypassing form validation. For callers that
    /// already hold trusted input.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    /// Restrict to a single category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Per-field validation failures collected while validating a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

/// A single field failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::SearchCategory;
    use std::sync::Arc;

    fn registry_with(names: &[&str]) -> CategoryRegistry {
        let mut registry = CategoryRegistry::new();
        for name in names {
            registry.register(Arc::new(SearchCategory::new(*name)));
        }
        registry
    }

    #[test]
    fn test_valid_form() {
        let registry = registry_with(&["people"]);
        let query = QueryForm::new("ann").validate(&registry).unwrap();
        assert_eq!(query.text, "ann");
        assert_eq!(query.category, None);
    }

    #[test]
    fn test_blank_text_rejected() {
        let registry = registry_with(&["people"]);
        for form in [
            QueryForm::default(),
            QueryForm::new(""),
            QueryForm::new("   "),
        ] {
            let errors = form.validate(&registry).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.iter().next().unwrap().field, "q");
        }
    }

    #[test]
    fn test_category_selector() {
        let registry = registry_with(&["people", "products"]);

        let query = QueryForm::new("ann")
            .with_category("people")
            .validate(&registry)
            .unwrap();
        assert_eq!(query.category.as_deref(), Some("people"));

        let errors = QueryForm::new("ann")
            .with_category("places")
            .validate(&registry)
            .unwrap_err();
        assert_eq!(errors.iter().next().unwrap().field, "category");
    }

    #[test]
    fn test_empty_selector_means_all_categories() {
        let registry = registry_with(&["people"]);
        let query = QueryForm::new("ann")
            .with_category("")
            .validate(&registry)
            .unwrap();
        assert_eq!(query.category, None);
    }

    #[test]
    fn test_text_is_trimmed() {
        let registry = registry_with(&["people"]);
        let query = QueryForm::new("  ann  ").validate(&registry).unwrap();
        assert_eq!(query.text, "ann");
    }
}
