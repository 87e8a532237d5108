//! Search execution and fan-out

use crate::category::{CategoryRegistry, ResultProvider};
use crate::error::SearchError;
use crate::query::{Query, QueryForm};
use crate::results::{CategoryResults, CompositeResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Combined search over an ordered set of categories.
///
/// Holds only the immutable registry; every call builds its own query and
/// result collections, so a single instance serves concurrent callers
/// without locking.
pub struct MultiSearch {
    registry: Arc<CategoryRegistry>,
}

impl MultiSearch {
    pub fn new(registry: Arc<CategoryRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Validate a raw form and run the combined search. Invalid input
    /// yields an empty result without touching any category; it is not a
    /// configuration error.
    pub fn search(&self, form: &QueryForm) -> Result<CompositeResult, SearchError> {
        match form.validate(&self.registry) {
            Ok(query) => self.get_all_results(&query),
            Err(errors) => {
                debug!("Rejected query form: {}", errors);
                Ok(CompositeResult::new())
            }
        }
    }

    /// Run a validated query against every category in registration order,
    /// or against the single category its selector names. The first
    /// category error aborts the whole operation; there are no partial
    /// results.
    pub fn get_all_results(&self, query: &Query) -> Result<CompositeResult, SearchError> {
        if self.registry.is_empty() {
            return Err(SearchError::config("no search categories configured"));
        }

        let mut composite = CompositeResult::new();

        if let Some(name) = query.category.as_deref() {
            let provider = self.registry.get(name).ok_or_else(|| {
                SearchError::config(format!("unknown category `{}`", name))
            })?;
            composite.push(Self::run_category(provider, query)?);
            return Ok(composite);
        }

        info!(
            "Searching '{}' across {} categories",
            query.text,
            self.registry.len()
        );
        for provider in self.registry.iter() {
            composite.push(Self::run_category(provider, query)?);
        }
        Ok(composite)
    }

    fn run_category(
        provider: &Arc<dyn ResultProvider>,
        query: &Query,
    ) -> Result<CategoryResults, SearchError> {
        let results = provider.get_results(query)?;
        debug!(
            "Category {} returned {} results",
            provider.name(),
            results.len()
        );
        Ok(CategoryResults {
            category: provider.name().to_string(),
            results,
        })
    }
}
