//! Category loader for building a registry from configuration

use super::registry::CategoryRegistry;
use super::SearchCategory;
use crate::config::Settings;
use crate::record::DataSource;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds a [`CategoryRegistry`] from settings plus a binding of category
/// names to data sources.
pub struct CategoryLoader;

impl CategoryLoader {
    /// Load all configured categories, in settings order. Disabled entries
    /// are skipped; entries with no bound data source are skipped with a
    /// warning rather than registered half-configured.
    pub fn load(
        settings: &Settings,
        sources: &HashMap<String, Arc<dyn DataSource>>,
    ) -> Result<CategoryRegistry> {
        let mut registry = CategoryRegistry::new();

        for config in &settings.categories {
            if config.disabled {
                info!("Skipping disabled category: {}", config.name);
                continue;
            }

            let Some(source) = sources.get(&config.name) else {
                warn!("No data source bound for category: {}", config.name);
                continue;
            };

            let category = SearchCategory::new(&config.name)
                .source(source.clone())
                .lookups(&config.lookups);

            info!(
                "Loaded category: {} ({} lookups)",
                config.name,
                config.lookups.len()
            );
            registry.register(Arc::new(category));
        }

        info!("Loaded {} categories", registry.len());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CategoryConfig, Settings};
    use crate::record::MemorySource;

    fn settings() -> Settings {
        Settings {
            categories: vec![
                CategoryConfig {
                    name: "people".to_string(),
                    lookups: vec!["name__icontains".to_string()],
                    disabled: false,
                },
                CategoryConfig {
                    name: "archive".to_string(),
                    lookups: vec!["title__icontains".to_string()],
                    disabled: true,
                },
                CategoryConfig {
                    name: "unbound".to_string(),
                    lookups: vec!["title__icontains".to_string()],
                    disabled: false,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_load_skips_disabled_and_unbound() {
        let mut sources: HashMap<String, Arc<dyn DataSource>> = HashMap::new();
        sources.insert(
            "people".to_string(),
            Arc::new(MemorySource::new()) as Arc<dyn DataSource>,
        );
        sources.insert(
            "archive".to_string(),
            Arc::new(MemorySource::new()) as Arc<dyn DataSource>,
        );

        let registry = CategoryLoader::load(&settings(), &sources).unwrap();
        assert_eq!(registry.names(), vec!["people"]);
    }
}
