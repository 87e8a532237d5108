//! Settings structures for declarative search configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub categories: Vec<CategoryConfig>,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (MULTISEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MULTISEARCH_DEBUG") {
            self.search.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("MULTISEARCH_DEFAULT_CATEGORY") {
            self.search.default_category = Some(val);
        }
    }

    /// Get category config by name
    pub fn get_category(&self, name: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All enabled categories, in configuration order
    pub fn enabled_categories(&self) -> Vec<&CategoryConfig> {
        self.categories.iter().filter(|c| !c.disabled).collect()
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Category preselected when a form carries no selector
    pub default_category: Option<String>,
    /// Enable debug logging in the search path
    pub debug: bool,
}

/// One category's declarative configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Category name; also the key a data source is bound under
    pub name: String,
    /// Field lookups in `field__op` shorthand
    pub lookups: Vec<String>,
    /// Skip this category at load time
    pub disabled: bool,
}
