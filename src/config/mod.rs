//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.
//! Category configuration is static: it is installed once at process start
//! and read-only afterwards, which is why the search layer needs no locking
//! around it.

mod settings;

pub use settings::*;

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::Path;

/// Global settings instance
static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Install the global settings. Fails if settings were already installed.
pub fn init(settings: Settings) -> Result<()> {
    SETTINGS
        .set(settings)
        .map_err(|_| anyhow::anyhow!("settings already initialized"))
}

/// Load global settings from a YAML file, applying `MULTISEARCH_*`
/// environment overrides on top.
pub fn init_from_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    init(settings)
}

/// Install default (empty) global settings
pub fn init_default() -> Result<()> {
    init(Settings::default())
}

/// Get a reference to the global settings
pub fn get() -> &'static Settings {
    SETTINGS.get().expect("settings not initialized")
}

/// Check if settings have been installed
pub fn is_initialized() -> bool {
    SETTINGS.get().is_some()
}
