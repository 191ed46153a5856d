//! Storage locations: preference file and demo catalog fixture

use serde::Deserialize;
use std::path::PathBuf;

/// Where prompt flags persist
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PreferencesConfig {
    /// JSON file for flags; flags live in memory when unset
    pub path: Option<PathBuf>,
}

/// Where the demo catalog is seeded from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog fixture
    pub fixture_path: Option<PathBuf>,
}
