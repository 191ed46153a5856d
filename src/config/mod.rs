//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PLEDGE_THANKS` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use pledge_thanks::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//!
//! println!("Shelf size: {}", config.recommendations.max_results);
//! ```

mod dialogs;
mod error;
mod logging;
mod recommendations;
mod storage;

pub use dialogs::DialogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use recommendations::RecommendationConfig;
pub use storage::{CatalogConfig, PreferencesConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Related-projects query sizes and retry policy
    #[serde(default)]
    pub recommendations: RecommendationConfig,

    /// Dialog scheduler settings
    #[serde(default)]
    pub dialogs: DialogConfig,

    /// Preference persistence
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Demo catalog seed
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `PLEDGE_THANKS__RECOMMENDATIONS__MAX_RETRIES=2` -> `recommendations.max_retries = 2`
    /// - `PLEDGE_THANKS__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PLEDGE_THANKS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and reject invalid values in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` for unparsable values and
    /// `ConfigError::ValidationFailed` for out-of-range ones.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.recommendations.validate()?;
        self.dialogs.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PLEDGE_THANKS__RECOMMENDATIONS__MAX_RETRIES");
        env::remove_var("PLEDGE_THANKS__RECOMMENDATIONS__RECOMMENDED_PAGE_SIZE");
        env::remove_var("PLEDGE_THANKS__DIALOGS__NEWSLETTER_CATEGORY_SLUG");
        env::remove_var("PLEDGE_THANKS__LOGGING__FORMAT");
        env::remove_var("PLEDGE_THANKS__PREFERENCES__PATH");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.recommendations, RecommendationConfig::default());
        assert_eq!(config.dialogs.newsletter_category_slug, "games");
        assert!(config.preferences.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLEDGE_THANKS__RECOMMENDATIONS__MAX_RETRIES", "4");
        env::set_var("PLEDGE_THANKS__LOGGING__FORMAT", "json");
        env::set_var("PLEDGE_THANKS__PREFERENCES__PATH", "/tmp/flags.json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.recommendations.max_retries, 4);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.preferences.path.as_deref(),
            Some(std::path::Path::new("/tmp/flags.json"))
        );
    }

    #[test]
    fn test_validate_rejects_blank_slug() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLEDGE_THANKS__DIALOGS__NEWSLETTER_CATEGORY_SLUG", " ");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::EmptyNewsletterSlug));
    }

    #[test]
    fn test_load_validated_reports_validation_failure() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLEDGE_THANKS__RECOMMENDATIONS__RECOMMENDED_PAGE_SIZE", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidPageSize("recommended")))
        ));
    }

    #[test]
    fn test_load_validated_accepts_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        assert!(AppConfig::load_validated().is_ok());
    }

    #[test]
    fn test_non_numeric_page_size_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLEDGE_THANKS__RECOMMENDATIONS__RECOMMENDED_PAGE_SIZE", "many");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
