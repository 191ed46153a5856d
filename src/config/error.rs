//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Page size for {0} must be at least 1")]
    InvalidPageSize(&'static str),

    #[error("Recommendation limit must be at least 1")]
    InvalidResultLimit,

    #[error("Recommendation limit ({limit}) exceeds the recommended page size ({page_size})")]
    LimitExceedsRecommendedPage { limit: u32, page_size: u32 },

    #[error("Retry count exceeds maximum allowed (10)")]
    TooManyRetries,

    #[error("Newsletter category slug cannot be empty")]
    EmptyNewsletterSlug,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
