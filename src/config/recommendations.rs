//! Recommendation shelf configuration

use serde::Deserialize;

use super::error::ValidationError;

const MAX_RETRIES_ALLOWED: u32 = 10;

/// Page sizes, shelf size and retry policy for related projects
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RecommendationConfig {
    /// Page size of the personalized query; the page is shuffled before truncation
    #[serde(default = "default_recommended_page_size")]
    pub recommended_page_size: u32,

    /// Page size of the similar-projects query
    #[serde(default = "default_fallback_page_size")]
    pub similar_page_size: u32,

    /// Page size of the staff-picks query
    #[serde(default = "default_fallback_page_size")]
    pub staff_pick_page_size: u32,

    /// Maximum projects on the shelf
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Retries per query after the first failed attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl RecommendationConfig {
    /// Validate recommendation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recommended_page_size == 0 {
            return Err(ValidationError::InvalidPageSize("recommended"));
        }
        if self.similar_page_size == 0 {
            return Err(ValidationError::InvalidPageSize("similar"));
        }
        if self.staff_pick_page_size == 0 {
            return Err(ValidationError::InvalidPageSize("staff picks"));
        }
        if self.max_results == 0 {
            return Err(ValidationError::InvalidResultLimit);
        }
        if self.max_results > self.recommended_page_size {
            return Err(ValidationError::LimitExceedsRecommendedPage {
                limit: self.max_results,
                page_size: self.recommended_page_size,
            });
        }
        if self.max_retries > MAX_RETRIES_ALLOWED {
            return Err(ValidationError::TooManyRetries);
        }
        Ok(())
    }

    /// Total attempts per query, first try included.
    pub fn attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            recommended_page_size: default_recommended_page_size(),
            similar_page_size: default_fallback_page_size(),
            staff_pick_page_size: default_fallback_page_size(),
            max_results: default_max_results(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_recommended_page_size() -> u32 {
    6
}

fn default_fallback_page_size() -> u32 {
    3
}

fn default_max_results() -> u32 {
    3
}

fn default_max_retries() -> u32 {
    2
}
