//! Follow-up dialog configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the dialog scheduler
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DialogConfig {
    /// Root category slug whose backers are offered the newsletter
    #[serde(default = "default_newsletter_category_slug")]
    pub newsletter_category_slug: String,
}

impl DialogConfig {
    /// Validate dialog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.newsletter_category_slug.trim().is_empty() {
            return Err(ValidationError::EmptyNewsletterSlug);
        }
        Ok(())
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            newsletter_category_slug: default_newsletter_category_slug(),
        }
    }
}

fn default_newsletter_category_slug() -> String {
    "games".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_games() {
        assert_eq!(DialogConfig::default().newsletter_category_slug, "games");
    }

    #[test]
    fn test_rejects_blank_slug() {
        let config = DialogConfig {
            newsletter_category_slug: " ".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyNewsletterSlug));
    }
}
