//! Account user as seen by the thank-you screen.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

const GERMANY: &str = "DE";

/// Where a user is located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    country: String,
    #[serde(default)]
    display_name: String,
}

impl Location {
    /// Creates a location from an ISO 3166-1 alpha-2 country code.
    pub fn new(
        country: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let country = country.into().trim().to_ascii_uppercase();
        if country.is_empty() {
            return Err(ValidationError::empty_field("country"));
        }
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "country",
                "expected a two-letter country code",
            ));
        }
        Ok(Self {
            country,
            display_name: display_name.into(),
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_germany(&self) -> bool {
        self.country.eq_ignore_ascii_case(GERMANY)
    }
}

/// The signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unset when the account never answered the games newsletter question.
    #[serde(default)]
    pub games_newsletter: Option<bool>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            games_newsletter: None,
            location: None,
        }
    }

    pub fn with_games_newsletter(mut self, subscribed: bool) -> Self {
        self.games_newsletter = Some(subscribed);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_signed_up_to_games_newsletter(&self) -> bool {
        self.games_newsletter == Some(true)
    }

    /// Germany requires a double opt-in confirmation for newsletters.
    pub fn is_location_germany(&self) -> bool {
        self.location.as_ref().is_some_and(Location::is_germany)
    }
}
