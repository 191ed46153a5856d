//! PreferenceStore port - Persisted one-shot flags.
//!
//! Each flag defaults to `false` and, once set, suppresses its prompt on
//! every later visit.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named boolean flags persisted across screen visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKey {
    HasSeenAppRating,
    HasSeenGamesNewsletter,
}

impl PreferenceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::HasSeenAppRating => "has_seen_app_rating",
            PreferenceKey::HasSeenGamesNewsletter => "has_seen_games_newsletter",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur reading or writing preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to (de)serialize preferences: {0}")]
    Serialization(String),
}

/// Port for the persisted flag store.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a flag; unset flags read as `false`.
    async fn get(&self, key: PreferenceKey) -> Result<bool, PreferenceError>;

    /// Write a flag.
    async fn set(&self, key: PreferenceKey, value: bool) -> Result<(), PreferenceError>;
}
