//! In-Memory Preference Store Adapter
//!
//! Keeps flags for the lifetime of the process. Useful for testing and
//! for sessions that should not persist prompt history.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{PreferenceError, PreferenceKey, PreferenceStore};

/// In-memory flag storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    flags: Arc<RwLock<HashMap<PreferenceKey, bool>>>,
    writes: Arc<RwLock<Vec<(PreferenceKey, bool)>>>,
}

impl InMemoryPreferenceStore {
    /// Create an empty store; every flag reads `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose flags start at the given values.
    ///
    /// Seeded values are not recorded as writes.
    pub fn with_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (PreferenceKey, bool)>,
    {
        Self {
            flags: Arc::new(RwLock::new(flags.into_iter().collect())),
            writes: Arc::default(),
        }
    }

    /// Every `set` call received, in order (for test assertions).
    pub async fn writes(&self) -> Vec<(PreferenceKey, bool)> {
        self.writes.read().await.clone()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: PreferenceKey) -> Result<bool, PreferenceError> {
        Ok(self.flags.read().await.get(&key).copied().unwrap_or(false))
    }

    async fn set(&self, key: PreferenceKey, value: bool) -> Result<(), PreferenceError> {
        self.flags.write().await.insert(key, value);
        self.writes.write().await.push((key, value));
        Ok(())
    }
}
