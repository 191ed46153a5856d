//! File-based Preference Store Adapter
//!
//! Persists all flags as a single JSON object so prompt history survives
//! restarts. A missing file means nothing has been seen yet.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{PreferenceError, PreferenceKey, PreferenceStore};

/// JSON-file flag storage.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Create a store backed by the file at `path`.
    ///
    /// # Example
    /// ```ignore
    /// let store = FilePreferenceStore::new("./data/preferences.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<PreferenceKey, bool>, PreferenceError> {
        match fs::read_to_string(&self.path).await {
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| PreferenceError::Serialization(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(PreferenceError::Io(e.to_string())),
        }
    }

    async fn write_all(&self, flags: &BTreeMap<PreferenceKey, bool>) -> Result<(), PreferenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| PreferenceError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(flags)
            .map_err(|e| PreferenceError::Serialization(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| PreferenceError::Io(e.to_string()))
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: PreferenceKey) -> Result<bool, PreferenceError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.get(&key).copied().unwrap_or(false))
    }

    async fn set(&self, key: PreferenceKey, value: bool) -> Result<(), PreferenceError> {
        let _guard = self.lock.lock().await;
        let mut flags = self.read_all().await?;
        flags.insert(key, value);
        self.write_all(&flags).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FilePreferenceStore {
        FilePreferenceStore::new(dir.path().join("prefs").join("flags.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_false() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.get(PreferenceKey::HasSeenGamesNewsletter).await.unwrap());
    }

    #[tokio::test]
    async fn flags_survive_a_new_instance() {
        let dir = TempDir::new().unwrap();
        store_in(&dir)
            .set(PreferenceKey::HasSeenGamesNewsletter, true)
            .await
            .unwrap();

        let reopened = store_in(&dir);
        assert!(reopened.get(PreferenceKey::HasSeenGamesNewsletter).await.unwrap());
        assert!(!reopened.get(PreferenceKey::HasSeenAppRating).await.unwrap());
    }

    #[tokio::test]
    async fn writes_keep_other_flags() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set(PreferenceKey::HasSeenAppRating, true).await.unwrap();
        store.set(PreferenceKey::HasSeenGamesNewsletter, true).await.unwrap();

        assert!(store.get(PreferenceKey::HasSeenAppRating).await.unwrap());
        assert!(store.get(PreferenceKey::HasSeenGamesNewsletter).await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).await.unwrap();
        fs::write(store.path(), "not json").await.unwrap();

        let result = store.get(PreferenceKey::HasSeenAppRating).await;
        assert!(matches!(result, Err(PreferenceError::Serialization(_))));
    }
}
