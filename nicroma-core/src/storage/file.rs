//! File-backed preference storage
//!
//! A single JSON document on disk holds every key. Writes rewrite the whole
//! document through a temp-file rename so a crash mid-write never leaves a
//! torn file behind.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::PreferenceStore;

/// JSON-file preference store
pub struct FilePreferenceStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, Value>>,
}

impl FilePreferenceStore {
    /// Open (or create) the store at `path`.
    ///
    /// A missing file is an empty store; a malformed file is an error rather
    /// than silent data loss.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Malformed preferences file: {}", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self { path, entries: RwLock::new(entries) })
    }

    fn persist(&self, entries: &HashMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create preferences directory {}", parent.display())
                })?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&tmp, content)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        log::debug!("Persisted {} preference keys to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let store = FilePreferenceStore::open(&path).unwrap();
            store.set(keys::SIDEBAR_COLLAPSED, Value::Bool(true)).await.unwrap();
        }

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::SIDEBAR_COLLAPSED).await.unwrap(), Some(Value::Bool(true)));
    }

    #[tokio::test]
    async fn test_remove_only_touches_its_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let store = FilePreferenceStore::open(&path).unwrap();
        store.set(keys::ACCESS_TOKEN, Value::String("tok".into())).await.unwrap();
        store.set(keys::SIDEBAR_COLLAPSED, Value::Bool(false)).await.unwrap();
        store.remove(keys::ACCESS_TOKEN).await.unwrap();

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::ACCESS_TOKEN).await.unwrap(), None);
        assert_eq!(reopened.get(keys::SIDEBAR_COLLAPSED).await.unwrap(), Some(Value::Bool(false)));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(FilePreferenceStore::open(&path).is_err());
    }
}
