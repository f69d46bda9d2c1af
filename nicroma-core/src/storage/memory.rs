//! In-memory preference storage
//!
//! Suitable for tests and for demo runs that should not leave files behind.
//! Values are lost when the process exits.

use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

use super::PreferenceStore;

/// Thread-safe in-memory preference store
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryPreferenceStore::new();

        store.set(keys::SIDEBAR_COLLAPSED, Value::Bool(true)).await.unwrap();
        assert_eq!(store.get(keys::SIDEBAR_COLLAPSED).await.unwrap(), Some(Value::Bool(true)));

        store.remove(keys::SIDEBAR_COLLAPSED).await.unwrap();
        assert_eq!(store.get(keys::SIDEBAR_COLLAPSED).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let store = MemoryPreferenceStore::new();

        store.set(keys::ACCESS_TOKEN, Value::String("tok".into())).await.unwrap();
        store.set(keys::THEME, Value::String("dark".into())).await.unwrap();

        store.remove(keys::ACCESS_TOKEN).await.unwrap();
        assert_eq!(store.get(keys::THEME).await.unwrap(), Some(Value::String("dark".into())));
    }
}
