//! Sidebar rail state
//!
//! Two independent booleans govern the rail: a persisted global collapse
//! flag and per-group inline expansion. They only interact in one way:
//! inline expansion is meaningless while the rail is collapsed (collapsed
//! groups open through hover flyouts instead, see [`super::FlyoutMenu`]).

use anyhow::Result;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

use crate::storage::{keys, PreferenceStore};

/// Sidebar state, loaded from and written through the preference store
pub struct Sidebar {
    prefs: Arc<dyn PreferenceStore>,
    collapsed: bool,
    expanded: HashSet<String>,
}

impl Sidebar {
    /// Load the persisted collapse flag; anything unreadable means the
    /// default expanded rail.
    pub async fn load(prefs: Arc<dyn PreferenceStore>) -> Self {
        let collapsed = match prefs.get(keys::SIDEBAR_COLLAPSED).await {
            Ok(Some(Value::Bool(collapsed))) => collapsed,
            Ok(Some(other)) => {
                log::warn!("Ignoring malformed sidebar preference: {}", other);
                false
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("Sidebar preference read failed: {}", e);
                false
            }
        };

        Self { prefs, collapsed, expanded: HashSet::new() }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Set and persist the collapse flag. Inline expansion state survives a
    /// collapse/expand round trip.
    pub async fn set_collapsed(&mut self, collapsed: bool) -> Result<()> {
        self.collapsed = collapsed;
        self.prefs.set(keys::SIDEBAR_COLLAPSED, Value::Bool(collapsed)).await
    }

    pub async fn toggle_collapsed(&mut self) -> Result<bool> {
        let next = !self.collapsed;
        self.set_collapsed(next).await?;
        Ok(next)
    }

    /// Toggle a group's inline expansion. No-op while the rail is collapsed.
    pub fn toggle_group(&mut self, name: &str) {
        if self.collapsed {
            return;
        }
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_string());
        }
    }

    /// Whether a group renders its children inline. Always false while the
    /// rail is collapsed.
    pub fn is_group_expanded(&self, name: &str) -> bool {
        !self.collapsed && self.expanded.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferenceStore;

    #[tokio::test]
    async fn test_collapse_flag_persists() {
        let prefs = Arc::new(MemoryPreferenceStore::new());

        let mut sidebar = Sidebar::load(prefs.clone() as Arc<dyn PreferenceStore>).await;
        assert!(!sidebar.collapsed());
        sidebar.set_collapsed(true).await.unwrap();

        let reloaded = Sidebar::load(prefs as Arc<dyn PreferenceStore>).await;
        assert!(reloaded.collapsed());
    }

    #[tokio::test]
    async fn test_malformed_preference_defaults_to_expanded() {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        prefs.set(keys::SIDEBAR_COLLAPSED, Value::String("yes".into())).await.unwrap();

        let sidebar = Sidebar::load(prefs as Arc<dyn PreferenceStore>).await;
        assert!(!sidebar.collapsed());
    }

    #[tokio::test]
    async fn test_inline_expansion_only_while_expanded() {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        let mut sidebar = Sidebar::load(prefs as Arc<dyn PreferenceStore>).await;

        sidebar.toggle_group("Gestion");
        assert!(sidebar.is_group_expanded("Gestion"));

        sidebar.set_collapsed(true).await.unwrap();
        assert!(!sidebar.is_group_expanded("Gestion"));

        // Toggling while collapsed does nothing
        sidebar.toggle_group("Gestion");
        sidebar.set_collapsed(false).await.unwrap();
        assert!(sidebar.is_group_expanded("Gestion"));
    }
}
