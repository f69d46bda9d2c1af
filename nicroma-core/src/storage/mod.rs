//! Durable client-side preference storage
//!
//! The shell persists a handful of small values between sessions: the access
//! token, the sidebar-collapsed flag and the theme selection. Each lives
//! under its own fixed key with an independent lifecycle - clearing one never
//! touches another.

mod file;
mod memory;

pub use file::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;

use anyhow::Result;
use serde_json::Value;

/// Fixed storage keys.
///
/// Keys are namespaced so the store can coexist with other writers in the
/// same storage area.
pub mod keys {
    /// Persisted access credential
    pub const ACCESS_TOKEN: &str = "nicroma.auth.token";

    /// Sidebar collapsed flag
    pub const SIDEBAR_COLLAPSED: &str = "nicroma.ui.sidebar_collapsed";

    /// Theme selection (written by the theming layer, reserved here so no
    /// other writer claims the key)
    pub const THEME: &str = "nicroma.ui.theme";
}

/// Key-value preference storage.
///
/// Implement this trait to back the shell with a different storage area
/// (browser local storage via WASM bindings, a config directory, etc.).
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value by key
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Write a value under a key
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Remove a single key; other keys are untouched
    async fn remove(&self, key: &str) -> Result<()>;
}

// Implement PreferenceStore for Arc<S> to allow using Arc directly
#[async_trait::async_trait]
impl<S: PreferenceStore> PreferenceStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }
}
