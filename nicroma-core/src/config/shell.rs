//! Shell presentation configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Presentation-shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Where the preference file lives
    /// Env: NICROMA_PREFS_PATH
    /// Default: "./data/preferences.json"
    pub preferences_path: String,

    /// Flyout close delay in milliseconds after pointer-leave
    /// Env: NICROMA_FLYOUT_CLOSE_DELAY_MS
    /// Default: 300
    pub flyout_close_delay_ms: u64,

    /// Badge display cap; counts above it render as "<cap>+"
    /// Env: NICROMA_BADGE_CAP
    /// Default: 99
    pub badge_cap: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            preferences_path: "./data/preferences.json".to_string(),
            flyout_close_delay_ms: 300,
            badge_cap: 99,
        }
    }
}

impl ShellConfig {
    /// Flyout close delay as a [`Duration`]
    pub fn flyout_close_delay(&self) -> Duration {
        Duration::from_millis(self.flyout_close_delay_ms)
    }

    pub fn merge(&mut self, other: Self) {
        self.preferences_path = other.preferences_path;
        self.flyout_close_delay_ms = other.flyout_close_delay_ms;
        self.badge_cap = other.badge_cap;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(path) = env::var("NICROMA_PREFS_PATH") {
            self.preferences_path = path;
        }

        if let Ok(delay) = env::var("NICROMA_FLYOUT_CLOSE_DELAY_MS") {
            if let Ok(d) = delay.parse() {
                self.flyout_close_delay_ms = d;
            }
        }

        if let Ok(cap) = env::var("NICROMA_BADGE_CAP") {
            if let Ok(c) = cap.parse() {
                self.badge_cap = c;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.preferences_path.is_empty() {
            bail!("Invalid shell.preferences_path: must not be empty");
        }

        if self.flyout_close_delay_ms == 0 {
            bail!("Invalid shell.flyout_close_delay_ms: must be greater than 0");
        }

        if self.badge_cap == 0 {
            bail!("Invalid shell.badge_cap: must be greater than 0");
        }

        Ok(())
    }
}
