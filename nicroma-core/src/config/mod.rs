//! Configuration system
//!
//! Values are resolved in supersedence order (highest priority wins):
//!
//! 1. **Environment variables** (`NICROMA_*`)
//! 2. **Config file** (`nicroma.toml`)
//! 3. **Defaults**
//!
//! # Example
//!
//! ```no_run
//! use nicroma_core::config::NicromaConfig;
//!
//! let config = NicromaConfig::load()?;
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod logging;
pub mod shell;

pub use api::ApiConfig;
pub use logging::LoggingConfig;
pub use shell::ShellConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete portal-shell configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NicromaConfig {
    pub api: ApiConfig,
    pub shell: ShellConfig,
    pub logging: LoggingConfig,
}

impl NicromaConfig {
    /// Load configuration with the full supersedence chain
    pub fn load() -> Result<Self> {
        Self::load_from("nicroma.toml")
    }

    /// Load configuration, reading the given file if it exists
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.api.merge(other.api);
        self.shell.merge(other.shell);
        self.logging.merge(other.logging);
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        self.api.apply_env_vars();
        self.shell.apply_env_vars();
        self.logging.apply_env_vars();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.shell.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NicromaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.shell.flyout_close_delay_ms, 300);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults_elsewhere() {
        let toml = r#"
            [api]
            base_url = "https://api.nicroma.com"
            timeout_secs = 5
        "#;
        let file_config: NicromaConfig = toml::from_str(toml).unwrap();

        let mut config = NicromaConfig::default();
        config.merge(file_config);

        assert_eq!(config.api.base_url.as_deref(), Some("https://api.nicroma.com"));
        assert_eq!(config.shell.badge_cap, 99);
    }

    #[test]
    fn test_validation_flags_zero_delay() {
        let mut config = NicromaConfig::default();
        config.shell.flyout_close_delay_ms = 0;
        assert!(config.validate().is_err());
    }
}
