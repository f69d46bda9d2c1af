//! API origin configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API origin, e.g. "https://api.nicroma.com"
    /// Env: NICROMA_API_BASE_URL
    /// Default: unset (same-origin relative requests)
    pub base_url: Option<String>,

    /// Request timeout in seconds
    /// Env: NICROMA_API_TIMEOUT_SECS
    /// Default: 10
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: None, timeout_secs: 10 }
    }
}

impl ApiConfig {
    /// Resolve an endpoint path against the configured origin.
    ///
    /// With no origin configured the path stays relative, which a same-origin
    /// deployment resolves at the edge.
    pub fn resolve_path(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => path.to_string(),
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.base_url = other.base_url;
        self.timeout_secs = other.timeout_secs;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(base_url) = env::var("NICROMA_API_BASE_URL") {
            self.base_url = if base_url.is_empty() { None } else { Some(base_url) };
        }

        if let Ok(timeout) = env::var("NICROMA_API_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                bail!("Invalid api.base_url: must start with http:// or https://");
            }
        }

        if self.timeout_secs == 0 {
            bail!("Invalid api.timeout_secs: must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_without_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.resolve_path("/api/auth/me"), "/api/auth/me");
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config =
            ApiConfig { base_url: Some("https://api.nicroma.com/".to_string()), ..Default::default() };
        assert_eq!(config.resolve_path("/api/auth/me"), "https://api.nicroma.com/api/auth/me");
    }

    #[test]
    fn test_validation_rejects_bad_scheme() {
        let config = ApiConfig { base_url: Some("ftp://api".to_string()), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
