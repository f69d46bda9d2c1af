//! Identity-resolution backends
//!
//! The REST API is the authority on who a token belongs to. The shell only
//! consumes one endpoint: profile resolution. Its "unauthenticated" signal
//! (HTTP 401) is a normal outcome, not an error.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::config::ApiConfig;

use super::{CurrentUser, Role};

/// Errors from the identity backend.
///
/// Note that "the token is invalid" is *not* an error: backends report it as
/// `Ok(None)` so the caller can translate it into an anonymous state.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// Request never produced a usable answer (network, timeout, bad URL)
    #[error("identity request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a profile that violates the data model
    #[error("identity endpoint returned a malformed profile: {0}")]
    MalformedProfile(String),
}

/// Resolves an access token into a user profile.
#[async_trait]
pub trait IdentityBackend: Send + Sync {
    /// Resolve the profile behind `token`.
    ///
    /// Returns `Ok(None)` when the token is rejected (the HTTP 401-equivalent
    /// signal), `Ok(Some(user))` for a valid credential.
    async fn resolve(&self, token: &str) -> Result<Option<CurrentUser>, IdentityError>;
}

/// HTTP implementation against the REST API.
pub struct HttpIdentityBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpIdentityBackend {
    /// Profile endpoint path, relative to the API origin
    pub const PROFILE_PATH: &'static str = "/api/auth/me";

    pub fn new(config: &ApiConfig) -> Result<Self, IdentityError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint: config.resolve_path(Self::PROFILE_PATH) })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IdentityBackend for HttpIdentityBackend {
    async fn resolve(&self, token: &str) -> Result<Option<CurrentUser>, IdentityError> {
        let response = self
            .client
            .get(&self.endpoint)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        let user: CurrentUser = response
            .json()
            .await
            .map_err(|e| IdentityError::MalformedProfile(e.to_string()))?;
        user.validate()?;

        Ok(Some(user))
    }
}

/// In-memory backend for tests and demos.
///
/// Tokens are plain strings mapped to canned profiles; anything unknown
/// resolves as unauthenticated, exactly like a 401 from the real API.
#[derive(Default)]
pub struct MemoryIdentityBackend {
    users: RwLock<HashMap<String, CurrentUser>>,
}

impl MemoryIdentityBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token/profile pair
    pub fn with_user(self, token: impl Into<String>, user: CurrentUser) -> Self {
        self.users
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(token.into(), user);
        self
    }

    /// Convenience profile for tests: a tenant-scoped user with the given role
    pub fn sample_user(role: Role) -> CurrentUser {
        let tenant = (role != Role::Root).then(|| "t-1".to_string());
        CurrentUser {
            id: format!("u-{}", role),
            role,
            tenant_id: tenant.clone(),
            tenant_name: tenant.as_ref().map(|_| "Logistica Austral".to_string()),
            tenant_slug: tenant.as_ref().map(|_| "logistica-austral".to_string()),
            email: format!("{}@example.com", role),
        }
    }
}

#[async_trait]
impl IdentityBackend for MemoryIdentityBackend {
    async fn resolve(&self, token: &str) -> Result<Option<CurrentUser>, IdentityError> {
        let users = self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(users.get(token).cloned())
    }
}
