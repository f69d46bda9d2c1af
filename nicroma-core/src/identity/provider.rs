//! Process-wide identity state with a single writer
//!
//! Every shell component reads identity through snapshots of this provider;
//! only the authentication flow itself (sign-in, sign-out, resolution)
//! writes. The UI event loop serializes transitions, so readers never see a
//! half-applied state.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use crate::storage::{keys, PreferenceStore};

use super::{CurrentUser, IdentityBackend, IdentityState};

/// Access credential as persisted in the preference store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredential {
    /// Opaque bearer token issued by the API
    pub token: String,

    /// When the token was stored locally
    pub issued_at: DateTime<Utc>,
}

impl StoredCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into(), issued_at: Utc::now() }
    }
}

/// Holder of the current identity.
///
/// Starts in `Resolving`; call [`IdentityProvider::resolve`] once at startup
/// to settle into `Anonymous` or `Authenticated`.
pub struct IdentityProvider {
    state: Arc<RwLock<IdentityState>>,
    backend: Arc<dyn IdentityBackend>,
    prefs: Arc<dyn PreferenceStore>,
}

impl IdentityProvider {
    pub fn new(backend: Arc<dyn IdentityBackend>, prefs: Arc<dyn PreferenceStore>) -> Self {
        Self { state: Arc::new(RwLock::new(IdentityState::Resolving)), backend, prefs }
    }

    /// Snapshot of the current state.
    ///
    /// Guard decisions are always taken against a snapshot, so a concurrent
    /// refresh can never flip a decision halfway through.
    pub fn snapshot(&self) -> IdentityState {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    fn transition(&self, next: IdentityState) {
        let mut state = self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *state = next;
    }

    /// Resolve the persisted credential into an identity.
    ///
    /// Any failure - missing token, rejected token, unreachable API,
    /// malformed profile - settles into `Anonymous`. Resolution never
    /// surfaces an error to the navigation layer; the guard's login redirect
    /// is the recovery path.
    pub async fn resolve(&self) -> IdentityState {
        self.transition(IdentityState::Resolving);

        let credential = match self.load_credential().await {
            Some(credential) => credential,
            None => {
                log::debug!("No stored credential, staying anonymous");
                self.transition(IdentityState::Anonymous);
                return self.snapshot();
            }
        };

        let next = match self.backend.resolve(&credential.token).await {
            Ok(Some(user)) => {
                log::info!("Identity resolved: {} ({})", user.email, user.role);
                IdentityState::Authenticated(user)
            }
            Ok(None) => {
                log::info!("Stored credential rejected, clearing it");
                if let Err(e) = self.prefs.remove(keys::ACCESS_TOKEN).await {
                    log::warn!("Failed to clear rejected credential: {}", e);
                }
                IdentityState::Anonymous
            }
            Err(e) => {
                log::warn!("Identity resolution failed: {}", e);
                IdentityState::Anonymous
            }
        };

        self.transition(next);
        self.snapshot()
    }

    /// Store the credential the API issued and switch to the resolved user.
    pub async fn sign_in(&self, token: &str, user: CurrentUser) -> Result<()> {
        let credential = StoredCredential::new(token);
        self.prefs
            .set(keys::ACCESS_TOKEN, serde_json::to_value(&credential)?)
            .await
            .context("Failed to persist credential")?;

        log::info!("Signed in: {} ({})", user.email, user.role);
        self.transition(IdentityState::Authenticated(user));
        Ok(())
    }

    /// Drop the credential and return to anonymous.
    ///
    /// Only the token key is cleared; UI preferences survive sign-out.
    pub async fn sign_out(&self) -> Result<()> {
        self.prefs.remove(keys::ACCESS_TOKEN).await.context("Failed to clear credential")?;
        log::info!("Signed out");
        self.transition(IdentityState::Anonymous);
        Ok(())
    }

    async fn load_credential(&self) -> Option<StoredCredential> {
        match self.prefs.get(keys::ACCESS_TOKEN).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(credential) => Some(credential),
                Err(e) => {
                    log::warn!("Discarding unreadable stored credential: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Preference store read failed: {}", e);
                None
            }
        }
    }
}
