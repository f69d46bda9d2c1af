//! Identity state shared by every shell component

use super::{CurrentUser, Role};

/// Current identity as seen by the guard, the navigation and the screens.
///
/// `Resolving` covers the token-validation round trip after a page load;
/// the guard must not redirect while resolution is still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    /// Identity resolution is in flight
    Resolving,
    /// No valid credential
    Anonymous,
    /// Resolved profile
    Authenticated(CurrentUser),
}

impl IdentityState {
    pub fn is_loading(&self) -> bool {
        matches!(self, IdentityState::Resolving)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, IdentityState::Authenticated(_))
    }

    /// The resolved profile, if any
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            IdentityState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The resolved role, if any
    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }
}
