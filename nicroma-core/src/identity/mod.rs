//! Identity: who is signed in, and how the shell finds out
//!
//! The identity provider is the only writer of identity state; the guard,
//! the navigation and every screen read snapshots of it. Resolution against
//! the API happens once per page load (and again after sign-in/sign-out);
//! a rejected or unreachable credential degrades to anonymous instead of
//! surfacing an error.

mod backend;
mod provider;
mod role;
mod state;
mod user;

pub use backend::{HttpIdentityBackend, IdentityBackend, IdentityError, MemoryIdentityBackend};
pub use provider::{IdentityProvider, StoredCredential};
pub use role::Role;
pub use state::IdentityState;
pub use user::CurrentUser;
