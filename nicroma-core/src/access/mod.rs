//! Access rules shared by the route table and the navigation
//!
//! Both "which routes may this role activate" and "which links does this
//! role see" are derived from the one permission table in [`permissions`].
//! Keeping a single source prevents the two from drifting apart (a visible
//! link that redirects away, or a reachable screen with no entry point).

pub mod permissions;

use crate::identity::Role;

/// A set of roles, disjunctive: membership in any listed role is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSet {
    roles: &'static [Role],
}

impl RoleSet {
    pub const fn of(roles: &'static [Role]) -> Self {
        Self { roles }
    }

    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Access requirement of a route (or of the application area behind it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No check at all (static legal pages)
    Public,
    /// Only meaningful while signed out; an authenticated user is bounced to
    /// the dashboard instead (login and registration forms)
    PublicOnly,
    /// Any authenticated role
    Authenticated,
    /// Restricted to the listed roles
    Roles(RoleSet),
}

impl RouteAccess {
    /// Whether a signed-in `role` may reach the area.
    pub fn admits(&self, role: Role) -> bool {
        match self {
            RouteAccess::Public | RouteAccess::PublicOnly | RouteAccess::Authenticated => true,
            RouteAccess::Roles(set) => set.contains(role),
        }
    }

    /// Whether the area is reachable without a credential.
    pub fn is_public(&self) -> bool {
        matches!(self, RouteAccess::Public | RouteAccess::PublicOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role::*;

    #[test]
    fn test_role_set_is_disjunctive() {
        let set = RoleSet::of(&[Admin, Manager]);
        assert!(set.contains(Admin));
        assert!(set.contains(Manager));
        assert!(!set.contains(User));
        assert!(!set.contains(Client));
    }

    #[test]
    fn test_authenticated_admits_every_role() {
        for role in Role::ALL {
            assert!(RouteAccess::Authenticated.admits(role));
        }
    }

    #[test]
    fn test_restricted_access_follows_role_set() {
        let access = RouteAccess::Roles(RoleSet::of(&[Root]));
        assert!(access.admits(Root));
        assert!(!access.admits(Admin));
    }
}
