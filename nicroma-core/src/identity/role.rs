//! Role taxonomy for the portal

use serde::{Deserialize, Serialize};

/// Portal role
///
/// Roles are global per user: a user carries exactly one role, and route
/// access is decided by membership of that role in a rule's role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform operator. Cross-tenant, carries no tenant of its own.
    Root,
    /// Tenant administrator
    Admin,
    /// Tenant operations manager
    Manager,
    /// Tenant staff user
    User,
    /// Self-service client of a tenant
    Client,
}

impl Role {
    /// Every defined role, in privilege order
    pub const ALL: [Role; 5] = [Role::Root, Role::Admin, Role::Manager, Role::User, Role::Client];

    /// Wire representation, matching the identity endpoint payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Root => "root",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
            Role::Client => "client",
        }
    }

    /// Parse a wire role, falling back to the least-privileged staff role.
    ///
    /// An unrecognized or empty role string must never escalate privileges
    /// or abort identity resolution, so the fallback is `User`.
    pub fn parse_lenient(value: &str) -> Role {
        match value.trim().to_ascii_lowercase().as_str() {
            "root" => Role::Root,
            "admin" => Role::Admin,
            "manager" => Role::Manager,
            "user" => Role::User,
            "client" => Role::Client,
            other => {
                if !other.is_empty() {
                    log::warn!("Unknown role '{}', downgrading to 'user'", other);
                }
                Role::User
            }
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::parse_lenient(role.as_str()), role);
        }
    }

    #[test]
    fn test_lenient_parse_downgrades() {
        assert_eq!(Role::parse_lenient("superuser"), Role::User);
        assert_eq!(Role::parse_lenient(""), Role::User);
        assert_eq!(Role::parse_lenient("  Admin "), Role::Admin);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"manager\"");
        let back: Role = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(back, Role::Client);
    }
}
