//! Authenticated user profile as returned by the identity endpoint

use serde::{Deserialize, Serialize};

use super::{IdentityError, Role};

/// Profile of the signed-in user.
///
/// Every field comes straight from the identity-resolution endpoint; nothing
/// here is derived or mutated locally. Tenant fields are `None` exactly for
/// the `root` role (the platform operator belongs to no tenant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Opaque user identifier
    pub id: String,

    /// Global role
    pub role: Role,

    /// Owning tenant, `None` for `root`
    #[serde(default)]
    pub tenant_id: Option<String>,

    /// Display name of the owning tenant
    #[serde(default)]
    pub tenant_name: Option<String>,

    /// URL slug of the owning tenant
    #[serde(default)]
    pub tenant_slug: Option<String>,

    /// Contact email
    pub email: String,
}

impl CurrentUser {
    /// Check the role/tenant invariant: `root` has no tenant, every other
    /// role has exactly one.
    ///
    /// Applied at the deserialization boundary so a malformed profile is
    /// rejected before it reaches the rest of the shell.
    pub fn validate(&self) -> Result<(), IdentityError> {
        match (self.role, self.tenant_id.as_deref()) {
            (Role::Root, Some(tenant)) => Err(IdentityError::MalformedProfile(format!(
                "root user '{}' must not carry tenant '{}'",
                self.id, tenant
            ))),
            (Role::Root, None) => Ok(()),
            (role, None) => Err(IdentityError::MalformedProfile(format!(
                "{} user '{}' is missing a tenant",
                role, self.id
            ))),
            (_, Some(_)) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_user(role: Role, tenant_id: Option<&str>) -> CurrentUser {
        CurrentUser {
            id: "u-1".to_string(),
            role,
            tenant_id: tenant_id.map(str::to_string),
            tenant_name: tenant_id.map(|_| "Aduanas del Sur".to_string()),
            tenant_slug: tenant_id.map(|_| "aduanas-del-sur".to_string()),
            email: "ops@example.com".to_string(),
        }
    }

    #[test]
    fn test_root_without_tenant_is_valid() {
        assert!(staff_user(Role::Root, None).validate().is_ok());
    }

    #[test]
    fn test_root_with_tenant_is_rejected() {
        assert!(staff_user(Role::Root, Some("t-9")).validate().is_err());
    }

    #[test]
    fn test_tenant_roles_require_tenant() {
        assert!(staff_user(Role::Manager, Some("t-9")).validate().is_ok());
        assert!(staff_user(Role::Manager, None).validate().is_err());
    }

    #[test]
    fn test_profile_deserializes_without_tenant_fields() {
        let json = r#"{"id":"u-7","role":"root","email":"root@nicroma.com"}"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert!(user.validate().is_ok());
        assert_eq!(user.tenant_id, None);
    }
}
