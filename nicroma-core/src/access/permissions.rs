//! The permission table: one named role set per application area
//!
//! Route rules take their required roles from here, and the navigation
//! mapping gates link visibility on the same constants. Adding an area means
//! adding one constant and wiring it in both places; the consistency audit
//! in `nav::audit` catches a link whose route would reject the same role.

use crate::identity::Role::{Admin, Client, Manager, Root, User};

use super::{RoleSet, RouteAccess};

/// Landing dashboard, reachable by every signed-in role
pub const DASHBOARD: RouteAccess = RouteAccess::Authenticated;

/// Shipment folders (operations staff)
pub const CARPETAS: RouteAccess = RouteAccess::Roles(RoleSet::of(&[Admin, Manager, User]));

/// Quotes (operations staff)
pub const PRESUPUESTOS: RouteAccess = RouteAccess::Roles(RoleSet::of(&[Admin, Manager, User]));

/// Customs pre-clearance requests (operations staff)
pub const PREDESPACHOS: RouteAccess = RouteAccess::Roles(RoleSet::of(&[Admin, Manager, User]));

/// Client directory (management)
pub const CLIENTES: RouteAccess = RouteAccess::Roles(RoleSet::of(&[Admin, Manager]));

/// Invoicing (management)
pub const FACTURAS: RouteAccess = RouteAccess::Roles(RoleSet::of(&[Admin, Manager]));

/// Tenant-local user administration
pub const USUARIOS: RouteAccess = RouteAccess::Roles(RoleSet::of(&[Admin]));

/// Cross-tenant administration (platform operator only)
pub const TENANTS: RouteAccess = RouteAccess::Roles(RoleSet::of(&[Root]));

/// Client self-service portal
pub const PORTAL: RouteAccess = RouteAccess::Roles(RoleSet::of(&[Client]));

/// Settings; the screen behind it is dispatched on role, the access is not
pub const SETTINGS: RouteAccess = RouteAccess::Authenticated;
