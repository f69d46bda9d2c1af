//! Role to navigation mapping
//!
//! A pure function from role to an ordered entry tree. Visibility is gated
//! on the same permission constants the route table uses, so a role only
//! ever sees links it could actually follow.

use crate::access::permissions;
use crate::identity::Role;

use super::NavigationEntry;

/// Build the sidebar for `role`.
///
/// Deterministic and never empty: every role at least gets its landing page
/// and the settings link.
pub fn navigation_for(role: Role) -> Vec<NavigationEntry> {
    if role == Role::Client {
        return portal_navigation();
    }

    let mut entries = vec![NavigationEntry::leaf("Inicio", "/dashboard", "home")];

    if permissions::CARPETAS.admits(role) {
        entries.push(NavigationEntry::leaf("Carpetas", "/carpetas", "folder"));
    }
    if permissions::PRESUPUESTOS.admits(role) {
        entries.push(NavigationEntry::leaf("Presupuestos", "/presupuestos", "calculator"));
    }
    if permissions::PREDESPACHOS.admits(role) {
        entries.push(NavigationEntry::leaf("Predespachos", "/predespachos", "clipboard-check"));
    }

    let mut gestion = Vec::new();
    if permissions::CLIENTES.admits(role) {
        gestion.push(NavigationEntry::leaf("Clientes", "/clientes", "users"));
    }
    if permissions::FACTURAS.admits(role) {
        gestion.push(NavigationEntry::leaf("Facturas", "/facturas", "receipt"));
    }
    if permissions::USUARIOS.admits(role) {
        gestion.push(NavigationEntry::leaf("Usuarios", "/usuarios", "user-cog"));
    }
    if !gestion.is_empty() {
        entries.push(NavigationEntry::group("Gestion", "briefcase", gestion));
    }

    if permissions::TENANTS.admits(role) {
        entries.push(NavigationEntry::leaf("Organizaciones", "/admin/tenants", "building"));
    }

    entries.push(NavigationEntry::leaf("Configuracion", "/settings", "cog"));
    entries
}

/// Sidebar for the wire role string.
///
/// An unrecognized or missing role falls back to the least-privileged staff
/// mapping instead of failing - a safety default, not an error path.
pub fn navigation_for_str(role: Option<&str>) -> Vec<NavigationEntry> {
    match role {
        Some(value) => navigation_for(Role::parse_lenient(value)),
        None => navigation_for(Role::User),
    }
}

fn portal_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::leaf("Inicio", "/portal", "home"),
        NavigationEntry::leaf("Mis Presupuestos", "/portal/presupuestos", "calculator"),
        NavigationEntry::leaf("Mis Predespachos", "/portal/predespachos", "clipboard-check"),
        NavigationEntry::leaf("Configuracion", "/settings", "cog"),
    ]
}
