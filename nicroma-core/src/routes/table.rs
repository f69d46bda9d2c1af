//! The route table
//!
//! One declarative list of every path the portal knows. Rules are tried in
//! table order and the first full match wins, so literal sub-paths (e.g.
//! `/presupuestos/nuevo`) are listed before their parameterized siblings
//! (`/presupuestos/:id`). Required roles come from the shared permission
//! table, never from inline role lists.

use crate::access::{permissions, RouteAccess};

use super::{PathParams, RouteRule, Screen};

/// Default landing path for authenticated users
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Where unauthenticated navigation ends up
pub const LOGIN_PATH: &str = "/login";

/// A matched rule together with its bound parameters
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub rule: &'a RouteRule,
    pub params: PathParams,
}

/// Ordered, immutable list of route rules
#[derive(Debug, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule (builder style)
    pub fn rule(mut self, rule: RouteRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The full portal table.
    pub fn nicroma() -> Self {
        use permissions::*;
        use Screen::*;

        Self::new()
            // Root alias
            .rule(RouteRule::redirect("/", RouteAccess::Authenticated, DASHBOARD_PATH))
            // Public forms (inverse-guarded: signed-in users are bounced away)
            .rule(RouteRule::new(LOGIN_PATH, RouteAccess::PublicOnly, Login))
            .rule(RouteRule::new("/registro", RouteAccess::PublicOnly, Register))
            .rule(RouteRule::new("/recuperar", RouteAccess::PublicOnly, RecuperarPassword))
            // Static legal pages
            .rule(RouteRule::new("/terminos", RouteAccess::Public, Terminos))
            .rule(RouteRule::new("/privacidad", RouteAccess::Public, Privacidad))
            // Landing
            .rule(RouteRule::new(DASHBOARD_PATH, DASHBOARD, Dashboard))
            // Operations
            .rule(RouteRule::new("/carpetas", CARPETAS, Carpetas))
            .rule(RouteRule::new("/carpetas/:id", CARPETAS, CarpetaDetail))
            .rule(RouteRule::new("/presupuestos", PRESUPUESTOS, Presupuestos))
            .rule(RouteRule::new("/presupuestos/nuevo", PRESUPUESTOS, PresupuestoNuevo))
            .rule(RouteRule::new("/presupuestos/:id", PRESUPUESTOS, PresupuestoDetail))
            .rule(RouteRule::new("/predespachos", PREDESPACHOS, Predespachos))
            .rule(RouteRule::new("/predespachos/nuevo", PREDESPACHOS, PredespachoNuevo))
            .rule(RouteRule::new("/predespachos/:id", PREDESPACHOS, PredespachoDetail))
            // Management
            .rule(RouteRule::new("/clientes", CLIENTES, Clientes))
            .rule(RouteRule::new("/clientes/:id", CLIENTES, ClienteDetail))
            .rule(RouteRule::new("/facturas", FACTURAS, Facturas))
            .rule(RouteRule::new("/facturas/:id", FACTURAS, FacturaDetail))
            .rule(RouteRule::new("/usuarios", USUARIOS, Usuarios))
            .rule(RouteRule::new("/usuarios/:id", USUARIOS, UsuarioDetail))
            // Platform administration
            .rule(RouteRule::new("/admin/tenants", TENANTS, Tenants))
            .rule(RouteRule::new("/admin/tenants/:id", TENANTS, TenantDetail))
            // Client portal
            .rule(RouteRule::new("/portal", PORTAL, PortalInicio))
            .rule(RouteRule::new("/portal/presupuestos", PORTAL, PortalPresupuestos))
            .rule(RouteRule::new("/portal/presupuestos/:id", PORTAL, PortalPresupuestoDetail))
            .rule(RouteRule::new("/portal/predespachos", PORTAL, PortalPredespachos))
            .rule(RouteRule::new("/portal/predespachos/:id", PORTAL, PortalPredespachoDetail))
            // Settings: one path, screen dispatched on role
            .rule(RouteRule::role_dispatch("/settings", SETTINGS, SystemSettings, PersonalSettings))
    }

    /// Find the first rule matching `path`.
    ///
    /// `None` means the path is unknown; what happens then (dashboard or
    /// login redirect) is the guard's call, not the table's.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        for rule in &self.rules {
            if let Some(params) = rule.pattern().capture(path) {
                return Some(RouteMatch { rule, params });
            }
        }
        None
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
