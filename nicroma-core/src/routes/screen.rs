//! Screen identifiers
//!
//! The shell does not render anything itself; a screen is an opaque
//! reference the host application maps to an actual view.

/// Every screen the route table can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Dashboard,

    // Operations
    Carpetas,
    CarpetaDetail,
    Presupuestos,
    PresupuestoNuevo,
    PresupuestoDetail,
    Predespachos,
    PredespachoNuevo,
    PredespachoDetail,

    // Management
    Clientes,
    ClienteDetail,
    Facturas,
    FacturaDetail,
    Usuarios,
    UsuarioDetail,

    // Platform administration
    Tenants,
    TenantDetail,

    // Client self-service portal
    PortalInicio,
    PortalPresupuestos,
    PortalPresupuestoDetail,
    PortalPredespachos,
    PortalPredespachoDetail,

    // Settings (dispatched on role at /settings)
    SystemSettings,
    PersonalSettings,

    // Public
    Login,
    Register,
    RecuperarPassword,
    Terminos,
    Privacidad,
}

impl Screen {
    /// Stable name used in logs and by the demo output
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Carpetas => "Carpetas",
            Screen::CarpetaDetail => "CarpetaDetail",
            Screen::Presupuestos => "Presupuestos",
            Screen::PresupuestoNuevo => "PresupuestoNuevo",
            Screen::PresupuestoDetail => "PresupuestoDetail",
            Screen::Predespachos => "Predespachos",
            Screen::PredespachoNuevo => "PredespachoNuevo",
            Screen::PredespachoDetail => "PredespachoDetail",
            Screen::Clientes => "Clientes",
            Screen::ClienteDetail => "ClienteDetail",
            Screen::Facturas => "Facturas",
            Screen::FacturaDetail => "FacturaDetail",
            Screen::Usuarios => "Usuarios",
            Screen::UsuarioDetail => "UsuarioDetail",
            Screen::Tenants => "Tenants",
            Screen::TenantDetail => "TenantDetail",
            Screen::PortalInicio => "PortalInicio",
            Screen::PortalPresupuestos => "PortalPresupuestos",
            Screen::PortalPresupuestoDetail => "PortalPresupuestoDetail",
            Screen::PortalPredespachos => "PortalPredespachos",
            Screen::PortalPredespachoDetail => "PortalPredespachoDetail",
            Screen::SystemSettings => "SystemSettings",
            Screen::PersonalSettings => "PersonalSettings",
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::RecuperarPassword => "RecuperarPassword",
            Screen::Terminos => "Terminos",
            Screen::Privacidad => "Privacidad",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
