//! Route rules: pattern, access requirement, render target

use crate::access::RouteAccess;
use crate::identity::Role;

use super::{PathPattern, Screen};

/// What a matched rule renders.
///
/// Almost every rule points at a single static screen. `RoleDispatch` exists
/// for the one path whose screen depends on who is asking (`/settings`), and
/// `RedirectTo` for path aliases like `/`. Keeping these as explicit variants
/// keeps the ordinary case a plain lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTarget {
    /// Ordinary rule: one fixed screen
    Screen(Screen),

    /// The screen is chosen by the caller's role
    RoleDispatch {
        /// Screen for the platform operator
        root: Screen,
        /// Screen for every other authenticated role
        other: Screen,
    },

    /// The path is an alias; navigation continues at the given path
    RedirectTo(&'static str),
}

impl ScreenTarget {
    /// Resolve the concrete screen for `role`, if this target renders one.
    pub fn screen_for(&self, role: Option<Role>) -> Option<Screen> {
        match self {
            ScreenTarget::Screen(screen) => Some(*screen),
            ScreenTarget::RoleDispatch { root, other } => {
                if role == Some(Role::Root) {
                    Some(*root)
                } else {
                    Some(*other)
                }
            }
            ScreenTarget::RedirectTo(_) => None,
        }
    }
}

/// One entry of the route table
#[derive(Debug, Clone)]
pub struct RouteRule {
    pattern: PathPattern,
    access: RouteAccess,
    target: ScreenTarget,
}

impl RouteRule {
    pub fn new(pattern: &str, access: RouteAccess, screen: Screen) -> Self {
        Self { pattern: PathPattern::new(pattern), access, target: ScreenTarget::Screen(screen) }
    }

    /// Rule whose screen is dispatched on role
    pub fn role_dispatch(pattern: &str, access: RouteAccess, root: Screen, other: Screen) -> Self {
        Self {
            pattern: PathPattern::new(pattern),
            access,
            target: ScreenTarget::RoleDispatch { root, other },
        }
    }

    /// Alias rule redirecting to another path
    pub fn redirect(pattern: &str, access: RouteAccess, to: &'static str) -> Self {
        Self { pattern: PathPattern::new(pattern), access, target: ScreenTarget::RedirectTo(to) }
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn access(&self) -> RouteAccess {
        self.access
    }

    pub fn target(&self) -> ScreenTarget {
        self.target
    }
}
