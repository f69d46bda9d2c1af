//! Access guard
//!
//! Decides, for one navigation attempt, whether to render the requested
//! screen, redirect, or show the loading placeholder. The decision is a pure
//! function of the identity snapshot and the matched rule: the guard does no
//! I/O, keeps no state and cannot fail. All access failures resolve to
//! silent redirects - the portal never shows a denial message, the user
//! simply lands on the dashboard (or the login form when signed out).

use crate::access::RouteAccess;
use crate::identity::IdentityState;
use crate::routes::{
    PathParams, RouteRule, RouteTable, Screen, ScreenTarget, DASHBOARD_PATH, LOGIN_PATH,
};

/// How a redirect manipulates browser history.
///
/// Guard redirects always replace the current entry so the back button can
/// never return to a page the user was not allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// A redirect decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub history: HistoryMode,
}

impl Redirect {
    fn replace(to: &'static str) -> Self {
        Self { to, history: HistoryMode::Replace }
    }
}

/// A render decision: the concrete screen plus the parameters the pattern
/// bound. Screens may assume the identity is resolved and authorized
/// whenever they receive this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScreen {
    pub screen: Screen,
    pub params: PathParams,
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Identity resolution still in flight; show the placeholder
    Loading,
    /// Render the screen
    Render(RenderedScreen),
    /// Go elsewhere instead
    Redirect(Redirect),
}

impl AccessDecision {
    fn render(screen: Screen, params: PathParams) -> Self {
        AccessDecision::Render(RenderedScreen { screen, params })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AccessDecision::Loading)
    }

    /// The redirect target, if this decision is a redirect
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Redirect(redirect) => Some(redirect.to),
            _ => None,
        }
    }

    /// The rendered screen, if this decision renders one
    pub fn screen(&self) -> Option<Screen> {
        match self {
            AccessDecision::Render(rendered) => Some(rendered.screen),
            _ => None,
        }
    }
}

/// Decide a navigation attempt against the whole table.
///
/// Unknown paths have no rule to check, so the decision falls out of the
/// identity alone: login for anonymous visitors, dashboard for everyone
/// else. The dashboard fallback is deliberate product behavior - the portal
/// has no 404 page.
pub fn navigate(state: &IdentityState, table: &RouteTable, path: &str) -> AccessDecision {
    if state.is_loading() {
        return AccessDecision::Loading;
    }

    match table.resolve(path) {
        Some(matched) => decide(state, matched.rule, matched.params),
        None if state.is_authenticated() => {
            log::debug!("Unknown path {}, falling back to dashboard", path);
            AccessDecision::Redirect(Redirect::replace(DASHBOARD_PATH))
        }
        None => AccessDecision::Redirect(Redirect::replace(LOGIN_PATH)),
    }
}

/// Decide a navigation attempt for one matched rule.
pub fn decide(state: &IdentityState, rule: &RouteRule, params: PathParams) -> AccessDecision {
    // Never redirect while identity is unresolved: the visitor may well be
    // authenticated once the token round trip completes.
    if state.is_loading() {
        return AccessDecision::Loading;
    }

    match rule.access() {
        RouteAccess::Public => target_decision(rule.target(), state, params),
        RouteAccess::PublicOnly => {
            if state.is_authenticated() {
                // Signed-in users have no business on the login form
                AccessDecision::Redirect(Redirect::replace(DASHBOARD_PATH))
            } else {
                target_decision(rule.target(), state, params)
            }
        }
        RouteAccess::Authenticated => {
            if state.is_authenticated() {
                target_decision(rule.target(), state, params)
            } else {
                AccessDecision::Redirect(Redirect::replace(LOGIN_PATH))
            }
        }
        RouteAccess::Roles(required) => match state.role() {
            Some(role) if required.contains(role) => {
                target_decision(rule.target(), state, params)
            }
            Some(_) => AccessDecision::Redirect(Redirect::replace(DASHBOARD_PATH)),
            None => AccessDecision::Redirect(Redirect::replace(LOGIN_PATH)),
        },
    }
}

fn target_decision(
    target: ScreenTarget,
    state: &IdentityState,
    params: PathParams,
) -> AccessDecision {
    match target {
        ScreenTarget::RedirectTo(to) => AccessDecision::Redirect(Redirect::replace(to)),
        other => match other.screen_for(state.role()) {
            Some(screen) => AccessDecision::render(screen, params),
            // Unreachable by construction of the table; redirect beats a panic
            None => AccessDecision::Redirect(Redirect::replace(DASHBOARD_PATH)),
        },
    }
}
