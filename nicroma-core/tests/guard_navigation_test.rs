//! End-to-end guard decisions over the full route table

use nicroma_core::guard::{navigate, AccessDecision, HistoryMode};
use nicroma_core::identity::{IdentityState, MemoryIdentityBackend, Role};
use nicroma_core::routes::{RouteTable, Screen, DASHBOARD_PATH, LOGIN_PATH};

fn signed_in(role: Role) -> IdentityState {
    IdentityState::Authenticated(MemoryIdentityBackend::sample_user(role))
}

fn expect_redirect(decision: AccessDecision, to: &str) {
    match decision {
        AccessDecision::Redirect(redirect) => {
            assert_eq!(redirect.to, to);
            assert_eq!(redirect.history, HistoryMode::Replace, "guard redirects replace history");
        }
        other => panic!("expected redirect to {}, got {:?}", to, other),
    }
}

#[test]
fn anonymous_navigation_to_gated_screen_redirects_to_login() {
    let table = RouteTable::nicroma();
    let decision = navigate(&IdentityState::Anonymous, &table, "/carpetas");
    expect_redirect(decision, LOGIN_PATH);
}

#[test]
fn loading_identity_always_shows_the_placeholder() {
    let table = RouteTable::nicroma();
    for path in ["/dashboard", "/carpetas", "/login", "/admin/tenants", "/definitely-not-a-page"] {
        assert!(
            navigate(&IdentityState::Resolving, &table, path).is_loading(),
            "expected loading placeholder for {}",
            path
        );
    }
}

#[test]
fn role_sets_are_disjunctive() {
    let table = RouteTable::nicroma();

    // /clientes is open to admin and manager; either role is enough
    assert_eq!(navigate(&signed_in(Role::Admin), &table, "/clientes").screen(), Some(Screen::Clientes));
    assert_eq!(
        navigate(&signed_in(Role::Manager), &table, "/clientes").screen(),
        Some(Screen::Clientes)
    );

    // A staff user is silently sent home instead
    expect_redirect(navigate(&signed_in(Role::User), &table, "/clientes"), DASHBOARD_PATH);
}

#[test]
fn settings_screen_is_dispatched_on_role() {
    let table = RouteTable::nicroma();

    assert_eq!(
        navigate(&signed_in(Role::Root), &table, "/settings").screen(),
        Some(Screen::SystemSettings)
    );
    for role in [Role::Admin, Role::Manager, Role::User, Role::Client] {
        assert_eq!(
            navigate(&signed_in(role), &table, "/settings").screen(),
            Some(Screen::PersonalSettings),
            "role {} should get the personal settings screen",
            role
        );
    }
}

#[test]
fn login_form_inverts_the_guard() {
    let table = RouteTable::nicroma();

    assert_eq!(navigate(&IdentityState::Anonymous, &table, "/login").screen(), Some(Screen::Login));
    expect_redirect(navigate(&signed_in(Role::User), &table, "/login"), DASHBOARD_PATH);
}

#[test]
fn unknown_paths_have_no_dead_end() {
    let table = RouteTable::nicroma();

    // Signed in: silently home
    expect_redirect(navigate(&signed_in(Role::Manager), &table, "/reportes/2024"), DASHBOARD_PATH);

    // Signed out: login takes precedence over the dashboard fallback
    expect_redirect(navigate(&IdentityState::Anonymous, &table, "/reportes/2024"), LOGIN_PATH);
}

#[test]
fn client_cannot_reach_platform_administration() {
    let table = RouteTable::nicroma();
    expect_redirect(navigate(&signed_in(Role::Client), &table, "/admin/tenants"), DASHBOARD_PATH);
}

#[test]
fn root_path_is_an_authenticated_alias_for_the_dashboard() {
    let table = RouteTable::nicroma();
    expect_redirect(navigate(&signed_in(Role::Admin), &table, "/"), DASHBOARD_PATH);
    expect_redirect(navigate(&IdentityState::Anonymous, &table, "/"), LOGIN_PATH);
}

#[test]
fn detail_routes_bind_their_parameters() {
    let table = RouteTable::nicroma();
    match navigate(&signed_in(Role::User), &table, "/carpetas/CAR-2024-031") {
        AccessDecision::Render(rendered) => {
            assert_eq!(rendered.screen, Screen::CarpetaDetail);
            assert_eq!(rendered.params.get("id"), Some(&"CAR-2024-031".to_string()));
        }
        other => panic!("expected render, got {:?}", other),
    }
}

#[test]
fn decisions_are_a_pure_function_of_their_inputs() {
    let table = RouteTable::nicroma();
    let states = [
        IdentityState::Resolving,
        IdentityState::Anonymous,
        signed_in(Role::Root),
        signed_in(Role::Admin),
        signed_in(Role::Manager),
        signed_in(Role::User),
        signed_in(Role::Client),
    ];
    let paths =
        ["/", "/login", "/dashboard", "/carpetas", "/settings", "/admin/tenants", "/unknown"];

    for state in &states {
        for path in paths {
            assert_eq!(
                navigate(state, &table, path),
                navigate(state, &table, path),
                "decision for {:?} at {} must be deterministic",
                state,
                path
            );
        }
    }
}
