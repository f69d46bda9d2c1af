//! Navigation/route consistency and badge behavior

use nicroma_core::nav::{audit_navigation, badge_label, navigation_for, navigation_for_str, NotificationCounts};
use nicroma_core::identity::Role;
use nicroma_core::routes::RouteTable;

#[test]
fn every_visible_link_is_reachable_by_its_role() {
    let table = RouteTable::nicroma();
    let findings = audit_navigation(&table);
    assert!(findings.is_empty(), "navigation drift detected:\n{:#?}", findings);
}

#[test]
fn every_role_has_a_sidebar() {
    for role in Role::ALL {
        let entries = navigation_for(role);
        assert!(!entries.is_empty(), "role {} has an empty sidebar", role);

        // Tree depth is at most two: children never have children
        for entry in &entries {
            for child in &entry.children {
                assert!(child.children.is_empty(), "nested group under {}", entry.name);
            }
        }
    }
}

#[test]
fn unknown_wire_role_falls_back_to_least_privilege() {
    assert_eq!(navigation_for_str(Some("supervisor")), navigation_for(Role::User));
    assert_eq!(navigation_for_str(None), navigation_for(Role::User));
}

#[test]
fn badge_totals_are_order_independent() {
    let counts = NotificationCounts {
        portal_presupuestos_pendientes: 2,
        portal_presupuestos_respondidos: 9,
        ..Default::default()
    };

    let entries = navigation_for(Role::Client);
    let quotes = entries.iter().find(|e| e.name == "Mis Presupuestos").unwrap();

    // Two pending-count fields feed one entry
    assert_eq!(counts.count_for_entry(quotes), 11);
    // Recomputation with unchanged counters is stable
    assert_eq!(counts.count_for_entry(quotes), 11);
}

#[test]
fn badges_render_clamped_but_count_unclamped() {
    let counts = NotificationCounts { presupuestos_pendientes: 250, ..Default::default() };

    let entries = navigation_for(Role::Manager);
    let quotes = entries.iter().find(|e| e.name == "Presupuestos").unwrap();

    let logical = counts.count_for_entry(quotes);
    assert_eq!(logical, 250);
    assert_eq!(badge_label(logical, 99), Some("99+".to_string()));
}

#[test]
fn zero_counts_hide_the_badge() {
    let counts = NotificationCounts::default();
    for entry in navigation_for(Role::Admin) {
        assert_eq!(badge_label(counts.count_for_entry(&entry), 99), None);
    }
}
