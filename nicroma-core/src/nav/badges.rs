//! Notification badges
//!
//! Counters arrive from the API as one flat object; a fixed mapping ties
//! each navigation href to the counters it displays. An entry may aggregate
//! several counters (the portal's "Mis Presupuestos" shows pending plus
//! answered quotes). Only the *display* is capped ("99+"); the logical count
//! is never clamped.

use serde::{Deserialize, Serialize};

use super::NavigationEntry;

/// Default display cap; counts above it render as "99+"
pub const BADGE_DISPLAY_CAP: u64 = 99;

/// Pending-work counters as delivered by the API.
///
/// Badges render as absent until the fetch resolves; `Default` (all zeros)
/// models exactly that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationCounts {
    /// Staff: quotes awaiting a response
    pub presupuestos_pendientes: u64,

    /// Staff: pre-clearance requests awaiting review
    pub predespachos_pendientes: u64,

    /// Staff: invoices past their due date
    pub facturas_vencidas: u64,

    /// Portal: the client's quotes still being prepared
    pub portal_presupuestos_pendientes: u64,

    /// Portal: quotes answered by the forwarder, unread by the client
    pub portal_presupuestos_respondidos: u64,

    /// Portal: the client's pre-clearance requests in flight
    pub portal_predespachos_pendientes: u64,
}

impl NotificationCounts {
    /// Counter total behind a navigation href. Unmapped hrefs count zero.
    pub fn count_for_href(&self, href: &str) -> u64 {
        match href {
            "/presupuestos" => self.presupuestos_pendientes,
            "/predespachos" => self.predespachos_pendientes,
            "/facturas" => self.facturas_vencidas,
            "/portal/presupuestos" => {
                self.portal_presupuestos_pendientes + self.portal_presupuestos_respondidos
            }
            "/portal/predespachos" => self.portal_predespachos_pendientes,
            _ => 0,
        }
    }

    /// Badge count for an entry: its own href plus every child's.
    ///
    /// Plain summation, so recomputing with unchanged counters always gives
    /// the same total regardless of child order.
    pub fn count_for_entry(&self, entry: &NavigationEntry) -> u64 {
        entry.hrefs().into_iter().map(|href| self.count_for_href(href)).sum()
    }
}

/// Format a badge for display: `None` hides the badge, counts above `cap`
/// render as "cap+".
pub fn badge_label(count: u64, cap: u64) -> Option<String> {
    if count == 0 {
        None
    } else if count > cap {
        Some(format!("{}+", cap))
    } else {
        Some(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> NotificationCounts {
        NotificationCounts {
            presupuestos_pendientes: 4,
            predespachos_pendientes: 2,
            facturas_vencidas: 120,
            portal_presupuestos_pendientes: 3,
            portal_presupuestos_respondidos: 5,
            portal_predespachos_pendientes: 0,
        }
    }

    #[test]
    fn test_entry_aggregates_two_counters() {
        let counts = counts();
        assert_eq!(counts.count_for_href("/portal/presupuestos"), 8);
    }

    #[test]
    fn test_group_badge_sums_children() {
        let counts = counts();
        let group = NavigationEntry::group(
            "Gestion",
            "briefcase",
            vec![
                NavigationEntry::leaf("Facturas", "/facturas", "receipt"),
                NavigationEntry::leaf("Clientes", "/clientes", "users"),
            ],
        );
        assert_eq!(counts.count_for_entry(&group), 120);
    }

    #[test]
    fn test_recomputation_is_stable() {
        let counts = counts();
        let entry = NavigationEntry::leaf("Presupuestos", "/presupuestos", "calculator");
        let first = counts.count_for_entry(&entry);
        let second = counts.count_for_entry(&entry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_cap_never_touches_the_count() {
        let counts = counts();
        assert_eq!(counts.count_for_href("/facturas"), 120);
        assert_eq!(badge_label(120, BADGE_DISPLAY_CAP), Some("99+".to_string()));
        assert_eq!(badge_label(99, BADGE_DISPLAY_CAP), Some("99".to_string()));
        assert_eq!(badge_label(0, BADGE_DISPLAY_CAP), None);
    }

    #[test]
    fn test_counts_deserialize_with_missing_fields() {
        let counts: NotificationCounts =
            serde_json::from_str(r#"{"presupuestos_pendientes": 7}"#).unwrap();
        assert_eq!(counts.presupuestos_pendientes, 7);
        assert_eq!(counts.facturas_vencidas, 0);
    }
}
