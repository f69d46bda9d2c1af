//! Navigation/route consistency audit
//!
//! Nothing at runtime can detect a sidebar link whose route would bounce the
//! same role back to the dashboard - it just looks like a confusing UX gap.
//! This audit makes the drift checkable at test time (and from the demo CLI):
//! for every role, every visible href must resolve to a rule that admits
//! that role.

use crate::identity::Role;
use crate::routes::RouteTable;

use super::navigation_for;

/// One detected mismatch between navigation and route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftFinding {
    pub role: Role,
    pub href: &'static str,
    pub reason: String,
}

impl std::fmt::Display for DriftFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.role, self.href, self.reason)
    }
}

/// Check every role's sidebar against the route table.
///
/// An empty result means no drift. Findings carry enough context to point
/// at the offending link directly.
pub fn audit_navigation(table: &RouteTable) -> Vec<DriftFinding> {
    let mut findings = Vec::new();

    for role in Role::ALL {
        for entry in navigation_for(role) {
            for href in entry.hrefs() {
                match table.resolve(href) {
                    None => findings.push(DriftFinding {
                        role,
                        href,
                        reason: "no route rule matches this link".to_string(),
                    }),
                    Some(matched) if !matched.rule.access().admits(role) => {
                        findings.push(DriftFinding {
                            role,
                            href,
                            reason: format!(
                                "route {} rejects this role",
                                matched.rule.pattern()
                            ),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
    }

    findings
}
