//! Role-driven navigation
//!
//! What the sidebar shows is decided here, independently of what the guard
//! permits - the two stay consistent because both read the same permission
//! table, and the [`audit`] check proves it.

mod audit;
mod badges;
mod entry;
mod mapping;

pub use audit::{audit_navigation, DriftFinding};
pub use badges::{badge_label, NotificationCounts, BADGE_DISPLAY_CAP};
pub use entry::NavigationEntry;
pub use mapping::{navigation_for, navigation_for_str};
