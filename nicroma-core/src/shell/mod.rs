//! Presentation-shell state
//!
//! The chrome around the screens: the sidebar rail and its hover flyouts.
//! Which links exist comes from [`crate::nav`]; this module only tracks how
//! they are presented (collapsed, expanded, hovered).

mod flyout;
mod sidebar;

pub use flyout::FlyoutMenu;
pub use sidebar::Sidebar;
