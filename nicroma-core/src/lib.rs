//! NicRoma Portal Shell - Core
//!
//! Role-gated routing, navigation and identity state for the NicRoma
//! multi-tenant freight-forwarding portal.
//!
//! # Overview
//!
//! The portal has five roles (`root`, `admin`, `manager`, `user`, `client`)
//! and around thirty screens. This crate decides, for any navigation
//! attempt, exactly one of: render the screen, redirect (login or
//! dashboard), or show the loading placeholder - and, independently, which
//! links each role's sidebar shows. Both decisions derive from one shared
//! permission table so they cannot drift apart.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nicroma_core::guard::navigate;
//! use nicroma_core::identity::IdentityState;
//! use nicroma_core::routes::RouteTable;
//!
//! let table = RouteTable::nicroma();
//! let decision = navigate(&IdentityState::Anonymous, &table, "/carpetas");
//! // decision: redirect to /login, replacing history
//! ```
//!
//! # Architecture
//!
//! - [`identity`] - who is signed in; resolution against the REST API
//! - [`access`] - the shared role-permission table
//! - [`routes`] - the declarative route table and its pattern matcher
//! - [`guard`] - the per-navigation access decision
//! - [`nav`] - role-driven sidebar entries, badges and the drift audit
//! - [`shell`] - sidebar collapse state and hover flyouts
//! - [`storage`] - persisted client-side preferences
//! - [`config`] - TOML + environment configuration

pub mod access; // Role sets and the shared permission table
pub mod config; // Configuration system with TOML support
pub mod guard; // Per-navigation access decisions
pub mod identity; // Identity provider, roles, resolution backends
pub mod nav; // Role-driven navigation and badges
pub mod routes; // Declarative route table
pub mod shell; // Sidebar and flyout presentation state
pub mod storage; // Persisted client-side preferences

// Re-exports of main types
pub use access::{RoleSet, RouteAccess};
pub use guard::{navigate, AccessDecision, HistoryMode};
pub use identity::{CurrentUser, IdentityProvider, IdentityState, Role};
pub use nav::{navigation_for, NavigationEntry, NotificationCounts};
pub use routes::{RouteTable, Screen};
