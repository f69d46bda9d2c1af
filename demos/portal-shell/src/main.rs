//! Portal Shell Demo
//!
//! Exercises the NicRoma shell from the command line: what does each role
//! see in the sidebar, and what happens when it navigates somewhere.
//!
//! ## Run
//! ```bash
//! # The sidebar a manager sees, with badge counts
//! cargo run -p portal-shell -- nav --role manager --counts counts.json
//!
//! # A navigation attempt
//! cargo run -p portal-shell -- navigate --path /admin/tenants --role client
//! cargo run -p portal-shell -- navigate --path /carpetas --anonymous
//!
//! # Check sidebar links against the route table
//! cargo run -p portal-shell -- audit
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use nicroma_core::config::NicromaConfig;
use nicroma_core::guard::{navigate, AccessDecision};
use nicroma_core::identity::{IdentityState, MemoryIdentityBackend, Role};
use nicroma_core::nav::{audit_navigation, badge_label, navigation_for, NavigationEntry, NotificationCounts};
use nicroma_core::routes::RouteTable;
use nicroma_core::shell::Sidebar;
use nicroma_core::storage::{FilePreferenceStore, PreferenceStore};

#[derive(Parser)]
#[command(name = "portal-shell", about = "NicRoma portal shell demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sidebar a role sees
    Nav {
        /// Role: root, admin, manager, user or client
        #[arg(long)]
        role: String,

        /// JSON file with notification counts
        #[arg(long)]
        counts: Option<PathBuf>,
    },

    /// Decide a navigation attempt
    Navigate {
        /// Requested path, e.g. /carpetas/CAR-2024-001
        #[arg(long)]
        path: String,

        /// Navigate as this role
        #[arg(long, conflicts_with_all = ["anonymous", "loading"])]
        role: Option<String>,

        /// Navigate without a credential
        #[arg(long)]
        anonymous: bool,

        /// Navigate while identity resolution is still in flight
        #[arg(long, conflicts_with = "anonymous")]
        loading: bool,
    },

    /// Check every role's sidebar against the route table
    Audit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = NicromaConfig::load()?;
    config.validate()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.clone()),
    )
    .init();

    let cli = Cli::parse();
    let table = RouteTable::nicroma();
    log::debug!(
        "Route table loaded: {} rules, api base: {}",
        table.len(),
        config.api.base_url.as_deref().unwrap_or("(same origin)")
    );

    match cli.command {
        Command::Nav { role, counts } => {
            let role = Role::parse_lenient(&role);
            let counts = load_counts(counts)?;
            print_sidebar(role, &counts, &config).await?;
        }
        Command::Navigate { path, role, anonymous, loading } => {
            let state = if loading {
                IdentityState::Resolving
            } else if anonymous || role.is_none() {
                IdentityState::Anonymous
            } else {
                let role = Role::parse_lenient(role.as_deref().unwrap_or_default());
                IdentityState::Authenticated(MemoryIdentityBackend::sample_user(role))
            };

            print_decision(&state, &table, &path);
        }
        Command::Audit => {
            let findings = audit_navigation(&table);
            if findings.is_empty() {
                println!("OK: every sidebar link resolves to a route that admits its role");
            } else {
                for finding in &findings {
                    eprintln!("DRIFT {}", finding);
                }
                anyhow::bail!("{} navigation drift finding(s)", findings.len());
            }
        }
    }

    Ok(())
}

fn load_counts(path: Option<PathBuf>) -> Result<NotificationCounts> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read counts from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Malformed counts file: {}", path.display()))
        }
        None => Ok(NotificationCounts::default()),
    }
}

async fn print_sidebar(role: Role, counts: &NotificationCounts, config: &NicromaConfig) -> Result<()> {
    let prefs = Arc::new(FilePreferenceStore::open(&config.shell.preferences_path)?);
    let sidebar = Sidebar::load(prefs as Arc<dyn PreferenceStore>).await;

    println!("Sidebar for role '{}' ({})", role, if sidebar.collapsed() { "collapsed" } else { "expanded" });
    println!("==============================");

    for entry in navigation_for(role) {
        print_entry(&entry, counts, config.shell.badge_cap, 0);
    }

    Ok(())
}

fn print_entry(entry: &NavigationEntry, counts: &NotificationCounts, cap: u64, depth: usize) {
    let indent = "  ".repeat(depth);
    let badge = badge_label(counts.count_for_entry(entry), cap)
        .map(|label| format!("  [{}]", label))
        .unwrap_or_default();

    match entry.href {
        Some(href) => println!("{}{}  ->  {}{}", indent, entry.name, href, badge),
        None => println!("{}{}{}", indent, entry.name, badge),
    }

    for child in &entry.children {
        print_entry(child, counts, cap, depth + 1);
    }
}

fn print_decision(state: &IdentityState, table: &RouteTable, path: &str) {
    let who = match state {
        IdentityState::Resolving => "resolving identity".to_string(),
        IdentityState::Anonymous => "anonymous".to_string(),
        IdentityState::Authenticated(user) => format!("{} ({})", user.email, user.role),
    };

    println!("Navigate to {} as {}", path, who);

    match navigate(state, table, path) {
        AccessDecision::Loading => println!("  -> loading placeholder"),
        AccessDecision::Render(rendered) => {
            println!("  -> render {}", rendered.screen);
            for (name, value) in &rendered.params {
                println!("     param {} = {}", name, value);
            }
        }
        AccessDecision::Redirect(redirect) => {
            println!("  -> redirect to {} (history: {:?})", redirect.to, redirect.history);
        }
    }
}
