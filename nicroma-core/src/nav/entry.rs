//! Navigation entries

/// One sidebar entry: a link, or a group with child links.
///
/// Entries form a tree of depth at most two (groups are never nested) and
/// are built fresh from static data on every call - nothing here is ever
/// mutated or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Display label
    pub name: &'static str,

    /// Link target; groups carry no href of their own
    pub href: Option<&'static str>,

    /// Icon reference, resolved by the host application
    pub icon: &'static str,

    /// Child links (ordered)
    pub children: Vec<NavigationEntry>,
}

impl NavigationEntry {
    /// A plain link
    pub fn leaf(name: &'static str, href: &'static str, icon: &'static str) -> Self {
        Self { name, href: Some(href), icon, children: Vec::new() }
    }

    /// A group of links
    pub fn group(name: &'static str, icon: &'static str, children: Vec<NavigationEntry>) -> Self {
        Self { name, href: None, icon, children }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Active-state highlighting: exact path equality, no prefix matching.
    /// A group is active when any of its children is.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.href == Some(current_path) {
            return true;
        }
        self.children.iter().any(|child| child.is_active(current_path))
    }

    /// Every href reachable from this entry, children included
    pub fn hrefs(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if let Some(href) = self.href {
            out.push(href);
        }
        for child in &self.children {
            out.extend(child.hrefs());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_with_children() -> NavigationEntry {
        NavigationEntry::group(
            "Administracion",
            "briefcase",
            vec![
                NavigationEntry::leaf("Clientes", "/clientes", "users"),
                NavigationEntry::leaf("Facturas", "/facturas", "receipt"),
            ],
        )
    }

    #[test]
    fn test_exact_match_only() {
        let entry = NavigationEntry::leaf("Carpetas", "/carpetas", "folder");
        assert!(entry.is_active("/carpetas"));
        assert!(!entry.is_active("/carpetas/7"));
    }

    #[test]
    fn test_group_is_active_through_children() {
        let group = group_with_children();
        assert!(group.is_active("/facturas"));
        assert!(!group.is_active("/dashboard"));
    }

    #[test]
    fn test_hrefs_collects_all_depths() {
        let group = group_with_children();
        assert_eq!(group.hrefs(), vec!["/clientes", "/facturas"]);
    }
}
