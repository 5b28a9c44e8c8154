//! Sidebar navigation items

use super::routes::Location;

/// Link shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavItem {
    /// Highlighted when it points at the current path
    pub fn is_active(&self, current: &Location) -> bool {
        current.path() == self.path
    }
}

/// Sidebar entries, top to bottom
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/dashboard",
    },
    NavItem {
        label: "Transactions",
        path: "/transactions",
    },
    NavItem {
        label: "Budget",
        path: "/budget",
    },
    NavItem {
        label: "Analytics",
        path: "/analytics",
    },
    NavItem {
        label: "Settings",
        path: "/settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::lookup;

    #[test]
    fn test_every_item_is_a_protected_route() {
        for item in NAV_ITEMS {
            let entry = lookup(item.path).unwrap();
            assert!(entry.protected, "{}", item.path);
        }
    }

    #[test]
    fn test_active_item() {
        let current = Location::parse("/budget/");
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active(&current))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Budget"]);
    }
}
