//! Route table and location parsing

use std::fmt;

use crate::auth::AuthMode;

/// Path of the login view
pub const LOGIN_PATH: &str = "/login";
/// Where signed-in users land
pub const DEFAULT_PATH: &str = "/dashboard";

/// A view the application can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login(AuthMode),
    Dashboard,
    Transactions,
    Budget,
    Analytics,
    Settings,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Login(mode) => mode.heading(),
            View::Dashboard => "Dashboard",
            View::Transactions => "Transactions",
            View::Budget => "Budget",
            View::Analytics => "Analytics",
            View::Settings => "Settings",
        }
    }

    /// Body text for views that are not built out yet
    pub fn placeholder_message(&self) -> Option<&'static str> {
        match self {
            View::Transactions => Some("Transaction list will be displayed here."),
            View::Budget => Some("Budget planning will be displayed here."),
            View::Analytics => Some("Analytics and insights will be displayed here."),
            View::Settings => Some("Settings and preferences will be displayed here."),
            View::Login(_) | View::Dashboard => None,
        }
    }
}

/// One row of the static route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
    pub protected: bool,
}

/// Every declared path. Anything else falls through to the catch-all.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: LOGIN_PATH,
        view: View::Login(AuthMode::Login),
        protected: false,
    },
    RouteEntry {
        path: DEFAULT_PATH,
        view: View::Dashboard,
        protected: true,
    },
    RouteEntry {
        path: "/transactions",
        view: View::Transactions,
        protected: true,
    },
    RouteEntry {
        path: "/budget",
        view: View::Budget,
        protected: true,
    },
    RouteEntry {
        path: "/analytics",
        view: View::Analytics,
        protected: true,
    },
    RouteEntry {
        path: "/settings",
        view: View::Settings,
        protected: true,
    },
];

/// Find the table entry for a normalized path
pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.path == path)
}

/// A requested location: normalized path plus decoded query pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    /// Parse `"/login/?register=true#top"` style input.
    ///
    /// The fragment is dropped, a trailing slash is trimmed (except on the
    /// root) and a missing leading slash is added.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let raw = raw.split_once('#').map_or(raw, |(before, _)| before);
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));

        let mut path = path.trim_end_matches('/').to_string();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();

        Self { path, query }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value for a query key
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                sep,
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_path() {
        assert_eq!(Location::parse("/dashboard/").path(), "/dashboard");
        assert_eq!(Location::parse("dashboard").path(), "/dashboard");
        assert_eq!(Location::parse("/").path(), "/");
        assert_eq!(Location::parse("").path(), "/");
        assert_eq!(Location::parse("/settings#profile").path(), "/settings");
    }

    #[test]
    fn test_parse_query() {
        let location = Location::parse("/login?register=true&next=%2Fbudget");
        assert_eq!(location.path(), "/login");
        assert_eq!(location.query_param("register"), Some("true"));
        assert_eq!(location.query_param("next"), Some("/budget"));
        assert_eq!(location.query_param("missing"), None);

        let location = Location::parse("/login?flag&name=Ada+Lovelace");
        assert_eq!(location.query_param("flag"), Some(""));
        assert_eq!(location.query_param("name"), Some("Ada Lovelace"));
    }

    #[test]
    fn test_display_reencodes_query() {
        let location = Location::parse("/login?register=true");
        assert_eq!(location.to_string(), "/login?register=true");
    }

    #[test]
    fn test_route_table_invariants() {
        // Paths are unique
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }

        // Login is never protected, the default view always is
        assert!(!lookup(LOGIN_PATH).unwrap().protected);
        assert!(lookup(DEFAULT_PATH).unwrap().protected);
        assert!(lookup("/").is_none());
    }

    #[test]
    fn test_placeholder_messages() {
        assert!(View::Dashboard.placeholder_message().is_none());
        assert_eq!(
            View::Analytics.placeholder_message(),
            Some("Analytics and insights will be displayed here.")
        );
        assert_eq!(View::Budget.title(), "Budget");
    }
}
