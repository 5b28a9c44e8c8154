//! Guard decision
//!
//! `decide` is a pure function of the requested location and the
//! authentication flag. Nothing is cached; callers re-run it on every
//! navigation.

use super::routes::{lookup, Location, View, DEFAULT_PATH, LOGIN_PATH};
use crate::auth::AuthMode;

/// Chrome around a rendered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Full-page view with no navigation (login)
    Bare,
    /// Sidebar navigation plus content region
    Authenticated,
}

/// Result of guarding a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render { view: View, layout: Layout },
    RedirectToLogin,
    RedirectToDefault,
}

impl Outcome {
    /// Path a redirect points at
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Outcome::Render { .. } => None,
            Outcome::RedirectToLogin => Some(LOGIN_PATH),
            Outcome::RedirectToDefault => Some(DEFAULT_PATH),
        }
    }
}

/// Decide what a navigation to `location` produces
pub fn decide(location: &Location, authenticated: bool) -> Outcome {
    let outcome = match lookup(location.path()) {
        Some(entry) if !entry.protected => {
            if authenticated {
                Outcome::RedirectToDefault
            } else {
                // The login entry is the only unprotected one
                Outcome::Render {
                    view: View::Login(AuthMode::from_location(location)),
                    layout: Layout::Bare,
                }
            }
        }
        Some(entry) => {
            if authenticated {
                Outcome::Render {
                    view: entry.view,
                    layout: Layout::Authenticated,
                }
            } else {
                Outcome::RedirectToLogin
            }
        }
        None => {
            if authenticated {
                Outcome::RedirectToDefault
            } else {
                Outcome::RedirectToLogin
            }
        }
    };

    tracing::debug!(path = %location.path(), authenticated, ?outcome, "Guarded navigation");
    outcome
}

/// A navigation after all redirects have been followed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub location: Location,
    pub view: View,
    pub layout: Layout,
    /// Number of redirects followed
    pub redirects: usize,
}

/// Follow redirects until a view renders.
///
/// For a fixed authentication state a redirect target always renders, so
/// this takes at most one hop.
pub fn settle(location: Location, authenticated: bool) -> Settled {
    const MAX_REDIRECTS: usize = 4;

    let mut location = location;
    let mut redirects = 0;

    loop {
        match decide(&location, authenticated) {
            Outcome::Render { view, layout } => {
                return Settled {
                    location,
                    view,
                    layout,
                    redirects,
                };
            }
            redirect => {
                let target = redirect.redirect_path().unwrap_or(LOGIN_PATH);
                redirects += 1;
                location = Location::parse(target);

                if redirects >= MAX_REDIRECTS {
                    tracing::warn!("Redirect limit reached, rendering {}", target);
                    let view = if authenticated {
                        View::Dashboard
                    } else {
                        View::Login(AuthMode::Login)
                    };
                    let layout = if authenticated {
                        Layout::Authenticated
                    } else {
                        Layout::Bare
                    };
                    return Settled {
                        location,
                        view,
                        layout,
                        redirects,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(path: &str, authenticated: bool) -> Outcome {
        decide(&Location::parse(path), authenticated)
    }

    #[test]
    fn test_login_path() {
        assert_eq!(at("/login", true), Outcome::RedirectToDefault);
        assert_eq!(
            at("/login", false),
            Outcome::Render {
                view: View::Login(AuthMode::Login),
                layout: Layout::Bare,
            }
        );
    }

    #[test]
    fn test_login_path_register_mode() {
        assert_eq!(
            at("/login?register=true", false),
            Outcome::Render {
                view: View::Login(AuthMode::Register),
                layout: Layout::Bare,
            }
        );
        // Registration mode does not bypass the signed-in redirect
        assert_eq!(at("/login?register=true", true), Outcome::RedirectToDefault);
    }

    #[test]
    fn test_protected_paths() {
        let protected = [
            ("/dashboard", View::Dashboard),
            ("/transactions", View::Transactions),
            ("/budget", View::Budget),
            ("/analytics", View::Analytics),
            ("/settings", View::Settings),
        ];

        for (path, view) in protected {
            assert_eq!(
                at(path, true),
                Outcome::Render {
                    view,
                    layout: Layout::Authenticated,
                },
                "{path} signed in"
            );
            assert_eq!(at(path, false), Outcome::RedirectToLogin, "{path} signed out");
        }
    }

    #[test]
    fn test_root_and_unknown_paths() {
        for path in ["/", "", "/nope", "/dashboard/extra", "/LOGIN"] {
            assert_eq!(at(path, true), Outcome::RedirectToDefault, "{path} signed in");
            assert_eq!(at(path, false), Outcome::RedirectToLogin, "{path} signed out");
        }
    }

    #[test]
    fn test_decision_is_repeatable() {
        for path in ["/", "/login", "/settings", "/unknown"] {
            for authenticated in [true, false] {
                assert_eq!(at(path, authenticated), at(path, authenticated));
            }
        }
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(Outcome::RedirectToLogin.redirect_path(), Some("/login"));
        assert_eq!(Outcome::RedirectToDefault.redirect_path(), Some("/dashboard"));
        assert_eq!(
            Outcome::Render {
                view: View::Budget,
                layout: Layout::Authenticated
            }
            .redirect_path(),
            None
        );
    }

    #[test]
    fn test_settle_follows_single_redirect() {
        let settled = settle(Location::parse("/"), true);
        assert_eq!(settled.location.path(), "/dashboard");
        assert_eq!(settled.view, View::Dashboard);
        assert_eq!(settled.layout, Layout::Authenticated);
        assert_eq!(settled.redirects, 1);

        let settled = settle(Location::parse("/budget"), false);
        assert_eq!(settled.location.path(), "/login");
        assert_eq!(settled.view, View::Login(AuthMode::Login));
        assert_eq!(settled.layout, Layout::Bare);
        assert_eq!(settled.redirects, 1);

        let settled = settle(Location::parse("/analytics"), true);
        assert_eq!(settled.redirects, 0);
        assert_eq!(settled.view, View::Analytics);
    }
}
