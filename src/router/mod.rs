//! View Router / Guard
//!
//! Maps paths to views and decides, on every navigation, whether the requested
//! view renders or the user is redirected.
//!
//! ## Decision table
//!
//! | Path | Signed in | Signed out |
//! |---|---|---|
//! | `/login` | redirect to `/dashboard` | render login |
//! | protected | render inside sidebar layout | redirect to `/login` |
//! | `/` or unknown | redirect to `/dashboard` | redirect to `/login` |

mod guard;
mod nav;
mod routes;

pub use guard::{decide, settle, Layout, Outcome, Settled};
pub use nav::{NavItem, NAV_ITEMS};
pub use routes::{lookup, Location, RouteEntry, View, DEFAULT_PATH, LOGIN_PATH, ROUTES};
