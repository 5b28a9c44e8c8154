//! State Management
//!
//! Session and theme state shared through Leptos context.

pub mod auth;
pub mod storage;
pub mod theme;

pub use auth::{provide_auth_state, AuthState};
pub use storage::BrowserStorage;
pub use theme::{provide_theme_state, ThemeState};
