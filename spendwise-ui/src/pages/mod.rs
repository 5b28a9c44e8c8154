//! Pages
//!
//! Top-level page components for each view the guard can render.

pub mod dashboard;
pub mod login;
pub mod placeholder;
pub mod settings;

pub use dashboard::Dashboard;
pub use login::LoginPage;
pub use placeholder::Placeholder;
pub use settings::Settings;
