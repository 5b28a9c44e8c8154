//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod navbar;
pub mod sidebar;
pub mod summary_card;

pub use chart::CategoryChart;
pub use loading::{CardSkeleton, Loading};
pub use navbar::Navbar;
pub use sidebar::Sidebar;
pub use summary_card::StatCard;
