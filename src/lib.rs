//! # SpendWise
//!
//! Personal finance dashboard client. Holds the signed-in session, decides
//! which view a path renders, runs the login/registration exchange and loads
//! the dashboard from the remote finance API.
//!
//! ## Modules
//!
//! - [`session`]: Session store with pluggable durable storage
//! - [`router`]: Route table, guard decision and sidebar navigation
//! - [`auth`]: Login and registration flow
//! - [`dashboard`]: Joint dashboard fetch and the rendered view model
//! - [`api`]: Wire types, errors and the HTTP client for the finance API
//! - [`config`]: TOML configuration with environment overrides (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spendwise::api::ApiClient;
//! use spendwise::auth::{AuthFlow, AuthMode, LoginForm, SubmitOutcome};
//! use spendwise::config::Config;
//! use spendwise::router::{decide, Location};
//! use spendwise::session::{FileStorage, SessionStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = ApiClient::new(&config.api)?;
//!     let store = SessionStore::init(FileStorage::new(config.session.file_path()));
//!
//!     let flow = AuthFlow::new();
//!     let form = LoginForm::new("ada@example.com", "hunter2");
//!     if let SubmitOutcome::Authenticated { redirect } =
//!         flow.submit(&api, &store, AuthMode::Login, &form).await
//!     {
//!         let outcome = decide(&Location::parse(redirect), store.is_authenticated());
//!         println!("{outcome:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
#[cfg(feature = "native")]
pub mod config;
pub mod dashboard;
pub mod router;
pub mod session;

// Re-export top-level types for convenience
pub use session::{MemoryStorage, Session, SessionStorage, SessionStore, StorageError, User};

#[cfg(feature = "native")]
pub use session::FileStorage;

pub use router::{
    decide, settle, Layout, Location, NavItem, Outcome, RouteEntry, Settled, View, DEFAULT_PATH,
    LOGIN_PATH, NAV_ITEMS, ROUTES,
};

pub use auth::{AuthFlow, AuthMode, LoginForm, SubmitOutcome};

pub use api::{
    ApiError, ApiResult, CategoryTotal, Credentials, FinanceApi, RegisterRequest, Summary,
    TimePeriod, TokenResponse, Transaction,
};

#[cfg(feature = "native")]
pub use api::ApiClient;

pub use dashboard::{
    format_currency, BalanceIndicator, CategorySlice, DashboardData, DashboardView, Sign,
    SummaryCard, TransactionRow,
};

#[cfg(feature = "native")]
pub use config::{generate_default_config, ApiConfig, Config, ConfigError, LoggingConfig, SessionConfig};
