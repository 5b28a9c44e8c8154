//! Finance API
//!
//! Wire types and the client for the remote finance API.
//!
//! ## Endpoints
//!
//! - `POST /login`, `POST /register`
//! - `GET /api/me`
//! - `GET /api/transactions?time_period=..`
//! - `GET /api/summary?time_period=..`
//!
//! Authenticated calls carry `Authorization: Bearer <token>`.
//!
//! [`FinanceApi`] is the seam the auth flow and dashboard are written
//! against. The native build implements it with reqwest ([`ApiClient`]); the
//! web front end implements it with gloo-net.

mod dto;
mod error;

#[cfg(feature = "native")]
mod client;

pub use dto::{
    parse_summary, parse_transactions, CategoryTotal, Credentials, ParsePeriodError,
    RegisterRequest, Summary, TimePeriod, TokenResponse, Transaction,
};
pub use error::{extract_detail, ApiError, ApiResult, GENERIC_ERROR_MESSAGE};

#[cfg(feature = "native")]
pub use client::ApiClient;

use async_trait::async_trait;

use crate::session::User;

/// Path of the credential exchange
pub const LOGIN_ENDPOINT: &str = "/login";
/// Path of account creation
pub const REGISTER_ENDPOINT: &str = "/register";
/// Path of the current-user profile
pub const ME_ENDPOINT: &str = "/api/me";
/// Path of the transaction list
pub const TRANSACTIONS_ENDPOINT: &str = "/api/transactions";
/// Path of the period summary
pub const SUMMARY_ENDPOINT: &str = "/api/summary";

/// Operations the front ends need from the finance API.
///
/// Futures are not `Send`: every caller runs on a single-threaded event loop
/// and the browser implementation cannot be `Send`.
#[async_trait(?Send)]
pub trait FinanceApi {
    /// Exchange credentials for a bearer token and profile
    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse>;

    /// Create an account; does not sign in
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()>;

    /// Profile of the token's owner
    async fn current_user(&self, token: &str) -> ApiResult<User>;

    /// Transactions within `period`
    async fn transactions(&self, token: &str, period: TimePeriod) -> ApiResult<Vec<Transaction>>;

    /// Aggregates for `period`
    async fn summary(&self, token: &str, period: TimePeriod) -> ApiResult<Summary>;
}

/// `/api/transactions?time_period=month` style path
pub fn period_path(endpoint: &str, period: TimePeriod) -> String {
    format!("{}?time_period={}", endpoint, period.as_str())
}

/// Value of the `Authorization` header
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
