//! API Error Types
//!
//! Errors returned by the finance API client, plus the rule for turning a
//! failed response body into a user-facing message.

use thiserror::Error;

/// Message shown when a failed response carries no usable `detail`
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors that can occur when talking to the finance API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network or transport failure; the request never got a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Status { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Build a `Status` error from a raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: extract_detail(body),
        }
    }

    /// The server rejected the bearer token or credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// Server-provided `detail`, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Single line suitable for an inline form error.
    ///
    /// `fallback` replaces a missing `detail` on HTTP errors; other variants
    /// describe themselves.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { detail, .. } => {
                detail.clone().unwrap_or_else(|| fallback.to_string())
            }
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Pull a string `detail` field out of an error body.
///
/// Validation failures send `detail` as a list of objects; those carry no
/// single message and are ignored.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
