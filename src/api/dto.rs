//! Data Transfer Objects
//!
//! Request and response bodies of the finance API. Responses are consumed
//! as-is: every field defaults when missing or `null`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::session::{null_as_default, User};

// ============================================
// Auth
// ============================================

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

impl RegisterRequest {
    /// Credentials for the login that follows a successful registration
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Successful `POST /login` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

// ============================================
// Dashboard data
// ============================================

/// Reporting window for transactions and summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Day,
        TimePeriod::Week,
        TimePeriod::Month,
        TimePeriod::Year,
    ];

    /// Value of the `time_period` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Day => "day",
            TimePeriod::Week => "week",
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
        }
    }

    /// Label for the period selector
    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Day => "Today",
            TimePeriod::Week => "This Week",
            TimePeriod::Month => "This Month",
            TimePeriod::Year => "This Year",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown time period name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid time period: {0}. Use: day, week, month, year")]
pub struct ParsePeriodError(pub String);

impl FromStr for TimePeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "d" => Ok(TimePeriod::Day),
            "week" | "w" => Ok(TimePeriod::Week),
            "month" | "m" => Ok(TimePeriod::Month),
            "year" | "y" => Ok(TimePeriod::Year),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

/// A single transaction from `GET /api/transactions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    /// ISO date (`2024-03-05`) or timestamp string as sent by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Spending total for one category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
}

/// Aggregates from `GET /api/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_income: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_expenses: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub net: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<CategoryTotal>,
}

/// Decode a transactions body; `null` reads as an empty list
pub fn parse_transactions(body: &str) -> serde_json::Result<Vec<Transaction>> {
    Ok(serde_json::from_str::<Option<Vec<Transaction>>>(body)?.unwrap_or_default())
}

/// Decode a summary body; `null` reads as all-zero
pub fn parse_summary(body: &str) -> serde_json::Result<Summary> {
    Ok(serde_json::from_str::<Option<Summary>>(body)?.unwrap_or_default())
}
