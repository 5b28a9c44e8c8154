//! Finance API access from the browser

pub mod client;

pub use client::{get_api_base, HttpApi, DEFAULT_API_BASE};
