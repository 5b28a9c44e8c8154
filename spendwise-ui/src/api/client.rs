//! HTTP API Client
//!
//! gloo-net implementation of the finance API for the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use spendwise::api::{
    bearer, parse_summary, parse_transactions, period_path, ApiError, ApiResult, Credentials,
    FinanceApi, RegisterRequest, Summary, TimePeriod, TokenResponse, Transaction, LOGIN_ENDPOINT,
    ME_ENDPOINT, REGISTER_ENDPOINT, SUMMARY_ENDPOINT, TRANSACTIONS_ENDPOINT,
};
use spendwise::User;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// localStorage key that overrides the API base URL
const API_URL_KEY: &str = "spendwise_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

/// Browser client for the finance API
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpApi {
    pub fn new() -> Self {
        Self {
            base_url: get_api_base(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: Request) -> ApiResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let ok = response.ok();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if ok {
            Ok(body)
        } else {
            Err(ApiError::from_response(status, &body))
        }
    }

    fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> ApiResult<Request> {
        Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }

    fn authorized_get(&self, path: &str, token: &str) -> ApiResult<Request> {
        let builder: RequestBuilder =
            Request::get(&self.url(path)).header("Authorization", &bearer(token));
        builder
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }
}

#[async_trait(?Send)]
impl FinanceApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        let body = self.send(self.post_json(LOGIN_ENDPOINT, credentials)?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.send(self.post_json(REGISTER_ENDPOINT, request)?).await?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> ApiResult<User> {
        let body = self.send(self.authorized_get(ME_ENDPOINT, token)?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn transactions(&self, token: &str, period: TimePeriod) -> ApiResult<Vec<Transaction>> {
        let path = period_path(TRANSACTIONS_ENDPOINT, period);
        let body = self.send(self.authorized_get(&path, token)?).await?;
        Ok(parse_transactions(&body)?)
    }

    async fn summary(&self, token: &str, period: TimePeriod) -> ApiResult<Summary> {
        let path = period_path(SUMMARY_ENDPOINT, period);
        let body = self.send(self.authorized_get(&path, token)?).await?;
        Ok(parse_summary(&body)?)
    }
}
