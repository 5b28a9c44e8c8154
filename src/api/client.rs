//! Finance API REST Client
//!
//! reqwest implementation of [`FinanceApi`] for the native front end.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use super::dto::{
    parse_summary, parse_transactions, Credentials, RegisterRequest, Summary, TimePeriod,
    TokenResponse, Transaction,
};
use super::error::{ApiError, ApiResult};
use super::{
    bearer, period_path, FinanceApi, LOGIN_ENDPOINT, ME_ENDPOINT, REGISTER_ENDPOINT,
    SUMMARY_ENDPOINT, TRANSACTIONS_ENDPOINT,
};
use crate::config::ApiConfig;
use crate::session::User;

/// Finance API client.
///
/// Holds no session state: authenticated calls take the bearer token as an
/// argument. No timeout is configured; a hung server hangs the call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured base address
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        Self::with_base_url(&config.base_url)
    }

    /// Create a client for an explicit base address
    pub fn with_base_url(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("spendwise/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the body of a 2xx response
    async fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            Ok(body)
        } else {
            tracing::debug!(status = status.as_u16(), "Finance API returned an error");
            Err(ApiError::from_response(status.as_u16(), &body))
        }
    }

    fn authorized_get(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .get(self.url(path))
            .header(reqwest::header::AUTHORIZATION, bearer(token))
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

#[async_trait(?Send)]
impl FinanceApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        let body = self
            .send(self.client.post(self.url(LOGIN_ENDPOINT)).json(credentials))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.send(self.client.post(self.url(REGISTER_ENDPOINT)).json(request))
            .await?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> ApiResult<User> {
        let body = self.send(self.authorized_get(ME_ENDPOINT, token)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn transactions(&self, token: &str, period: TimePeriod) -> ApiResult<Vec<Transaction>> {
        let path = period_path(TRANSACTIONS_ENDPOINT, period);
        let body = self.send(self.authorized_get(&path, token)).await?;
        Ok(parse_transactions(&body)?)
    }

    async fn summary(&self, token: &str, period: TimePeriod) -> ApiResult<Summary> {
        let path = period_path(SUMMARY_ENDPOINT, period);
        let body = self.send(self.authorized_get(&path, token)).await?;
        Ok(parse_summary(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    const TOKEN: &str = "tok-123";

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map_or(false, |v| v == "Bearer tok-123")
    }

    fn unauthorized() -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Not authenticated" })),
        )
            .into_response()
    }

    async fn login(Json(body): Json<Value>) -> axum::response::Response {
        if body["password"] == "secret" {
            Json(json!({
                "access_token": TOKEN,
                "token_type": "bearer",
                "user": { "id": 1, "email": body["email"], "full_name": "Ada Lovelace" }
            }))
            .into_response()
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Invalid credentials" })),
            )
                .into_response()
        }
    }

    async fn register(Json(body): Json<Value>) -> axum::response::Response {
        if body["email"] == "taken@example.com" {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Email already registered" })),
            )
                .into_response()
        } else if body["fullName"].is_string() {
            Json(json!({ "message": "User created successfully" })).into_response()
        } else {
            StatusCode::UNPROCESSABLE_ENTITY.into_response()
        }
    }

    async fn me(headers: HeaderMap) -> axum::response::Response {
        if !authorized(&headers) {
            return unauthorized();
        }
        Json(json!({ "id": 1, "email": "ada@example.com", "full_name": "Ada Lovelace" }))
            .into_response()
    }

    async fn transactions(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        if !authorized(&headers) {
            return unauthorized();
        }
        let period = params.get("time_period").cloned().unwrap_or_default();
        Json(json!([
            { "id": 1, "amount": -42.5, "date": "2024-03-05", "description": period, "category": "Food" }
        ]))
        .into_response()
    }

    async fn summary(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        if !authorized(&headers) {
            return unauthorized();
        }
        match params.get("time_period").map(String::as_str) {
            Some("day") => Json(Value::Null).into_response(),
            _ => Json(json!({ "total_income": 100.0, "total_expenses": 250.5, "net": -150.5 }))
                .into_response(),
        }
    }

    async fn spawn_backend() -> ApiClient {
        let app = Router::new()
            .route("/login", post(login))
            .route("/register", post(register))
            .route("/api/me", get(me))
            .route("/api/transactions", get(transactions))
            .route("/api/summary", get(summary));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        ApiClient::with_base_url(&format!("http://{}/", addr)).unwrap()
    }

    fn credentials(password: &str) -> Credentials {
        Credentials {
            email: "ada@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::with_base_url("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/login"), "http://localhost:8000/login");

        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_login_success() {
        let client = spawn_backend().await;
        let resp = client.login(&credentials("secret")).await.unwrap();
        assert_eq!(resp.access_token, TOKEN);
        assert_eq!(resp.user.email, "ada@example.com");
        assert_eq!(resp.user.full_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_login_rejected_surfaces_detail() {
        let client = spawn_backend().await;
        let err = client.login(&credentials("wrong")).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_register() {
        let client = spawn_backend().await;
        let ok = RegisterRequest {
            email: "new@example.com".to_string(),
            password: "secret".to_string(),
            full_name: "New User".to_string(),
        };
        client.register(&ok).await.unwrap();

        let taken = RegisterRequest {
            email: "taken@example.com".to_string(),
            ..ok
        };
        let err = client.register(&taken).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                detail: Some("Email already registered".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_authenticated_calls_send_bearer_token() {
        let client = spawn_backend().await;

        let user = client.current_user(TOKEN).await.unwrap();
        assert_eq!(user.display_name(), "Ada Lovelace");

        let txs = client.transactions(TOKEN, TimePeriod::Week).await.unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].description, "week");

        let summary = client.summary(TOKEN, TimePeriod::Month).await.unwrap();
        assert_eq!(summary.net, -150.5);

        let err = client.current_user("stale").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_null_summary_reads_as_zero() {
        let client = spawn_backend().await;
        let summary = client.summary(TOKEN, TimePeriod::Day).await.unwrap();
        assert_eq!(summary, Summary::default());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::with_base_url(&format!("http://{}", addr)).unwrap();
        let err = client.login(&credentials("secret")).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
