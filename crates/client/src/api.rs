//! REST API client for the dashboard backend.
//!
//! Wraps the two endpoints the dashboard consumes (login and the dashboard
//! snapshot) using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use donezo_core::types::{DashboardSnapshot, LoginResponse};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::fetcher::SnapshotSource;
use crate::session::Authenticator;

/// HTTP client for a single dashboard backend.
#[derive(Debug, Clone)]
pub struct DashboardApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the dashboard REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Dashboard API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
        /// Human-readable `message` field from the error body, if any.
        message: Option<String>,
    },
}

impl ApiError {
    /// The backend's own explanation of the failure, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Request(_) => None,
        }
    }
}

/// Shape of a non-2xx response body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl DashboardApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:5000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Build a client with the configured base URL and request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Exchange credentials for an identity and token.
    ///
    /// Sends `POST /api/login` with `{email, password}`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .client
            .post(format!("{}/api/login", self.api_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Load the full dashboard snapshot.
    ///
    /// Sends `GET /api/dashboard`, authorized with `token` as a bearer
    /// token when one is given.
    pub async fn fetch_dashboard(
        &self,
        token: Option<&str>,
    ) -> Result<DashboardSnapshot, ApiError> {
        let mut request = self.client.get(format!("{}/api/dashboard", self.api_url));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure the body
    /// is kept for debugging and its `message` field, if present, is
    /// extracted for display.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Authenticator for DashboardApi {
    async fn authenticate(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.login(email, password).await
    }
}

#[async_trait]
impl SnapshotSource for DashboardApi {
    async fn fetch_snapshot(&self, token: Option<&str>) -> Result<DashboardSnapshot, ApiError> {
        self.fetch_dashboard(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = DashboardApi::new("http://localhost:5000/");
        assert_eq!(api.api_url(), "http://localhost:5000");
    }

    #[test]
    fn server_message_only_for_status_errors() {
        let err = ApiError::Status {
            status: 401,
            body: r#"{"message":"Invalid credentials"}"#.to_string(),
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.to_string(), r#"Dashboard API error (401): {"message":"Invalid credentials"}"#);
    }
}
