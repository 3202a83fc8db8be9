//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every endpoint call funnels through one request pipeline:
//!
//! 1. **Pre-request**: attach `Authorization: Bearer <token>` when the
//!    session holds a token.
//! 2. **Post-response**: detect authentication failure (evict the session,
//!    then fail), turn other non-2xx statuses into [`ApiError::Backend`],
//!    and unwrap the `{ "data": ... }` envelope from successful bodies.
//!
//! Each call is attempted exactly once; there are no retries and no caching.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use shared::dto::envelope::{unwrap_data, Envelope};

use crate::core::error::{ApiError, Result};
use crate::session::Session;

/// Base URL used when `WALLET_API_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the backend base URL.
const API_URL_ENV: &str = "WALLET_API_URL";

/// HTTP client for communicating with the wallet backend.
///
/// Holds a pooled `reqwest::Client` and the shared [`Session`]; cheap to
/// share behind an `Arc` across concurrent view tasks. Concurrent calls are
/// independent: nothing orders a balance refresh against a withdrawal
/// submission, and a request issued just before a logout may still carry the
/// old token.
pub struct ApiClient {
    pub(crate) http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client against `base_url` with default configuration.
    ///
    /// The transport uses a 10 second timeout so a dead backend cannot hang
    /// the views.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Create a client from the `WALLET_API_URL` environment variable,
    /// falling back to `http://localhost:8080`.
    pub fn from_env(session: Session) -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, session)
    }

    /// The session this client reads tokens from and evicts on auth failure.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    pub(crate) fn root_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        self.execute(self.http.get(self.api_url(path))).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.execute(self.http.post(self.api_url(path)).json(body))
            .await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<Value> {
        self.execute(self.http.post(self.api_url(path))).await
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Value> {
        let response = self
            .attach_auth(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Pre-request stage: the session token is read once, here.
    fn attach_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Post-response stage: auth eviction, error mapping, envelope unwrap.
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let message = error_message(response).await;
            // Session must be gone before the failure reaches the caller, no
            // matter which endpoint produced the 401.
            self.session.invalidate();
            tracing::warn!(error = %message, "Backend rejected session token");
            return Err(ApiError::Auth(message));
        }

        if !status.is_success() {
            let message = error_message(response).await;
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await.map_err(|e| ApiError::Backend {
            status: status.as_u16(),
            message: format!("Failed to parse response: {}", e),
        })?;

        Ok(unwrap_data(body))
    }
}

/// Extract the best error description from a failure body.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<Envelope>().await {
        Ok(envelope) => envelope
            .error_text()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status)),
        Err(_) => format!("HTTP {}", status),
    }
}
