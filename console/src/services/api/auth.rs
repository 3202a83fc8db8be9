//! # Authentication Endpoints
//!
//! Login, registration, and client-side logout. Successful login/register
//! responses carry a token and the user record; both are written into the
//! session before the call returns.

use shared::dto::auth::{LoginRequest, LoginResponse, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with username and password.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(client: &ApiClient, username: String, password: String) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { username, password };
    let value = client.post("/auth/login", &request).await?;
    let response: LoginResponse = serde_json::from_value(value)?;

    client
        .session()
        .sign_in(response.token.clone(), response.user.clone());

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        user_id = response.user.id,
        "Login successful"
    );
    Ok(response)
}

/// Register a new user. The backend signs the new user in directly, so the
/// session is populated the same way as for [`login`].
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn register(
    client: &ApiClient,
    username: String,
    password: String,
    email: String,
) -> Result<LoginResponse> {
    let request = RegisterRequest {
        username,
        password,
        email,
    };
    let value = client.post("/auth/register", &request).await?;
    let response: LoginResponse = serde_json::from_value(value)?;

    client
        .session()
        .sign_in(response.token.clone(), response.user.clone());

    tracing::info!(user_id = response.user.id, "Registration successful");
    Ok(response)
}

/// Logout is client-side only: drop the held and persisted session so the
/// next request goes out without an `Authorization` header.
pub fn logout(client: &ApiClient) {
    client.session().sign_out();
    tracing::info!("Logged out");
}
