//! # Common Error Types
//!
//! Consolidated error handling for the console client.
//!
//! Every API call resolves to `Result<T, ApiError>`. Errors are categorized
//! by where they arise:
//!
//! - **Network**: the transport could not complete the request at all
//! - **Auth**: the backend rejected the session token (HTTP 401); the client
//!   has already torn the session down by the time this surfaces
//! - **Backend**: a non-2xx response with a structured `error`/`message` body
//! - **Validation**: caller-side input rejected before any request was sent
//!
//! The client performs no retries and no silent suppression: apart from the
//! session teardown on `Auth`, every failure propagates to the calling view,
//! which owns user-visible display.

use thiserror::Error;

/// Error type covering every failure an API call can surface.
///
/// # Example
///
/// ```rust
/// use console::core::error::ApiError;
///
/// let err = ApiError::Validation("Amount must be positive".to_string());
/// assert_eq!(err.to_string(), "Validation error: Amount must be positive");
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, DNS, TLS.
    #[error("Network error: {0}")]
    Network(String),

    /// Authentication failure (HTTP 401). The session has been cleared and a
    /// [`SessionEvent::SessionExpired`](crate::session::SessionEvent) emitted
    /// before this error is returned.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Non-2xx response from the backend carrying an error description.
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Caller-side input rejected before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// Whether this failure invalidated the session.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

// Decoding only happens on successful responses, so a serde failure means the
// backend broke the wire contract.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Backend {
            status: 200,
            message: format!("Failed to parse response: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ApiError::Backend {
            status: 400,
            message: "Insufficient balance".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error (400): Insufficient balance");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_is_auth() {
        assert!(ApiError::Auth("Invalid token".to_string()).is_auth());
        assert!(!ApiError::Validation("empty address".to_string()).is_auth());
    }
}
