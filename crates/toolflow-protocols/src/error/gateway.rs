//! Model gateway errors.

use thiserror::Error;

/// Errors raised by model gateways.
///
/// Every variant is fatal to the current turn; the conversation is left
/// intact so the turn can be retried. `Protocol` means the response
/// could not be normalized; everything else is the model-unavailable
/// class (transport, auth, limits).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Model backend unavailable: {0}")]
    Unavailable(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: retry after {retry_after_seconds} seconds")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed model response: {0}")]
    Protocol(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}

/// Fallback wait when a 429 response carries no Retry-After header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

impl GatewayError {
    /// Classify a non-2xx API response by status code. `retry_after` is
    /// the parsed Retry-After header value, when the vendor sent one.
    pub fn from_api_response(status: u16, message: String, retry_after: Option<u64>) -> Self {
        match status {
            401 | 403 => GatewayError::AuthenticationFailed(message),
            429 => GatewayError::RateLimited {
                retry_after_seconds: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
            },
            _ => GatewayError::Api { status, message },
        }
    }
}
