//! Error types for quality-client
//!
//! All error types use thiserror for clean error handling.
//! SECURITY: Error messages MUST NOT contain passwords or credential material.

/// Top-level error for calls made through the gateway
///
/// Every failure the backend can produce maps onto one of these variants;
/// callers can match on them for call-site-specific messaging without
/// re-deriving anything from raw status codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 while a credential was stored; the recovery flow has already run
    #[error("Session expired")]
    AuthExpired,

    /// 401 without a stored credential (e.g. a failed login attempt)
    #[error("Authentication rejected")]
    AuthRejected,

    /// 400 with the message extracted from the response body when present
    #[error("Bad request: {0}")]
    Validation(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Server error")]
    ServerFault,

    /// Any status without a dedicated mapping
    #[error("Unexpected status {status}")]
    Unclassified { status: u16, message: Option<String> },

    /// No response received at all
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered but the body was not what we expected
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The user-facing notification for this error, if the gateway should emit one
    ///
    /// 401s return `None`: the recovery flow owns the "session expired"
    /// notification and a rejected login is surfaced by the login form itself.
    /// Decode failures return `None` as well since the call site decides how to
    /// present them.
    pub fn notification(&self) -> Option<(&'static str, String)> {
        match self {
            ApiError::AuthExpired | ApiError::AuthRejected | ApiError::Decode(_) => None,
            ApiError::Validation(message) => Some(("Bad Request", message.clone())),
            ApiError::Forbidden => Some((
                "Forbidden",
                "You do not have permission to perform this action.".to_string(),
            )),
            ApiError::NotFound => Some((
                "Not Found",
                "The requested resource was not found.".to_string(),
            )),
            ApiError::ServerFault => Some((
                "Server Error",
                "A server error occurred. Please try again later.".to_string(),
            )),
            ApiError::Unclassified { message, .. } => Some((
                "Error",
                message.clone().unwrap_or_else(|| {
                    "An unexpected error occurred. Please try again later.".to_string()
                }),
            )),
            ApiError::Network(_) => Some((
                "Network Error",
                "Unable to connect to the server. Please check your internet connection."
                    .to_string(),
            )),
        }
    }
}

/// Errors from the transport layer (no HTTP response was produced)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Errors from client-side password validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordValidationError {
    #[error("New password and confirmation do not match")]
    ConfirmationMismatch,

    #[error("Password must be at least 8 characters long and contain only letters, digits, or special characters")]
    InvalidFormat,
}
