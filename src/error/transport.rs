//! Transport-level error types.
//!
//! Anything that keeps a request from producing a usable response ends up
//! here: connection problems, the 120 second deadline, non-2xx statuses and
//! bodies that do not decode.

use std::fmt;

use crate::traits::HttpError;

/// Transport-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The request could not be delivered or the connection broke.
    NetworkFailure { url: String, message: String },

    /// No response within the deadline.
    Timeout { operation: String, duration_secs: u64 },

    /// The server answered with a non-2xx status.
    NonSuccessHttpStatus { status: u16, message: String },

    /// The body was not the JSON we expected.
    InvalidResponse { message: String },
}

impl TransportError {
    /// Get a user-friendly error message.
    ///
    /// All transport failures share the same phrase on screen; the details
    /// only go to the log.
    pub fn user_message(&self) -> String {
        super::category::NETWORK_FAILURE_MESSAGE.to_string()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::NetworkFailure { .. } => "E_NET_CONN",
            TransportError::Timeout { .. } => "E_NET_TIMEOUT",
            TransportError::NonSuccessHttpStatus { .. } => "E_NET_HTTP",
            TransportError::InvalidResponse { .. } => "E_NET_INVALID",
        }
    }

    /// Whether this is the deadline case.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }

    /// Map an adapter error onto the transport taxonomy.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::Timeout(message) => {
                tracing::debug!("adapter reported timeout for {}: {}", url, message);
                TransportError::Timeout {
                    operation: format!("request to {}", url),
                    duration_secs: crate::config::REQUEST_TIMEOUT.as_secs(),
                }
            }
            other => TransportError::NetworkFailure {
                url: url.to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NetworkFailure { url, message } => {
                write!(f, "Request to '{}' failed: {}", url, message)
            }
            TransportError::Timeout {
                operation,
                duration_secs,
            } => {
                write!(f, "{} timed out after {} seconds", operation, duration_secs)
            }
            TransportError::NonSuccessHttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            TransportError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
        }
    }
}

impl std::error::Error for TransportError {}
