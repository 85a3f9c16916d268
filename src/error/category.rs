//! Error category classification.
//!
//! Every failure a submission can end in falls into one of three buckets.
//! The bucket decides the fallback phrase shown to the user when the backend
//! did not supply a message of its own.

use std::fmt;

/// Fallback phrase for transport failures.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error, please check your connection and try again";

/// Fallback phrase for application failures without a server message.
pub const SERVER_FAILURE_MESSAGE: &str = "Assessment failed, please try again later";

/// Fallback phrase for rejected input.
pub const VALIDATION_FAILURE_MESSAGE: &str = "Please check the standard name and try again";

/// High-level categorization of assessment failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input rejected before anything was sent.
    Validation,

    /// The request never produced a usable response (connect, timeout,
    /// non-2xx, undecodable body).
    Network,

    /// The backend answered but reported a failure.
    Server,
}

impl ErrorCategory {
    /// Whether resubmitting the same input could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
        }
    }

    /// The fixed user-facing phrase for this category.
    pub fn generic_message(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => VALIDATION_FAILURE_MESSAGE,
            ErrorCategory::Network => NETWORK_FAILURE_MESSAGE,
            ErrorCategory::Server => SERVER_FAILURE_MESSAGE,
        }
    }

    /// Suggested next step for the user.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Edit the standard name and submit again",
            ErrorCategory::Network => "Check that the assessment service is reachable, then resubmit",
            ErrorCategory::Server => "The service could not assess this standard. Try again later",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
