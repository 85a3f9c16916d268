//! Unified error type for an assessment submission.

use std::fmt;

use super::application::ApplicationError;
use super::category::ErrorCategory;
use super::transport::TransportError;
use super::validation::ValidationError;

/// Everything a submission can fail with.
///
/// `user_message()` is what ends up in `SubmissionView::Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessError {
    /// Rejected locally, never sent.
    Validation(ValidationError),

    /// No usable response.
    Transport(TransportError),

    /// The backend reported a failure.
    Application(ApplicationError),
}

impl AssessError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AssessError::Validation(_) => ErrorCategory::Validation,
            AssessError::Transport(_) => ErrorCategory::Network,
            AssessError::Application(_) => ErrorCategory::Server,
        }
    }

    /// Check if resubmitting could help.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AssessError::Validation(err) => err.user_message(),
            AssessError::Transport(err) => err.user_message(),
            AssessError::Application(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AssessError::Validation(err) => err.error_code(),
            AssessError::Transport(err) => err.error_code(),
            AssessError::Application(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for AssessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessError::Validation(err) => write!(f, "{}", err),
            AssessError::Transport(err) => write!(f, "{}", err),
            AssessError::Application(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AssessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssessError::Validation(err) => Some(err),
            AssessError::Transport(err) => Some(err),
            AssessError::Application(err) => Some(err),
        }
    }
}

impl From<ValidationError> for AssessError {
    fn from(err: ValidationError) -> Self {
        AssessError::Validation(err)
    }
}

impl From<TransportError> for AssessError {
    fn from(err: TransportError) -> Self {
        AssessError::Transport(err)
    }
}

impl From<ApplicationError> for AssessError {
    fn from(err: ApplicationError) -> Self {
        AssessError::Application(err)
    }
}

impl From<serde_json::Error> for AssessError {
    fn from(err: serde_json::Error) -> Self {
        AssessError::Transport(TransportError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
