//! Application-level errors: the backend answered, but said no.

use std::fmt;

/// Failures reported inside a well-formed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The envelope carried a failure code or the result a failure status.
    /// `message` is whatever the server supplied, if anything.
    ServerReportedFailure {
        code: Option<i32>,
        message: Option<String>,
    },
}

impl ApplicationError {
    /// Build from the server-supplied message, treating blank text as absent.
    pub fn reported(code: Option<i32>, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        ApplicationError::ServerReportedFailure { code, message }
    }

    /// Prefer the server message, fall back to the fixed phrase.
    pub fn user_message(&self) -> String {
        match self {
            ApplicationError::ServerReportedFailure { message, .. } => message
                .clone()
                .unwrap_or_else(|| super::category::SERVER_FAILURE_MESSAGE.to_string()),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        "E_APP_FAILED"
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationError::ServerReportedFailure { code, message } => {
                write!(f, "Server reported failure")?;
                if let Some(code) = code {
                    write!(f, " (code {})", code)?;
                }
                if let Some(message) = message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ApplicationError {}
