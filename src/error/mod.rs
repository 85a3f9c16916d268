//! Error handling for assessment submissions.
//!
//! Failures are grouped the way the user sees them:
//!
//! | Category | Source | Retryable |
//! |----------|--------|-----------|
//! | Validation | Title rejected locally | No |
//! | Network | Connect failure, timeout, non-2xx, bad body | Yes |
//! | Server | Backend reported a failure | Yes |
//!
//! `AssessError::user_message()` prefers a server-supplied message and falls
//! back to one fixed phrase per category.

mod application;
mod assess_error;
mod category;
mod transport;
mod validation;

pub use application::ApplicationError;
pub use assess_error::AssessError;
pub use category::{
    ErrorCategory, NETWORK_FAILURE_MESSAGE, SERVER_FAILURE_MESSAGE, VALIDATION_FAILURE_MESSAGE,
};
pub use transport::TransportError;
pub use validation::ValidationError;

/// Result alias for assessment operations.
pub type AssessResult<T> = Result<T, AssessError>;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Every variant funnels into the unified type with a code and a message.
    #[test]
    fn test_error_unification() {
        let errors: Vec<AssessError> = vec![
            ValidationError::EmptyInput.into(),
            ValidationError::LengthOutOfRange {
                len: 300,
                min: 2,
                max: 200,
            }
            .into(),
            TransportError::Timeout {
                operation: "assess".to_string(),
                duration_secs: 120,
            }
            .into(),
            TransportError::NetworkFailure {
                url: "http://localhost".to_string(),
                message: "refused".to_string(),
            }
            .into(),
            ApplicationError::reported(Some(1), None).into(),
        ];

        for err in &errors {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_result_alias() {
        fn might_fail() -> AssessResult<u8> {
            Err(ValidationError::EmptyInput.into())
        }
        assert!(might_fail().is_err());
    }
}
