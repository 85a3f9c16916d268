//! Input validation errors.

use std::fmt;

/// Why a submitted title was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing left after trimming.
    EmptyInput,

    /// Trimmed title is shorter than the minimum or longer than the maximum.
    LengthOutOfRange {
        /// Trimmed length in characters.
        len: usize,
        min: usize,
        max: usize,
    },
}

impl ValidationError {
    /// User-facing message.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptyInput => "Please enter a standard name".to_string(),
            ValidationError::LengthOutOfRange { min, max, .. } => {
                format!("Standard name must be between {} and {} characters", min, max)
            }
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "E_VAL_EMPTY",
            ValidationError::LengthOutOfRange { .. } => "E_VAL_LENGTH",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInput => write!(f, "title is empty"),
            ValidationError::LengthOutOfRange { len, min, max } => {
                write!(f, "title length {} is outside {}..={}", len, min, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
