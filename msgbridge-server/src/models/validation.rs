//! Validation error types

use std::fmt;

/// Validation error for operation inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or whitespace-only
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    /// Numeric identifier is zero or negative
    NotPositive { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, actual, max } => {
                write!(f, "{} too long ({} chars, max {})", field, actual, max)
            }
            Self::NotPositive { field } => {
                write!(f, "{} must be a positive integer", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
