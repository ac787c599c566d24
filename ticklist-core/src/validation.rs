//! Validation error types

use std::fmt;

/// Validation error for domain values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "list name",
            max: 64,
        };
        assert_eq!(
            err.to_string(),
            "list name exceeds maximum length of 64 characters"
        );
    }

    #[test]
    fn empty_display() {
        let err = ValidationError::Empty { field: "item" };
        assert_eq!(err.to_string(), "item cannot be empty");
    }
}
