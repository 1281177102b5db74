//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value is not a valid SSN.
    ///
    /// Only the input length is kept so the rejected value never ends up
    /// in logs or error messages.
    InvalidSsn { length: usize },

    /// A denylist entry does not normalize to nine ASCII digits.
    InvalidDenylistEntry(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSsn { length } => {
                write!(f, "Invalid social security number ({} characters)", length)
            }
            Self::InvalidDenylistEntry(entry) => {
                write!(f, "Invalid denylist entry: {}", entry)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
