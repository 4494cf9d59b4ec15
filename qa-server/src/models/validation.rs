//! Validation error types

use std::fmt;

/// Validation error for request bodies and domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not valid JSON (or not a JSON object)
    InvalidJson,

    /// One or more required fields are absent
    MissingFields { fields: Vec<&'static str> },

    /// Field is present but has the wrong JSON type
    WrongType { field: &'static str, expected: &'static str },

    /// Tag id is not a numeric string
    InvalidTagId { value: String },

    /// Counter field is below zero
    Negative { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., slug)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "Invalid JSON format"),
            Self::MissingFields { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Self::WrongType { field, expected } => write!(f, "{} must be {}", field, expected),
            Self::InvalidTagId { value } => write!(f, "Invalid tag ID format: '{}'", value),
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}
