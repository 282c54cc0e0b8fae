//! Validation errors shared by every pact crate.
//!
//! Malformed input is the only condition raised as an error at the caller
//! boundary. Duplicates and missing records are reported through
//! [`OpResult`](crate::responses::OpResult) instead. Storage and analysis
//! errors wrap this type in their own crates.

use thiserror::Error;

/// Caller-supplied data failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("Missing required field: {field} ({entity})")]
    MissingField {
        entity: &'static str,
        field: String,
    },

    /// A field is present but has the wrong shape.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// A raw criterion score is outside `[0, 10]` or not finite.
    #[error("Score for criterion '{criterion}' is out of range [0, 10]: {score}")]
    ScoreOutOfRange { criterion: String, score: f64 },
}

impl ValidationError {
    /// Build a `MissingField` error.
    #[must_use]
    pub fn missing(entity: &'static str, field: impl Into<String>) -> Self {
        Self::MissingField {
            entity,
            field: field.into(),
        }
    }

    /// Build an `InvalidField` error.
    #[must_use]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
