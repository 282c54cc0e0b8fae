//! Store error types for pact-store.

use std::path::PathBuf;

use pact_core::ValidationError;
use thiserror::Error;

/// Errors from record store operations.
///
/// Duplicates and failed lookups are not errors; they are returned as
/// error-status `OpResult`s. Everything here is fatal to the call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The submitted record is malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading or writing a file in the data directory failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted document exists but cannot be parsed.
    #[error("Corrupt document {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The cross-process write lock could not be acquired.
    #[error("Write lock unavailable: {0}")]
    Lock(String),

    /// A record could not be encoded as JSON.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The store configuration is invalid.
    #[error(transparent)]
    Config(#[from] pact_config::ConfigError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
