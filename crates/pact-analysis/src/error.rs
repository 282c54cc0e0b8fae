//! Analysis error types for pact-analysis.

use pact_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input scores or records are malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The analyzer was constructed with an invalid configuration.
    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(#[from] pact_config::ConfigError),
}
