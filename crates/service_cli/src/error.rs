//! Error types for the CLI layer.

use stakes_core::types::ModelError;
use thiserror::Error;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument failed to parse or is unsupported.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The model rejected the inputs.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// JSON output serialisation failed.
    #[error("Serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}
