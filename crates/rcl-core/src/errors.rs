//! Cross-cutting error types for recall.
//!
//! Domain-specific errors (`LogError`, `ReferenceError`, `ConfigError`) are
//! defined in their respective crates. The `rcl` binary converges all of them
//! into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any recall crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
