//! Event-log error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing participant logs and the registry.
#[derive(Debug, Error)]
pub enum LogError {
    /// The requested log file does not exist.
    #[error("Log file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader or writer error that is not row-local.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
