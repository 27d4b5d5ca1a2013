use rcl_core::errors::CoreError;

/// Errors from scoring and dataset export.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("no answer key for article '{key}'")]
    UnknownArticle { key: String },

    #[error("invalid target on line {line}: {reason}")]
    InvalidTarget { line: u64, reason: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
