//! Configuration error types.

use thiserror::Error;

/// Errors from loading or validating [`RecallConfig`](crate::RecallConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `RECALL_*` variable failed to merge or deserialize.
    #[error("Failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section is missing a value that has no usable default.
    #[error(
        "Configuration section '{section}' is missing a required value (set it in .recall/config.toml or RECALL_{}__*)",
        .section.to_uppercase()
    )]
    NotConfigured { section: String },

    /// A value parsed but is outside its allowed range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
