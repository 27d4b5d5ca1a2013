//! Reference data error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationIssue;

/// Errors from loading or validating reference data.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// A TOML file could not be deserialized.
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    /// The data loaded but breaks one or more consistency rules.
    #[error("Invalid reference data ({} issue(s)): {}", .issues.len(), join_issues(.issues))]
    Invalid { issues: Vec<ValidationIssue> },

    /// A reference file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
