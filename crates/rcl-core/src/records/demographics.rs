use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Self-reported participant background from the `demographics` row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Demographics {
    pub timestamp: String,
    pub full_name: String,
    pub profession: String,
    /// Kept verbatim; participants occasionally type ranges or words.
    pub age: String,
    pub gender: String,
    pub native_language: String,
}
