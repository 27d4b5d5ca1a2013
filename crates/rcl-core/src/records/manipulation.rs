use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// End-of-session manipulation check. Unparseable ratings are `-1`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ManipulationCheck {
    pub timestamp: String,
    pub coherence: i64,
    pub connectivity: i64,
    pub strategy: String,
}
