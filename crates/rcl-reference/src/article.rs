use rcl_core::enums::Structure;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An article participants read, with both AI summary variants.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Article {
    pub key: String,
    pub title: String,
    pub free_recall_prompt: String,
    pub text: String,
    pub summary_integrated: String,
    pub summary_segmented: String,
}

impl Article {
    /// The summary shown under `structure`.
    #[must_use]
    pub fn summary(&self, structure: Structure) -> &str {
        match structure {
            Structure::Integrated => &self.summary_integrated,
            Structure::Segmented => &self.summary_segmented,
        }
    }

    /// Whitespace-separated word count of the body text.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
