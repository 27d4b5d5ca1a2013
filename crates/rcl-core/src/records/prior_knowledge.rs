use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prior-knowledge questionnaire scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PriorKnowledge {
    pub timestamp: String,
    pub familiarity_mean: f64,
    /// JSON list of individual familiarity ratings, verbatim.
    pub familiarity_individual: String,
    pub recognition: f64,
    pub recognition_individual: String,
    pub quiz_score: f64,
    pub excluded: bool,
    pub concept_list: String,
}
