use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// AI trust, dependence, and technology-skill questionnaire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AiTrust {
    pub timestamp: String,
    pub trust: f64,
    pub trust_individual: String,
    pub dependence: f64,
    pub dependence_individual: String,
    pub skill: f64,
    pub skill_individual: String,
    pub reflection: String,
}
