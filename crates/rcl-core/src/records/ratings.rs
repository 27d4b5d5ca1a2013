use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Timing;

/// Cognitive-load and AI-helpfulness ratings collected after each article.
///
/// Every rating defaults to `-1` when missing or unparseable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PostArticleRating {
    pub timestamp: String,
    pub article_num: i64,
    pub article_key: String,
    pub timing: Option<Timing>,
    pub load_mental_effort: i64,
    pub load_task_difficulty: i64,
    pub ai_help_understanding: i64,
    pub ai_help_memory: i64,
    pub ai_made_task_easier: i64,
    pub ai_satisfaction: i64,
    pub ai_better_than_no_ai: i64,
    pub mcq_overall_confidence: i64,
}
