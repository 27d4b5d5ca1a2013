use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Timing;

/// Free-recall answer and its typing statistics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecallResponse {
    pub timestamp: String,
    pub article_num: i64,
    pub article_key: String,
    pub timing: Option<Timing>,
    pub recall_text: String,
    pub sentence_count: i64,
    pub word_count: i64,
    pub char_count: i64,
    pub confidence: i64,
    pub difficulty: i64,
    pub time_spent_ms: i64,
    pub paste_attempts: i64,
    pub over_limit: bool,
}
