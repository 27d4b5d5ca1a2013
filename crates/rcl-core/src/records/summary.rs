use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Time spent on the AI summary page for one article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SummaryViewing {
    pub timestamp: String,
    pub article_num: i64,
    pub article_key: String,
    pub mode: String,
    pub structure: String,
    pub time_spent_ms: i64,
    pub time_spent_seconds: f64,
}
