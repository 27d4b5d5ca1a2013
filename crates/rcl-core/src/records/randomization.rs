use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RandomizationLayout, Structure, Timing};

/// Condition assignment: summary structure plus per-position timing and article.
///
/// `timing_order[n]` and `article_order[n]` describe the article shown in
/// position `n` (the `article_num` carried by later rows).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Randomization {
    pub timestamp: String,
    pub layout: RandomizationLayout,
    pub structure: Option<Structure>,
    pub timing_order: Vec<String>,
    pub article_order: Vec<String>,
}

impl Randomization {
    /// Timing condition of the article in position `article_num`.
    #[must_use]
    pub fn timing_for(&self, article_num: i64) -> Option<Timing> {
        let index = usize::try_from(article_num).ok()?;
        self.timing_order
            .get(index)
            .and_then(|raw| Timing::from_label(raw))
    }

    /// Article key shown in position `article_num`.
    #[must_use]
    pub fn article_for(&self, article_num: i64) -> Option<&str> {
        let index = usize::try_from(article_num).ok()?;
        self.article_order.get(index).map(String::as_str)
    }
}
