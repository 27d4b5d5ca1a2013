use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Timing;

/// Multiple-choice answers submitted for one article.
///
/// `answers` maps question index to the selected option. A question with no
/// entry was left unanswered. The `logged_*` fields echo what the platform
/// computed at submission time; scoring never reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct McqResponse {
    pub timestamp: String,
    pub article_num: i64,
    pub article_key: String,
    pub timing: Option<Timing>,
    pub answers: BTreeMap<usize, usize>,
    pub total_time_ms: i64,
    pub logged_correct_count: Option<u32>,
    pub logged_total_questions: Option<u32>,
    pub logged_accuracy_rate: Option<f64>,
    pub logged_question_accuracy: BTreeMap<usize, LoggedQuestionOutcome>,
}

impl McqResponse {
    /// Option chosen for question `index`, if answered.
    #[must_use]
    pub fn selected(&self, index: usize) -> Option<usize> {
        self.answers.get(&index).copied()
    }

    /// Highest answered question index plus one.
    #[must_use]
    pub fn answered_span(&self) -> usize {
        self.answers.keys().next_back().map_or(0, |last| last + 1)
    }
}

/// One entry of the platform's per-question accuracy blob.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoggedQuestionOutcome {
    pub participant_answer: Option<usize>,
    pub correct_answer: Option<usize>,
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_reads_answer_map() {
        let response = McqResponse {
            answers: BTreeMap::from([(0, 2), (3, 1)]),
            ..McqResponse::default()
        };
        assert_eq!(response.selected(0), Some(2));
        assert_eq!(response.selected(1), None);
        assert_eq!(response.answered_span(), 4);
    }

    #[test]
    fn empty_answers_have_zero_span() {
        assert_eq!(McqResponse::default().answered_span(), 0);
    }
}
