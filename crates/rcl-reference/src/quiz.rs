//! Multiple-choice questions for one quiz revision.

use rcl_core::enums::Revision;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::source_map::SourceTypeMap;

/// Every question has exactly this many options.
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question with its keyed answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    /// Zero-based index of the correct option.
    pub correct: usize,
}

/// One article's questions and source map under a revision.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArticleQuiz {
    pub key: String,
    #[serde(rename = "question")]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub source_map: SourceTypeMap,
}

impl ArticleQuiz {
    /// The keyed answers in question order.
    #[must_use]
    pub fn answer_key(&self) -> Vec<usize> {
        self.questions.iter().map(|q| q.correct).collect()
    }
}

/// Contents of a `quiz_<revision>.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizRevision {
    pub revision: Revision,
    #[serde(rename = "article")]
    pub articles: Vec<ArticleQuiz>,
}

impl QuizRevision {
    #[must_use]
    pub fn article(&self, key: &str) -> Option<&ArticleQuiz> {
        self.articles.iter().find(|quiz| quiz.key == key)
    }
}
