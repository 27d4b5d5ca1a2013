//! Derived multiple-choice scores.
//!
//! These are always recomputed from responses and reference data; nothing here
//! is ever read back as a source of truth.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DedupPolicy, Revision, RevisionSource, SourceType, Timing};
use crate::ids::ParticipantId;
use crate::records::DroppedDuplicate;

/// A (correct, total) tally with its accuracy percentage.
///
/// `accuracy` is `None` when `total == 0` so that an empty bucket never reads
/// as 0%.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BucketScore {
    pub correct: u32,
    pub total: u32,
    pub accuracy: Option<f64>,
}

impl BucketScore {
    #[must_use]
    pub fn from_counts(correct: u32, total: u32) -> Self {
        let accuracy = (total > 0).then(|| f64::from(correct) / f64::from(total) * 100.0);
        Self {
            correct,
            total,
            accuracy,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::from_counts(0, 0)
    }

    /// Sum of two tallies, with accuracy recomputed.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self::from_counts(self.correct + other.correct, self.total + other.total)
    }
}

/// Per-source-type buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SourceBuckets {
    pub article: BucketScore,
    pub ai_summary: BucketScore,
    pub false_lure: BucketScore,
}

impl SourceBuckets {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            article: BucketScore::empty(),
            ai_summary: BucketScore::empty(),
            false_lure: BucketScore::empty(),
        }
    }

    #[must_use]
    pub const fn get(&self, source: SourceType) -> BucketScore {
        match source {
            SourceType::Article => self.article,
            SourceType::AiSummary => self.ai_summary,
            SourceType::FalseLure => self.false_lure,
        }
    }

    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            article: self.article.combine(other.article),
            ai_summary: self.ai_summary.combine(other.ai_summary),
            false_lure: self.false_lure.combine(other.false_lure),
        }
    }

    /// Sum of bucket totals. Equals the overall total when every question has
    /// a source type.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.article.total + self.ai_summary.total + self.false_lure.total
    }
}

/// How a single question was scored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub index: usize,
    pub source_type: Option<SourceType>,
    pub selected: Option<usize>,
    pub correct_option: usize,
    pub is_correct: bool,
    pub lure_option: Option<usize>,
    pub selected_lure: bool,
}

/// Scores for one article's question list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Scorecard {
    pub overall: BucketScore,
    pub by_source: SourceBuckets,
    pub false_lures_selected: u32,
    /// Questions with no response. Included in every `total`.
    pub unanswered: u32,
    /// Questions without a source type. Included in `overall` only.
    pub unknown_type: u32,
    /// Responses for question indices the article does not have.
    pub out_of_range: u32,
    pub questions: Vec<QuestionOutcome>,
}

/// A scored `mcq_responses` row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ArticleScore {
    pub article_num: i64,
    pub article_key: String,
    pub timing: Option<Timing>,
    pub scores: Scorecard,
}

/// An `mcq_responses` row whose article could not be matched to reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UnscoredArticle {
    pub article_num: i64,
    pub article_key: String,
    pub responses: usize,
}

/// Participant-level totals across every scored article.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoreTotals {
    pub overall: BucketScore,
    pub by_source: SourceBuckets,
    pub false_lures_selected: u32,
    pub unanswered: u32,
}

/// Output of `rcl metrics`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MetricsReport {
    pub participant: Option<ParticipantId>,
    pub revision: Revision,
    pub revision_source: RevisionSource,
    pub dedup_policy: DedupPolicy,
    pub dropped_duplicates: Vec<DroppedDuplicate>,
    pub json_warnings: u32,
    pub articles: Vec<ArticleScore>,
    pub totals: ScoreTotals,
    pub unscored: Vec<UnscoredArticle>,
}

impl MetricsReport {
    /// Number of questions processed across all scored articles.
    #[must_use]
    pub const fn questions_processed(&self) -> u32 {
        self.totals.overall.total
    }

    /// Score for the article with key `article_key`, if it was scored.
    #[must_use]
    pub fn article(&self, article_key: &str) -> Option<&ArticleScore> {
        self.articles
            .iter()
            .find(|score| score.article_key == article_key)
    }
}
