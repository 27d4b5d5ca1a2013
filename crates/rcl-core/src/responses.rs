//! CLI response types returned as JSON by `rcl` commands.
//!
//! These structs define the shape of JSON output for `rcl analyze`,
//! `rcl dataset`, `rcl participant`, `rcl log append`, and `rcl key search`.
//! `rcl metrics` returns [`crate::scores::MetricsReport`].

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DedupPolicy, Phase, Revision, Structure, Timing};
use crate::ids::ParticipantId;
use crate::records::{
    Demographics, PostArticleRating, PriorKnowledge, Randomization,
};
use crate::scores::{ArticleScore, MetricsReport};

// ---------------------------------------------------------------------------
// rcl analyze
// ---------------------------------------------------------------------------

/// Response from `rcl analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ParticipantReport {
    pub participant: Option<ParticipantId>,
    pub demographics: Option<Demographics>,
    pub prior_knowledge: Option<PriorKnowledge>,
    pub ai_trust: Option<TrustSummary>,
    pub randomization: Option<Randomization>,
    pub articles: Vec<ArticleReport>,
    pub manipulation_check: Option<ManipulationSummary>,
    pub metrics: MetricsReport,
}

/// AI trust questionnaire with categorical levels. A level is `None` when
/// its score is missing (below 1).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrustSummary {
    pub trust: f64,
    pub trust_level: Option<String>,
    pub dependence: f64,
    pub dependence_level: Option<String>,
    pub skill: f64,
    pub reflection: String,
}

/// Everything recorded for the article in one position.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ArticleReport {
    pub article_num: i64,
    pub article_key: String,
    pub title: Option<String>,
    pub timing: Option<Timing>,
    pub reading_time_ms: Option<i64>,
    pub scroll_depth: Option<i64>,
    /// Summed `summary_overlay_closed` durations (synchronous timing).
    pub overlay_time_ms: i64,
    pub overlays_opened: u32,
    pub visibility_changes: u32,
    pub summary_time_seconds: Option<f64>,
    pub recall: Option<RecallSummary>,
    pub ratings: Option<PostArticleRating>,
    pub mcq: Option<ArticleScore>,
}

/// Free-recall statistics with categorical levels.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecallSummary {
    pub word_count: i64,
    pub sentence_count: i64,
    pub char_count: i64,
    pub confidence: i64,
    pub confidence_level: Option<String>,
    pub difficulty: i64,
    pub difficulty_level: Option<String>,
    pub time_spent_ms: i64,
    pub paste_attempts: i64,
    pub over_limit: bool,
}

/// Manipulation check with categorical levels.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ManipulationSummary {
    pub coherence: i64,
    pub coherence_level: Option<String>,
    pub connectivity: i64,
    pub connectivity_level: Option<String>,
    pub strategy: String,
}

// ---------------------------------------------------------------------------
// rcl dataset
// ---------------------------------------------------------------------------

/// One participant x article row of the long-format analysis dataset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DatasetRow {
    pub participant_id: ParticipantId,
    pub structure: Option<Structure>,
    pub article_num: i64,
    pub article_key: String,
    pub timing: Timing,
    pub reading_time_min: Option<f64>,
    pub summary_time_sec: Option<f64>,
    pub summary_reading_pct: Option<f64>,
    pub mental_effort: Option<i64>,
    pub ai_trust: Option<f64>,
    pub ai_dependence: Option<f64>,
    pub mcq_total_questions: Option<u32>,
    pub mcq_total_correct: Option<u32>,
    pub mcq_overall_accuracy: Option<f64>,
    pub mcq_ai_summary_accuracy: Option<f64>,
    pub mcq_article_accuracy: Option<f64>,
    pub mcq_false_lure_accuracy: Option<f64>,
    pub false_lures_selected: Option<u32>,
    pub revision: Revision,
    pub dedup_policy: DedupPolicy,
}

/// Response from `rcl dataset` when rows are written to a file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DatasetExportResponse {
    pub path: String,
    pub participants: u32,
    pub rows: u32,
    pub failed: Vec<String>,
}

// ---------------------------------------------------------------------------
// rcl participant / rcl log
// ---------------------------------------------------------------------------

/// A row of the participant registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub participant_id: ParticipantId,
    pub timestamp: String,
    pub name: String,
}

/// Response from `rcl participant new`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParticipantAllocation {
    pub participant: ParticipantEntry,
    pub log_file: String,
    pub registered: u32,
}

/// Response from `rcl log append`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LogAppendResponse {
    pub participant: ParticipantId,
    /// Raw phase label; `Some` in `phase` when it has a decoded layout.
    pub phase_label: String,
    pub phase: Option<Phase>,
    pub path: String,
    pub created: bool,
    pub fields: u32,
}

// ---------------------------------------------------------------------------
// rcl key search
// ---------------------------------------------------------------------------

/// Response from `rcl key search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KeySearchReport {
    pub revision: Revision,
    pub initial_discrepancy: u32,
    pub final_discrepancy: u32,
    pub iterations: u32,
    pub changes: Vec<KeyChange>,
    pub keys: BTreeMap<String, Vec<usize>>,
    pub participants: Vec<KeySearchParticipant>,
}

/// A single answer-key edit applied by the search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KeyChange {
    pub article_key: String,
    pub question: usize,
    pub from: usize,
    pub to: usize,
    pub discrepancy_after: u32,
}

/// Target versus computed totals for one participant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KeySearchParticipant {
    pub participant: ParticipantId,
    pub target: u32,
    pub initial_score: u32,
    pub final_score: u32,
}
