use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    AiTrust, Demographics, ManipulationCheck, McqResponse, PostArticleRating, PriorKnowledge,
    Randomization, ReadingEvent, RecallResponse, SummaryViewing,
};
use crate::enums::DedupPolicy;
use crate::ids::ParticipantId;

/// Everything decoded from one participant's event log.
///
/// Single-occurrence phases keep the latest row. `mcq` has already been
/// deduplicated under `diagnostics.dedup_policy`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ParticipantLog {
    pub participant: Option<ParticipantId>,
    pub demographics: Option<Demographics>,
    pub prior_knowledge: Option<PriorKnowledge>,
    pub ai_trust: Option<AiTrust>,
    pub randomization: Option<Randomization>,
    pub reading: Vec<ReadingEvent>,
    pub summary_viewing: Vec<SummaryViewing>,
    pub recall: Vec<RecallResponse>,
    pub mcq: Vec<McqResponse>,
    pub ratings: Vec<PostArticleRating>,
    pub manipulation_check: Option<ManipulationCheck>,
    pub diagnostics: ParseDiagnostics,
}

impl ParticipantLog {
    /// An aggregate with no records, as produced by a header-only file.
    #[must_use]
    pub fn empty(participant: Option<ParticipantId>, dedup_policy: DedupPolicy) -> Self {
        Self {
            participant,
            demographics: None,
            prior_knowledge: None,
            ai_trust: None,
            randomization: None,
            reading: Vec::new(),
            summary_viewing: Vec::new(),
            recall: Vec::new(),
            mcq: Vec::new(),
            ratings: Vec::new(),
            manipulation_check: None,
            diagnostics: ParseDiagnostics::new(dedup_policy),
        }
    }

    /// True when no row produced a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.demographics.is_none()
            && self.prior_knowledge.is_none()
            && self.ai_trust.is_none()
            && self.randomization.is_none()
            && self.reading.is_empty()
            && self.summary_viewing.is_empty()
            && self.recall.is_empty()
            && self.mcq.is_empty()
            && self.ratings.is_empty()
            && self.manipulation_check.is_none()
    }
}

/// Data-quality counters gathered while parsing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParseDiagnostics {
    pub dedup_policy: DedupPolicy,
    /// Data rows read, header excluded.
    pub rows_read: u32,
    /// Rows that were unreadable or too short for their layout.
    pub rows_skipped: u32,
    /// Rows for phases or reading events without a layout.
    pub rows_ignored: u32,
    /// JSON cells that failed to parse and were treated as empty.
    pub json_warnings: u32,
    pub dropped_duplicates: Vec<DroppedDuplicate>,
}

impl ParseDiagnostics {
    #[must_use]
    pub const fn new(dedup_policy: DedupPolicy) -> Self {
        Self {
            dedup_policy,
            rows_read: 0,
            rows_skipped: 0,
            rows_ignored: 0,
            json_warnings: 0,
            dropped_duplicates: Vec::new(),
        }
    }
}

/// A repeated `mcq_responses` row discarded by the dedup policy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DroppedDuplicate {
    pub article_key: String,
    pub kept_timestamp: String,
    pub dropped_timestamp: String,
}
