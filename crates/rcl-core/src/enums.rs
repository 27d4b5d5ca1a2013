//! Phases, experimental conditions, source types, and scoring policies.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Enums that appear as raw cells in the event log also provide `from_label()`,
//! which accepts the spelling the experiment platform writes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The `phase` discriminator of an event-log row.
///
/// Only phases with a decoded layout are listed. Rows with any other phase
/// (`consent`, `instructions`, `summary_locked`, ...) are counted as ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Demographics,
    PriorKnowledge,
    AiTrust,
    Randomization,
    ReadingBehavior,
    SummaryViewing,
    RecallResponse,
    McqResponses,
    PostArticleRatings,
    ManipulationCheck,
}

impl Phase {
    pub const ALL: [Self; 10] = [
        Self::Demographics,
        Self::PriorKnowledge,
        Self::AiTrust,
        Self::Randomization,
        Self::ReadingBehavior,
        Self::SummaryViewing,
        Self::RecallResponse,
        Self::McqResponses,
        Self::PostArticleRatings,
        Self::ManipulationCheck,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Demographics => "demographics",
            Self::PriorKnowledge => "prior_knowledge",
            Self::AiTrust => "ai_trust",
            Self::Randomization => "randomization",
            Self::ReadingBehavior => "reading_behavior",
            Self::SummaryViewing => "summary_viewing",
            Self::RecallResponse => "recall_response",
            Self::McqResponses => "mcq_responses",
            Self::PostArticleRatings => "post_article_ratings",
            Self::ManipulationCheck => "manipulation_check",
        }
    }

    /// Match the raw `phase` cell of a log row.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|phase| phase.as_str() == label)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// When the AI summary was shown relative to reading the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    PreReading,
    Synchronous,
    PostReading,
}

impl Timing {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreReading => "pre_reading",
            Self::Synchronous => "synchronous",
            Self::PostReading => "post_reading",
        }
    }

    /// Parse a logged timing cell. Case and surrounding whitespace are ignored.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "pre_reading" => Some(Self::PreReading),
            "synchronous" => Some(Self::Synchronous),
            "post_reading" => Some(Self::PostReading),
            _ => None,
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

/// Presentation of the AI summary: paragraph form or bullet points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Integrated,
    Segmented,
}

impl Structure {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integrated => "integrated",
            Self::Segmented => "segmented",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "integrated" => Some(Self::Integrated),
            "segmented" => Some(Self::Segmented),
            _ => None,
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceType
// ---------------------------------------------------------------------------

/// Which content a multiple-choice question probes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Answerable only from the article body.
    Article,
    /// Answerable from the AI summary.
    AiSummary,
    /// Probes a plausible but fabricated claim planted in the summary.
    FalseLure,
}

impl SourceType {
    pub const ALL: [Self; 3] = [Self::Article, Self::AiSummary, Self::FalseLure];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::AiSummary => "ai_summary",
            Self::FalseLure => "false_lure",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DedupPolicy
// ---------------------------------------------------------------------------

/// How repeated `mcq_responses` rows for the same article are resolved.
///
/// There is no implicit default at this layer: callers pass a policy and it is
/// echoed in every derived output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    KeepFirst,
    KeepLast,
}

impl DedupPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepFirst => "keep_first",
            Self::KeepLast => "keep_last",
        }
    }
}

impl fmt::Display for DedupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Revision
// ---------------------------------------------------------------------------

/// Quiz revision a participant was tested under.
///
/// ```text
/// v1: 15 questions per article (original quiz)
/// v2: 14 questions per article, 2 false lures each (revised quiz)
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Revision {
    V1,
    V2,
}

impl Revision {
    pub const ALL: [Self; 2] = [Self::V1, Self::V2];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    /// Number of questions per article in this revision.
    #[must_use]
    pub const fn question_count(self) -> usize {
        match self {
            Self::V1 => 15,
            Self::V2 => 14,
        }
    }

    /// The revision whose quiz has exactly `count` questions.
    #[must_use]
    pub fn from_question_count(count: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|revision| revision.question_count() == count)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RevisionSource
// ---------------------------------------------------------------------------

/// Which rule selected the quiz revision for a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RevisionSource {
    /// Explicit CLI flag or configuration value.
    Override,
    /// Question count recorded in the `mcq_responses` rows.
    QuestionCount,
    /// Participant number compared against the configured cutover.
    ParticipantCutover,
    /// Nothing else applied.
    Fallback,
}

impl RevisionSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::QuestionCount => "question_count",
            Self::ParticipantCutover => "participant_cutover",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for RevisionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RandomizationLayout
// ---------------------------------------------------------------------------

/// Column layout of a `randomization` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RandomizationLayout {
    /// `structure, timing_order, article_order` at fields 2..=4.
    Original,
    /// Counterbalanced design: timing order at 4, article order at 9.
    Counterbalanced,
}

impl RandomizationLayout {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Counterbalanced => "counterbalanced",
        }
    }
}

impl fmt::Display for RandomizationLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
