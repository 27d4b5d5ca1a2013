//! Scoring policy: dedup, quiz revision, and reference data location.

use std::path::PathBuf;

use rcl_core::enums::{DedupPolicy, Revision};
use serde::{Deserialize, Serialize};

/// Participants numbered at or above this took the revised quiz.
const fn default_revision_cutover() -> u32 {
    78
}

const fn default_dedup_policy() -> DedupPolicy {
    DedupPolicy::KeepFirst
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// How repeated `mcq_responses` rows for one article are resolved.
    #[serde(default = "default_dedup_policy")]
    pub dedup_policy: DedupPolicy,

    /// Force a quiz revision for every participant.
    #[serde(default)]
    pub revision: Option<Revision>,

    /// First participant number scored against the revised quiz when the log
    /// does not reveal the question count.
    #[serde(default = "default_revision_cutover")]
    pub revision_cutover: u32,

    /// Directory with `articles.toml`, `quiz_v1.toml`, and `quiz_v2.toml`
    /// replacing the built-in reference data.
    #[serde(default)]
    pub reference_dir: Option<PathBuf>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            dedup_policy: default_dedup_policy(),
            revision: None,
            revision_cutover: default_revision_cutover(),
            reference_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ScoringConfig::default();
        assert_eq!(config.dedup_policy, DedupPolicy::KeepFirst);
        assert_eq!(config.revision, None);
        assert_eq!(config.revision_cutover, 78);
        assert!(config.reference_dir.is_none());
    }
}
