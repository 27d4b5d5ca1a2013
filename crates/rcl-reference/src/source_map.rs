//! Question index to source type, per article and quiz revision.

use rcl_core::enums::SourceType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A `false_lure` question and the option that repeats the planted claim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FalseLure {
    pub question: usize,
    pub lure: usize,
}

/// Source-type assignment for one article's question list.
///
/// Stored as one index list per type, the way it is written in the quiz
/// files. [`crate::ReferenceData::validate`] guarantees that every index
/// appears under exactly one type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SourceTypeMap {
    #[serde(default)]
    pub article: Vec<usize>,
    #[serde(default)]
    pub ai_summary: Vec<usize>,
    #[serde(default)]
    pub false_lure: Vec<FalseLure>,
}

impl SourceTypeMap {
    /// Source type of question `index`, or `None` when the map has no entry.
    #[must_use]
    pub fn source_of(&self, index: usize) -> Option<SourceType> {
        if self.false_lure.iter().any(|entry| entry.question == index) {
            Some(SourceType::FalseLure)
        } else if self.ai_summary.contains(&index) {
            Some(SourceType::AiSummary)
        } else if self.article.contains(&index) {
            Some(SourceType::Article)
        } else {
            None
        }
    }

    /// Lure option for a `false_lure` question.
    #[must_use]
    pub fn lure_option(&self, index: usize) -> Option<usize> {
        self.false_lure
            .iter()
            .find(|entry| entry.question == index)
            .map(|entry| entry.lure)
    }

    /// Question indices assigned to `source`, in file order.
    #[must_use]
    pub fn indices(&self, source: SourceType) -> Vec<usize> {
        match source {
            SourceType::Article => self.article.clone(),
            SourceType::AiSummary => self.ai_summary.clone(),
            SourceType::FalseLure => self.false_lure.iter().map(|entry| entry.question).collect(),
        }
    }

    /// Every `(index, source_type)` pair, duplicates included.
    pub fn entries(&self) -> impl Iterator<Item = (usize, SourceType)> + '_ {
        SourceType::ALL
            .into_iter()
            .flat_map(move |source| self.indices(source).into_iter().map(move |i| (i, source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn crispr_v2() -> SourceTypeMap {
        SourceTypeMap {
            article: vec![8, 10, 11, 12],
            ai_summary: vec![0, 1, 3, 4, 5, 6, 7, 9],
            false_lure: vec![
                FalseLure { question: 2, lure: 1 },
                FalseLure { question: 13, lure: 0 },
            ],
        }
    }

    #[test]
    fn lookups_by_index() {
        let map = crispr_v2();
        assert_eq!(map.source_of(0), Some(SourceType::AiSummary));
        assert_eq!(map.source_of(2), Some(SourceType::FalseLure));
        assert_eq!(map.source_of(11), Some(SourceType::Article));
        assert_eq!(map.source_of(14), None);
        assert_eq!(map.lure_option(13), Some(0));
        assert_eq!(map.lure_option(0), None);
    }

    #[test]
    fn entries_cover_every_list() {
        let map = crispr_v2();
        assert_eq!(map.entries().count(), 14);
        assert_eq!(map.indices(SourceType::FalseLure), vec![2, 13]);
    }
}
