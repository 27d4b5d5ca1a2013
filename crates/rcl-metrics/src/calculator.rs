//! Per-article multiple-choice scoring.

use std::collections::BTreeMap;

use rcl_core::enums::SourceType;
use rcl_core::scores::{BucketScore, QuestionOutcome, Scorecard, SourceBuckets};
use rcl_reference::{Question, SourceTypeMap};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    correct: u32,
    total: u32,
}

impl Tally {
    fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    fn bucket(self) -> BucketScore {
        BucketScore::from_counts(self.correct, self.total)
    }
}

/// Score one article's responses against its question list.
///
/// `answers` maps question index to the selected option. Every question in
/// `questions` counts toward the totals whether or not it was answered.
/// Without a `source_map`, or for indices the map does not cover, questions
/// count toward `overall` only. Responses beyond the question list are
/// ignored and counted in `out_of_range`.
#[must_use]
pub fn score_article(
    answers: &BTreeMap<usize, usize>,
    questions: &[Question],
    source_map: Option<&SourceTypeMap>,
) -> Scorecard {
    let mut overall = Tally::default();
    let mut buckets = [Tally::default(); 3];
    let mut false_lures_selected = 0;
    let mut unanswered = 0;
    let mut unknown_type = 0;
    let mut outcomes = Vec::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        let selected = answers.get(&index).copied();
        let is_correct = selected == Some(question.correct);
        let source_type = source_map.and_then(|map| map.source_of(index));
        let lure_option = match source_type {
            Some(SourceType::FalseLure) => source_map.and_then(|map| map.lure_option(index)),
            _ => None,
        };
        let selected_lure = lure_option.is_some() && selected == lure_option;

        overall.record(is_correct);
        match source_type {
            Some(source) => buckets[bucket_slot(source)].record(is_correct),
            None => unknown_type += 1,
        }
        if selected.is_none() {
            unanswered += 1;
        }
        if selected_lure {
            false_lures_selected += 1;
        }

        outcomes.push(QuestionOutcome {
            index,
            source_type,
            selected,
            correct_option: question.correct,
            is_correct,
            lure_option,
            selected_lure,
        });
    }

    let out_of_range = answers
        .keys()
        .filter(|&&index| index >= questions.len())
        .count();

    Scorecard {
        overall: overall.bucket(),
        by_source: SourceBuckets {
            article: buckets[bucket_slot(SourceType::Article)].bucket(),
            ai_summary: buckets[bucket_slot(SourceType::AiSummary)].bucket(),
            false_lure: buckets[bucket_slot(SourceType::FalseLure)].bucket(),
        },
        false_lures_selected,
        unanswered,
        unknown_type,
        out_of_range: u32::try_from(out_of_range).unwrap_or(u32::MAX),
        questions: outcomes,
    }
}

const fn bucket_slot(source: SourceType) -> usize {
    match source {
        SourceType::Article => 0,
        SourceType::AiSummary => 1,
        SourceType::FalseLure => 2,
    }
}
