//! Scoring against the builtin reference data.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use rcl_core::enums::{Revision, SourceType};
use rcl_core::scores::BucketScore;
use rcl_metrics::score_article;
use rcl_reference::ReferenceData;
use rstest::rstest;

const CRISPR_KEY: [usize; 14] = [0, 3, 0, 2, 0, 0, 1, 1, 3, 0, 2, 2, 1, 2];

fn reference() -> ReferenceData {
    ReferenceData::builtin().unwrap()
}

fn answers_from(key: &[usize]) -> BTreeMap<usize, usize> {
    key.iter().copied().enumerate().collect()
}

#[test]
fn crispr_key_answered_exactly_scores_fourteen() {
    let reference = reference();
    let questions = reference.questions("crispr", Revision::V2).unwrap();
    let map = reference.source_map("crispr", Revision::V2);

    let card = score_article(&answers_from(&CRISPR_KEY), questions, map);

    assert_eq!(card.overall, BucketScore::from_counts(14, 14));
    assert_eq!(card.overall.accuracy, Some(100.0));
    assert_eq!(card.by_source.ai_summary, BucketScore::from_counts(8, 8));
    assert_eq!(card.by_source.article, BucketScore::from_counts(4, 4));
    assert_eq!(card.by_source.false_lure, BucketScore::from_counts(2, 2));
    assert_eq!(card.false_lures_selected, 0);
    assert_eq!(card.unanswered, 0);
}

#[test]
fn one_mismatch_at_index_five_scores_thirteen() {
    let reference = reference();
    let questions = reference.questions("crispr", Revision::V2).unwrap();
    let mut answers = answers_from(&CRISPR_KEY);
    answers.insert(5, 2);

    let card = score_article(&answers, questions, reference.source_map("crispr", Revision::V2));

    assert_eq!(card.overall.correct, 13);
    assert_eq!(card.overall.total, 14);
    assert!(!card.questions[5].is_correct);
    assert_eq!(card.questions[5].source_type, Some(SourceType::AiSummary));
}

#[rstest]
#[case("crispr", Revision::V2)]
#[case("semiconductors", Revision::V2)]
#[case("uhi", Revision::V2)]
#[case("crispr", Revision::V1)]
#[case("uhi", Revision::V1)]
fn source_totals_partition_the_overall_total(#[case] article: &str, #[case] revision: Revision) {
    let reference = reference();
    let questions = reference.questions(article, revision).unwrap();
    let answers = BTreeMap::from([(0, 1), (3, 2), (9, 0)]);

    let card = score_article(&answers, questions, reference.source_map(article, revision));

    assert_eq!(card.by_source.total(), card.overall.total);
    assert_eq!(card.unknown_type, 0);
    assert_eq!(card.overall.total as usize, revision.question_count());
}

#[rstest]
#[case("crispr")]
#[case("semiconductors")]
#[case("uhi")]
fn all_correct_is_full_marks_in_every_bucket(#[case] article: &str) {
    let reference = reference();
    let questions = reference.questions(article, Revision::V2).unwrap();
    let key = reference.answer_keys(Revision::V2)[article].clone();
    let map = reference.source_map(article, Revision::V2);

    let card = score_article(&answers_from(&key), questions, map);

    assert_eq!(card.overall.accuracy, Some(100.0));
    for source in SourceType::ALL {
        let bucket = card.by_source.get(source);
        assert!(bucket.total > 0);
        assert_eq!(bucket.accuracy, Some(100.0), "{article} {source}");
    }
}

#[rstest]
#[case("crispr")]
#[case("semiconductors")]
#[case("uhi")]
fn choosing_every_lure_zeroes_the_lure_bucket(#[case] article: &str) {
    let reference = reference();
    let questions = reference.questions(article, Revision::V2).unwrap();
    let map = reference.source_map(article, Revision::V2).unwrap();
    let mut answers = answers_from(&reference.answer_keys(Revision::V2)[article]);
    for lure in &map.false_lure {
        answers.insert(lure.question, lure.lure);
    }

    let card = score_article(&answers, questions, Some(map));

    assert_eq!(card.false_lures_selected as usize, map.false_lure.len());
    assert_eq!(card.by_source.false_lure.accuracy, Some(0.0));
    assert_eq!(card.by_source.ai_summary.accuracy, Some(100.0));
}

#[test]
fn scoring_is_idempotent() {
    let reference = reference();
    let questions = reference.questions("uhi", Revision::V2).unwrap();
    let map = reference.source_map("uhi", Revision::V2);
    let answers = BTreeMap::from([(0, 2), (1, 0), (3, 2), (10, 2), (13, 3)]);

    let first = score_article(&answers, questions, map);
    let second = score_article(&answers, questions, map);

    assert_eq!(first, second);
}

#[test]
fn v1_questions_are_all_article_based() {
    let reference = reference();
    let key = reference.answer_keys(Revision::V1)["semiconductors"].clone();
    let questions = reference.questions("semiconductors", Revision::V1).unwrap();

    let card = score_article(
        &answers_from(&key),
        questions,
        reference.source_map("semiconductors", Revision::V1),
    );

    assert_eq!(card.by_source.article, BucketScore::from_counts(15, 15));
    assert_eq!(card.by_source.ai_summary.accuracy, None);
    assert_eq!(card.by_source.false_lure.accuracy, None);
}
