//! Checks on the embedded reference data.

use pretty_assertions::assert_eq;
use rcl_core::enums::{Revision, SourceType, Structure};
use rcl_reference::{ReferenceData, ReferenceError};
use rstest::rstest;

fn data() -> ReferenceData {
    ReferenceData::builtin().expect("builtin reference data is valid")
}

#[rstest]
#[case(Revision::V1, 15)]
#[case(Revision::V2, 14)]
fn question_counts_match_revision(#[case] revision: Revision, #[case] count: usize) {
    let data = data();
    for key in data.article_keys() {
        assert_eq!(data.questions(key, revision).unwrap().len(), count, "{key}");
    }
}

#[test]
fn v2_answer_keys() {
    let keys = data().answer_keys(Revision::V2);
    assert_eq!(keys["crispr"], vec![0, 3, 0, 2, 0, 0, 1, 1, 3, 0, 2, 2, 1, 2]);
    assert_eq!(keys["semiconductors"], vec![3, 1, 1, 3, 2, 3, 0, 0, 1, 3, 2, 2, 0, 1]);
    assert_eq!(keys["uhi"], vec![2, 3, 0, 1, 2, 2, 0, 1, 2, 2, 1, 1, 0, 1]);
}

#[test]
fn v1_answer_keys() {
    let keys = data().answer_keys(Revision::V1);
    assert_eq!(keys["crispr"], vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1]);
    assert_eq!(keys["semiconductors"], vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1]);
    assert_eq!(keys["uhi"], vec![1, 1, 1, 1, 1, 1, 1, 1, 2, 0, 1, 1, 1, 1, 1]);
}

#[rstest]
#[case("crispr", vec![2, 13], vec![1, 0], vec![8, 10, 11, 12])]
#[case("semiconductors", vec![8, 10], vec![0, 1], vec![7, 11, 12, 13])]
#[case("uhi", vec![3, 10], vec![2, 2], vec![9, 11, 12, 13])]
fn v2_source_maps(
    #[case] key: &str,
    #[case] lures: Vec<usize>,
    #[case] lure_options: Vec<usize>,
    #[case] article: Vec<usize>,
) {
    let data = data();
    let map = data.source_map(key, Revision::V2).unwrap();
    assert_eq!(map.indices(SourceType::FalseLure), lures);
    assert_eq!(
        lures.iter().map(|&i| map.lure_option(i).unwrap()).collect::<Vec<_>>(),
        lure_options
    );
    assert_eq!(map.indices(SourceType::Article), article);
    assert_eq!(map.indices(SourceType::AiSummary).len(), 8);
}

#[test]
fn v1_questions_are_all_article_sourced() {
    let data = data();
    for key in data.article_keys() {
        let map = data.source_map(key, Revision::V1).unwrap();
        assert!((0..15).all(|i| map.source_of(i) == Some(SourceType::Article)));
        assert!(map.false_lure.is_empty());
    }
}

#[test]
fn articles_carry_both_summaries() {
    let data = data();
    let crispr = data.article("crispr").unwrap();
    assert!(crispr.title.starts_with("CRISPR"));
    assert!(!crispr.summary(Structure::Integrated).is_empty());
    assert!(crispr.summary(Structure::Segmented).starts_with("1."));
    assert!(crispr.word_count() > 100);
    assert!(data.article("quantum").is_none());
}

#[test]
fn from_dir_loads_overrides_and_reports_issues() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    for name in [
        rcl_reference::ARTICLES_FILE,
        rcl_reference::QUIZ_V1_FILE,
        rcl_reference::QUIZ_V2_FILE,
    ] {
        std::fs::copy(manifest.join(name), dir.path().join(name)).unwrap();
    }
    assert_eq!(ReferenceData::from_dir(dir.path()).unwrap(), data());

    // Point crispr's first lure at its keyed answer.
    let v2 = dir.path().join(rcl_reference::QUIZ_V2_FILE);
    let raw = std::fs::read_to_string(&v2).unwrap();
    let broken = raw.replacen("{ question = 2, lure = 1 }", "{ question = 2, lure = 0 }", 1);
    std::fs::write(&v2, broken).unwrap();

    let err = ReferenceData::from_dir(dir.path()).unwrap_err();
    let ReferenceError::Invalid { issues } = err else {
        panic!("expected validation failure");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].to_string(), "v2/crispr q2: lure option 0 equals the keyed answer");
}

#[test]
fn from_dir_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReferenceData::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReferenceError::Io { .. }));
}
