//! Serde roundtrip and JsonSchema validation tests for records and reports.

use std::collections::BTreeMap;

use rcl_core::enums::*;
use rcl_core::ids::ParticipantId;
use rcl_core::records::*;
use rcl_core::responses::*;
use rcl_core::scores::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn crispr_response() -> McqResponse {
    McqResponse {
        timestamp: "2025-11-03T10:41:07.120044".into(),
        article_num: 1,
        article_key: "crispr".into(),
        timing: Some(Timing::Synchronous),
        answers: BTreeMap::from([(0, 0), (1, 3), (2, 1), (13, 2)]),
        total_time_ms: 184_220,
        logged_correct_count: Some(12),
        logged_total_questions: Some(14),
        logged_accuracy_rate: Some(85.5),
        logged_question_accuracy: BTreeMap::from([(
            0,
            LoggedQuestionOutcome {
                participant_answer: Some(0),
                correct_answer: Some(0),
                is_correct: true,
            },
        )]),
    }
}

fn crispr_score() -> ArticleScore {
    ArticleScore {
        article_num: 1,
        article_key: "crispr".into(),
        timing: Some(Timing::Synchronous),
        scores: Scorecard {
            overall: BucketScore::from_counts(13, 14),
            by_source: SourceBuckets {
                article: BucketScore::from_counts(4, 4),
                ai_summary: BucketScore::from_counts(7, 8),
                false_lure: BucketScore::from_counts(2, 2),
            },
            false_lures_selected: 0,
            unanswered: 0,
            unknown_type: 0,
            out_of_range: 0,
            questions: vec![QuestionOutcome {
                index: 2,
                source_type: Some(SourceType::FalseLure),
                selected: Some(0),
                correct_option: 0,
                is_correct: true,
                lure_option: Some(1),
                selected_lure: false,
            }],
        },
    }
}

fn metrics_report() -> MetricsReport {
    let score = crispr_score();
    MetricsReport {
        participant: Some(ParticipantId::new(78)),
        revision: Revision::V2,
        revision_source: RevisionSource::QuestionCount,
        dedup_policy: DedupPolicy::KeepFirst,
        dropped_duplicates: vec![DroppedDuplicate {
            article_key: "crispr".into(),
            kept_timestamp: "2025-11-03T10:41:07".into(),
            dropped_timestamp: "2025-11-03T10:41:09".into(),
        }],
        json_warnings: 1,
        totals: ScoreTotals {
            overall: score.scores.overall,
            by_source: score.scores.by_source,
            false_lures_selected: 0,
            unanswered: 0,
        },
        articles: vec![score],
        unscored: vec![UnscoredArticle {
            article_num: 2,
            article_key: "quantum".into(),
            responses: 14,
        }],
    }
}

roundtrip_and_validate!(
    participant_log_roundtrip,
    ParticipantLog,
    {
        let mut log = ParticipantLog::empty(Some(ParticipantId::new(78)), DedupPolicy::KeepLast);
        log.demographics = Some(Demographics {
            timestamp: "2025-11-03T10:00:00".into(),
            full_name: "Jane Doe".into(),
            profession: "Nurse".into(),
            age: "34".into(),
            gender: "female".into(),
            native_language: "Norwegian".into(),
        });
        log.randomization = Some(Randomization {
            timestamp: "2025-11-03T10:02:00".into(),
            layout: RandomizationLayout::Counterbalanced,
            structure: Some(Structure::Integrated),
            timing_order: vec!["pre_reading".into(), "synchronous".into(), "post_reading".into()],
            article_order: vec!["uhi".into(), "crispr".into(), "semiconductors".into()],
        });
        log.reading.push(ReadingEvent::SummaryOverlayClosed(OverlayClosed {
            timestamp: "2025-11-03T10:20:00".into(),
            article_num: 1,
            duration_ms: 8_200,
            overlay_num: 1,
            article_key: "crispr".into(),
            timing: Some(Timing::Synchronous),
        }));
        log.mcq.push(crispr_response());
        log.manipulation_check = Some(ManipulationCheck {
            timestamp: "2025-11-03T11:02:00".into(),
            coherence: 6,
            connectivity: -1,
            strategy: "skimmed the summary first".into(),
        });
        log.diagnostics.rows_read = 41;
        log.diagnostics.json_warnings = 1;
        log
    }
);

roundtrip_and_validate!(
    reading_event_roundtrip,
    ReadingEvent,
    ReadingEvent::ReadingComplete(ReadingComplete {
        timestamp: "2025-11-03T10:12:00".into(),
        reading_time_ms: 301_442,
        summary_time_ms: 0,
        overlay_count: 0,
        scroll_depth: 100,
        article_num: 0,
        article_key: "uhi".into(),
        timing: Some(Timing::PreReading),
    })
);

roundtrip_and_validate!(metrics_report_roundtrip, MetricsReport, metrics_report());

roundtrip_and_validate!(
    participant_report_roundtrip,
    ParticipantReport,
    ParticipantReport {
        participant: Some(ParticipantId::new(78)),
        demographics: None,
        prior_knowledge: None,
        ai_trust: Some(TrustSummary {
            trust: 4.5,
            trust_level: Some("moderate-high".into()),
            dependence: 2.0,
            dependence_level: Some("low".into()),
            skill: 5.25,
            reflection: String::new(),
        }),
        randomization: None,
        articles: vec![ArticleReport {
            article_num: 1,
            article_key: "crispr".into(),
            title: Some("CRISPR Gene Editing".into()),
            timing: Some(Timing::Synchronous),
            reading_time_ms: Some(301_442),
            scroll_depth: Some(100),
            overlay_time_ms: 8_200,
            overlays_opened: 1,
            visibility_changes: 0,
            summary_time_seconds: None,
            recall: Some(RecallSummary {
                word_count: 88,
                sentence_count: 6,
                char_count: 512,
                confidence: 5,
                confidence_level: Some("moderate".into()),
                difficulty: 3,
                difficulty_level: Some("moderate".into()),
                time_spent_ms: 240_000,
                paste_attempts: 0,
                over_limit: false,
            }),
            ratings: None,
            mcq: Some(crispr_score()),
        }],
        manipulation_check: None,
        metrics: metrics_report(),
    }
);

roundtrip_and_validate!(
    dataset_row_roundtrip,
    DatasetRow,
    DatasetRow {
        participant_id: ParticipantId::new(81),
        structure: Some(Structure::Segmented),
        article_num: 2,
        article_key: "semiconductors".into(),
        timing: Timing::PostReading,
        reading_time_min: Some(4.25),
        summary_time_sec: Some(61.5),
        summary_reading_pct: Some(19.5),
        mental_effort: Some(5),
        ai_trust: Some(4.0),
        ai_dependence: Some(3.5),
        mcq_total_questions: Some(14),
        mcq_total_correct: Some(11),
        mcq_overall_accuracy: Some(78.5),
        mcq_ai_summary_accuracy: Some(87.5),
        mcq_article_accuracy: Some(50.0),
        mcq_false_lure_accuracy: None,
        false_lures_selected: Some(0),
        revision: Revision::V2,
        dedup_policy: DedupPolicy::KeepFirst,
    }
);

roundtrip_and_validate!(
    allocation_roundtrip,
    ParticipantAllocation,
    ParticipantAllocation {
        participant: ParticipantEntry {
            participant_id: ParticipantId::new(102),
            timestamp: "2025-11-04T09:15:02.331902".into(),
            name: "Ola Nordmann".into(),
        },
        log_file: "experiment_data/P102_log.csv".into(),
        registered: 102,
    }
);

roundtrip_and_validate!(
    key_search_roundtrip,
    KeySearchReport,
    KeySearchReport {
        revision: Revision::V2,
        initial_discrepancy: 3,
        final_discrepancy: 0,
        iterations: 1,
        changes: vec![KeyChange {
            article_key: "uhi".into(),
            question: 7,
            from: 0,
            to: 1,
            discrepancy_after: 0,
        }],
        keys: BTreeMap::from([("uhi".to_string(), vec![2, 3, 0, 1, 2, 2, 0, 1, 2, 2, 1, 1, 0, 1])]),
        participants: vec![KeySearchParticipant {
            participant: ParticipantId::new(90),
            target: 40,
            initial_score: 39,
            final_score: 40,
        }],
    }
);

#[test]
fn participant_id_schema_rejects_bad_ids() {
    let schema = serde_json::to_value(schema_for!(ParticipantId)).unwrap();
    let validator = jsonschema::validator_for(&schema).unwrap();
    assert!(validator.is_valid(&serde_json::json!("P078")));
    assert!(!validator.is_valid(&serde_json::json!("078")));
}
