//! Per-phase column layouts.
//!
//! Field 0 is the timestamp and field 1 the phase; everything after that
//! depends on the phase. Each `decode_*` function maps one row to its record.

use std::collections::BTreeMap;

use rcl_core::enums::{Phase, RandomizationLayout, Structure, Timing};
use rcl_core::records::{
    AiTrust, Demographics, LoggedQuestionOutcome, ManipulationCheck, McqResponse, OverlayClosed,
    OverlayOpened, PostArticleRating, PriorKnowledge, Randomization, ReadingComplete,
    ReadingEvent, RecallResponse, SummaryViewing, VisibilityChange,
};
use serde_json::{Map, Value};

use crate::fields::{JsonCell, Row, option_index, question_index};

/// Minimum field counts for phases that are dropped when short.
const SUMMARY_VIEWING_MIN_FIELDS: usize = 8;
const RECALL_MIN_FIELDS: usize = 13;
const MCQ_MIN_FIELDS: usize = 6;
const RATINGS_MIN_FIELDS: usize = 9;
const MANIPULATION_MIN_FIELDS: usize = 4;

/// Field holding `question_accuracy` in the standard `mcq_responses` layout.
const QUESTION_ACCURACY_FIELD: usize = 12;

/// A decoded row.
#[derive(Debug)]
pub(crate) enum Decoded {
    Demographics(Demographics),
    PriorKnowledge(PriorKnowledge),
    AiTrust(AiTrust),
    Randomization(Randomization),
    Reading(ReadingEvent),
    SummaryViewing(SummaryViewing),
    Recall(RecallResponse),
    Mcq(McqResponse),
    Rating(PostArticleRating),
    Manipulation(ManipulationCheck),
    /// Phase or reading event without a layout.
    Ignored,
    /// Too short for its layout.
    Skipped,
}

/// Decodes rows and counts JSON cells that failed to parse.
#[derive(Debug, Default)]
pub(crate) struct Decoder {
    pub(crate) json_warnings: u32,
}

impl Decoder {
    pub(crate) fn decode(&mut self, row: &Row<'_>) -> Decoded {
        let Some(phase) = Phase::from_label(row.raw(1)) else {
            return Decoded::Ignored;
        };
        match phase {
            Phase::Demographics => Decoded::Demographics(decode_demographics(row)),
            Phase::PriorKnowledge => Decoded::PriorKnowledge(decode_prior_knowledge(row)),
            Phase::AiTrust => Decoded::AiTrust(decode_ai_trust(row)),
            Phase::Randomization => Decoded::Randomization(self.decode_randomization(row)),
            Phase::ReadingBehavior => {
                decode_reading(row).map_or(Decoded::Ignored, Decoded::Reading)
            }
            Phase::SummaryViewing if row.len() >= SUMMARY_VIEWING_MIN_FIELDS => {
                Decoded::SummaryViewing(decode_summary_viewing(row))
            }
            Phase::RecallResponse if row.len() >= RECALL_MIN_FIELDS => {
                Decoded::Recall(decode_recall(row))
            }
            Phase::McqResponses if row.len() >= MCQ_MIN_FIELDS => {
                Decoded::Mcq(self.decode_mcq(row))
            }
            Phase::PostArticleRatings if row.len() >= RATINGS_MIN_FIELDS => {
                Decoded::Rating(decode_rating(row))
            }
            Phase::ManipulationCheck if row.len() >= MANIPULATION_MIN_FIELDS => {
                Decoded::Manipulation(decode_manipulation(row))
            }
            Phase::SummaryViewing
            | Phase::RecallResponse
            | Phase::McqResponses
            | Phase::PostArticleRatings
            | Phase::ManipulationCheck => Decoded::Skipped,
        }
    }

    fn json(&mut self, raw: &str, field: &str) -> JsonCell {
        let cell = JsonCell::parse(raw);
        if cell.is_malformed() {
            self.json_warnings += 1;
            tracing::warn!(field, "unparseable JSON cell treated as empty");
        }
        cell
    }

    fn decode_randomization(&mut self, row: &Row<'_>) -> Randomization {
        let structure = Structure::from_label(row.raw(2));
        let counterbalanced = JsonCell::parse(row.raw(9)).into_string_list();

        let (layout, timing_order, article_order) = if let Some(article_order) = counterbalanced {
            let timing_order = self
                .json(row.raw(4), "timing_order")
                .into_string_list()
                .unwrap_or_default();
            (RandomizationLayout::Counterbalanced, timing_order, article_order)
        } else {
            let first = self
                .json(row.raw(3), "timing_order")
                .into_string_list()
                .unwrap_or_default();
            let second = self
                .json(row.raw(4), "article_order")
                .into_string_list()
                .unwrap_or_default();
            // Some platform builds wrote article_order before timing_order.
            if is_timing_list(&second) && !is_timing_list(&first) {
                (RandomizationLayout::Original, second, first)
            } else {
                (RandomizationLayout::Original, first, second)
            }
        };

        Randomization {
            timestamp: row.text(0),
            layout,
            structure,
            timing_order,
            article_order,
        }
    }

    fn decode_mcq(&mut self, row: &Row<'_>) -> McqResponse {
        let mut answers = BTreeMap::new();
        for (key, value) in self.json(row.raw(5), "mcq_answers").into_object() {
            if let (Some(question), Some(option)) = (question_index(&key), option_index(&value)) {
                answers.insert(question, option);
            }
        }

        let logged_question_accuracy = self.question_accuracy(row);
        if answers.is_empty() {
            answers = logged_question_accuracy
                .iter()
                .filter_map(|(q, outcome)| outcome.participant_answer.map(|a| (*q, a)))
                .collect();
        }

        McqResponse {
            timestamp: row.text(0),
            article_num: row.int(2, -1),
            article_key: row.raw(3).trim().to_string(),
            timing: row.timing(4),
            answers,
            total_time_ms: row.int(8, 0),
            logged_correct_count: optional_count(row, 9),
            logged_total_questions: optional_count(row, 10),
            logged_accuracy_rate: (!row.raw(11).trim().is_empty()).then(|| row.float(11, 0.0)),
            logged_question_accuracy,
        }
    }

    /// The per-question accuracy blob, at its usual field or anywhere in the row.
    fn question_accuracy(&mut self, row: &Row<'_>) -> BTreeMap<usize, LoggedQuestionOutcome> {
        let standard = row.raw(QUESTION_ACCURACY_FIELD);
        if !standard.trim().is_empty() {
            let cell = self.json(standard, "question_accuracy");
            let outcomes = question_outcomes(&cell.into_object());
            if !outcomes.is_empty() {
                return outcomes;
            }
        }
        (MCQ_MIN_FIELDS..row.len())
            .filter(|&i| i != QUESTION_ACCURACY_FIELD)
            .map(|i| question_outcomes(&JsonCell::parse(row.raw(i)).into_object()))
            .find(|outcomes| !outcomes.is_empty())
            .unwrap_or_default()
    }
}

fn is_timing_list(items: &[String]) -> bool {
    !items.is_empty() && items.iter().all(|item| Timing::from_label(item).is_some())
}

fn optional_count(row: &Row<'_>, index: usize) -> Option<u32> {
    u32::try_from(row.int(index, -1)).ok()
}

/// Entries shaped like `{"q0": {"is_correct": .., "participant_answer": ..}}`.
fn question_outcomes(map: &Map<String, Value>) -> BTreeMap<usize, LoggedQuestionOutcome> {
    if !map
        .get("q0")
        .and_then(Value::as_object)
        .is_some_and(|entry| entry.contains_key("is_correct"))
    {
        return BTreeMap::new();
    }
    map.iter()
        .filter_map(|(key, entry)| {
            let entry = entry.as_object()?;
            let index = entry
                .get("question_index")
                .and_then(option_index)
                .or_else(|| question_index(key))?;
            Some((
                index,
                LoggedQuestionOutcome {
                    participant_answer: entry.get("participant_answer").and_then(option_index),
                    correct_answer: entry.get("correct_answer").and_then(option_index),
                    is_correct: entry
                        .get("is_correct")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                },
            ))
        })
        .collect()
}

fn decode_demographics(row: &Row<'_>) -> Demographics {
    Demographics {
        timestamp: row.text(0),
        full_name: row.text(2),
        profession: row.text(3),
        age: row.text(4),
        gender: row.text(5),
        native_language: row.text(6),
    }
}

fn decode_prior_knowledge(row: &Row<'_>) -> PriorKnowledge {
    PriorKnowledge {
        timestamp: row.text(0),
        familiarity_mean: row.float(2, 0.0),
        familiarity_individual: row.text(3),
        recognition: row.float(4, 0.0),
        recognition_individual: row.text(5),
        quiz_score: row.float(6, 0.0),
        excluded: row.flag(9),
        concept_list: row.text(10),
    }
}

fn decode_ai_trust(row: &Row<'_>) -> AiTrust {
    AiTrust {
        timestamp: row.text(0),
        trust: row.float(2, 0.0),
        trust_individual: row.text(3),
        dependence: row.float(4, 0.0),
        dependence_individual: row.text(5),
        skill: row.float(6, 0.0),
        skill_individual: row.text(7),
        reflection: row.text(8),
    }
}

fn decode_reading(row: &Row<'_>) -> Option<ReadingEvent> {
    let timestamp = row.text(0);
    let event = match row.raw(2).trim() {
        "reading_complete" => ReadingEvent::ReadingComplete(ReadingComplete {
            timestamp,
            reading_time_ms: row.int(4, 0),
            summary_time_ms: row.int(5, 0),
            overlay_count: row.int(6, 0),
            scroll_depth: row.int(7, 100),
            article_num: row.int(8, -1),
            article_key: row.text(9),
            timing: row.timing(10),
        }),
        "summary_overlay_opened" => ReadingEvent::SummaryOverlayOpened(OverlayOpened {
            timestamp,
            article_num: row.int(4, -1),
            overlay_num: row.int(5, 0),
            article_key: row.text(6),
            timing: row.timing(7),
        }),
        "summary_overlay_closed" => ReadingEvent::SummaryOverlayClosed(OverlayClosed {
            timestamp,
            article_num: row.int(4, -1),
            duration_ms: row.int(5, 0),
            overlay_num: row.int(6, 0),
            article_key: row.text(7),
            timing: row.timing(8),
        }),
        "visibility_change" => ReadingEvent::VisibilityChange(VisibilityChange {
            timestamp,
            is_visible: row.flag(4),
            article_num: row.int(5, -1),
            article_key: row.text(6),
            timing: row.timing(7),
        }),
        _ => return None,
    };
    Some(event)
}

fn decode_summary_viewing(row: &Row<'_>) -> SummaryViewing {
    SummaryViewing {
        timestamp: row.text(0),
        article_num: row.int(2, -1),
        article_key: row.text(3),
        mode: row.text(4),
        structure: row.text(5),
        time_spent_ms: row.int(6, 0),
        time_spent_seconds: row.float(7, 0.0),
    }
}

fn decode_recall(row: &Row<'_>) -> RecallResponse {
    RecallResponse {
        timestamp: row.text(0),
        article_num: row.int(2, -1),
        article_key: row.text(3),
        timing: row.timing(4),
        recall_text: row.text(5),
        sentence_count: row.int(6, 0),
        word_count: row.int(7, 0),
        char_count: row.int(8, 0),
        confidence: row.int(9, 0),
        difficulty: row.int(10, 0),
        time_spent_ms: row.int(11, 0),
        paste_attempts: row.int(12, 0),
        over_limit: row.flag(13),
    }
}

fn decode_rating(row: &Row<'_>) -> PostArticleRating {
    PostArticleRating {
        timestamp: row.text(0),
        article_num: row.int(2, -1),
        article_key: row.text(3),
        timing: row.timing(4),
        load_mental_effort: row.int(5, -1),
        load_task_difficulty: row.int(6, -1),
        ai_help_understanding: row.int(7, -1),
        ai_help_memory: row.int(8, -1),
        ai_made_task_easier: row.int(9, -1),
        ai_satisfaction: row.int(10, -1),
        ai_better_than_no_ai: row.int(11, -1),
        mcq_overall_confidence: row.int(12, -1),
    }
}

fn decode_manipulation(row: &Row<'_>) -> ManipulationCheck {
    ManipulationCheck {
        timestamp: row.text(0),
        coherence: row.int(2, -1),
        connectivity: row.int(3, -1),
        strategy: row.text(4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;
    use pretty_assertions::assert_eq;

    fn decode(fields: &[&str]) -> (Decoded, u32) {
        let record = StringRecord::from(fields.to_vec());
        let mut decoder = Decoder::default();
        let decoded = decoder.decode(&Row::new(&record));
        (decoded, decoder.json_warnings)
    }

    #[test]
    fn counterbalanced_randomization() {
        let (decoded, _) = decode(&[
            "t",
            "randomization",
            "Segmented",
            "3",
            r#"["post_reading","synchronous","pre_reading"]"#,
            "",
            "",
            "",
            "",
            r#"["crispr","uhi","semiconductors"]"#,
        ]);
        let Decoded::Randomization(rand) = decoded else {
            panic!("expected randomization, got {decoded:?}");
        };
        assert_eq!(rand.layout, RandomizationLayout::Counterbalanced);
        assert_eq!(rand.structure, Some(Structure::Segmented));
        assert_eq!(rand.timing_for(0), Some(Timing::PostReading));
        assert_eq!(rand.article_for(1), Some("uhi"));
    }

    #[test]
    fn original_randomization_accepts_either_order() {
        let (decoded, _) = decode(&[
            "t",
            "randomization",
            "integrated",
            r#"["uhi","crispr","semiconductors"]"#,
            r#"["synchronous","pre_reading","post_reading"]"#,
        ]);
        let Decoded::Randomization(rand) = decoded else {
            panic!("expected randomization");
        };
        assert_eq!(rand.layout, RandomizationLayout::Original);
        assert_eq!(rand.article_order, vec!["uhi", "crispr", "semiconductors"]);
        assert_eq!(rand.timing_for(0), Some(Timing::Synchronous));
    }

    #[test]
    fn mcq_answers_and_logged_totals() {
        let (decoded, warnings) = decode(&[
            "t",
            "mcq_responses",
            "1",
            "crispr",
            "synchronous",
            r#"{"q0": 0, "q1": 3, "q2": null, "q3": -1}"#,
            "{}",
            "{}",
            "184220",
            "12",
            "14",
            "85.71",
        ]);
        let Decoded::Mcq(mcq) = decoded else {
            panic!("expected mcq");
        };
        assert_eq!(warnings, 0);
        assert_eq!(mcq.answers, BTreeMap::from([(0, 0), (1, 3)]));
        assert_eq!(mcq.timing, Some(Timing::Synchronous));
        assert_eq!(mcq.logged_total_questions, Some(14));
        assert_eq!(mcq.total_time_ms, 184_220);
    }

    #[test]
    fn mcq_answers_recovered_from_question_accuracy() {
        let accuracy = r#"{"q0": {"participant_answer": 2, "correct_answer": 2, "is_correct": true, "question_index": 0}, "q1": {"participant_answer": null, "correct_answer": 3, "is_correct": false, "question_index": 1}}"#;
        // Blob shifted one field right of its usual place.
        let (decoded, warnings) = decode(&[
            "t",
            "mcq_responses",
            "0",
            "uhi",
            "pre_reading",
            "not json",
            "{}",
            "{}",
            "1000",
            "1",
            "14",
            "7.14",
            "extra",
            accuracy,
        ]);
        let Decoded::Mcq(mcq) = decoded else {
            panic!("expected mcq");
        };
        assert_eq!(warnings, 2);
        assert_eq!(mcq.answers, BTreeMap::from([(0, 2)]));
        assert_eq!(mcq.logged_question_accuracy.len(), 2);
        assert!(mcq.logged_question_accuracy[&0].is_correct);
    }

    #[test]
    fn reading_events_dispatch_on_event_name() {
        let (decoded, _) = decode(&[
            "t",
            "reading_behavior",
            "summary_overlay_closed",
            "t2",
            "1",
            "8200",
            "2",
            "crispr",
            "synchronous",
        ]);
        let Decoded::Reading(ReadingEvent::SummaryOverlayClosed(closed)) = decoded else {
            panic!("expected overlay close");
        };
        assert_eq!(closed.duration_ms, 8_200);
        assert_eq!(closed.article_key, "crispr");

        let (decoded, _) = decode(&["t", "reading_behavior", "scroll", "t2"]);
        assert!(matches!(decoded, Decoded::Ignored));
    }

    #[test]
    fn reading_complete_defaults_scroll_depth() {
        let (decoded, _) = decode(&["t", "reading_behavior", "reading_complete", "t2", "300000"]);
        let Decoded::Reading(ReadingEvent::ReadingComplete(done)) = decoded else {
            panic!("expected reading_complete");
        };
        assert_eq!(done.reading_time_ms, 300_000);
        assert_eq!(done.scroll_depth, 100);
        assert_eq!(done.article_num, -1);
    }

    #[test]
    fn short_rows_are_skipped() {
        assert!(matches!(decode(&["t", "recall_response", "0"]).0, Decoded::Skipped));
        assert!(matches!(decode(&["t", "manipulation_check", "5"]).0, Decoded::Skipped));
        assert!(matches!(decode(&["t", "consent", "yes"]).0, Decoded::Ignored));
    }

    #[test]
    fn ratings_default_to_minus_one() {
        let (decoded, _) = decode(&["t", "post_article_ratings", "2", "uhi", "post_reading", "6", "x", "", "4"]);
        let Decoded::Rating(rating) = decoded else {
            panic!("expected rating");
        };
        assert_eq!(rating.load_mental_effort, 6);
        assert_eq!(rating.load_task_difficulty, -1);
        assert_eq!(rating.ai_help_understanding, -1);
        assert_eq!(rating.ai_help_memory, 4);
        assert_eq!(rating.mcq_overall_confidence, -1);
    }
}
