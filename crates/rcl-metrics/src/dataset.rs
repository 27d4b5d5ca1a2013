//! Long-format analysis dataset: one row per participant and article position.

use std::io::Write;

use rcl_core::records::ParticipantLog;
use rcl_core::responses::DatasetRow;
use rcl_core::scores::MetricsReport;

use crate::error::MetricsError;
use crate::report::last_reading_complete;

/// Dataset rows for one participant.
///
/// A position is included only when the randomization names both its article
/// and its timing. Logs without a participant ID or randomization produce no
/// rows.
#[must_use]
pub fn dataset_rows(log: &ParticipantLog, metrics: &MetricsReport) -> Vec<DatasetRow> {
    let Some(participant_id) = log.participant.or(metrics.participant) else {
        return Vec::new();
    };
    let Some(rand) = &log.randomization else {
        tracing::warn!(participant = %participant_id, "no randomization row; skipping dataset rows");
        return Vec::new();
    };

    let mut rows = Vec::new();
    for (index, article_key) in rand.article_order.iter().enumerate() {
        let Ok(article_num) = i64::try_from(index) else {
            break;
        };
        let Some(timing) = rand.timing_for(article_num) else {
            continue;
        };

        let reading_ms = last_reading_complete(log, article_num).map(|r| r.reading_time_ms);
        let summary_time_sec = log
            .summary_viewing
            .iter()
            .rev()
            .find(|row| row.article_num == article_num)
            .map(|row| row.time_spent_seconds);
        let mental_effort = log
            .ratings
            .iter()
            .rev()
            .find(|row| row.article_num == article_num)
            .map(|row| row.load_mental_effort)
            .filter(|&effort| effort >= 0);
        let scores = metrics
            .articles
            .iter()
            .find(|score| score.article_num == article_num)
            .or_else(|| {
                metrics
                    .articles
                    .iter()
                    .find(|score| score.article_key == *article_key)
            })
            .map(|score| &score.scores);

        rows.push(DatasetRow {
            participant_id,
            structure: rand.structure,
            article_num,
            article_key: article_key.clone(),
            timing,
            reading_time_min: reading_ms.map(|ms| as_f64(ms) / 60_000.0),
            summary_time_sec,
            summary_reading_pct: summary_reading_pct(summary_time_sec, reading_ms),
            mental_effort,
            ai_trust: log.ai_trust.as_ref().map(|trust| trust.trust),
            ai_dependence: log.ai_trust.as_ref().map(|trust| trust.dependence),
            mcq_total_questions: scores.map(|s| s.overall.total),
            mcq_total_correct: scores.map(|s| s.overall.correct),
            mcq_overall_accuracy: scores.and_then(|s| s.overall.accuracy),
            mcq_ai_summary_accuracy: scores.and_then(|s| s.by_source.ai_summary.accuracy),
            mcq_article_accuracy: scores.and_then(|s| s.by_source.article.accuracy),
            mcq_false_lure_accuracy: scores.and_then(|s| s.by_source.false_lure.accuracy),
            false_lures_selected: scores.map(|s| s.false_lures_selected),
            revision: metrics.revision,
            dedup_policy: metrics.dedup_policy,
        });
    }
    rows
}

/// Share of summary time in summary plus reading time, as a percentage.
fn summary_reading_pct(summary_sec: Option<f64>, reading_ms: Option<i64>) -> Option<f64> {
    let summary = summary_sec?;
    let reading = as_f64(reading_ms?) / 1000.0;
    let denominator = summary + reading;
    (denominator > 0.0).then(|| summary / denominator * 100.0)
}

#[allow(clippy::cast_precision_loss)] // millisecond counts stay far below 2^52
fn as_f64(ms: i64) -> f64 {
    ms as f64
}

/// Write rows as CSV with a header taken from the field names.
///
/// # Errors
///
/// Returns [`MetricsError::Csv`] if a row cannot be serialized or written.
pub fn write_dataset_csv<W: Write>(writer: W, rows: &[DatasetRow]) -> Result<(), MetricsError> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_needs_both_sides() {
        assert_eq!(summary_reading_pct(None, Some(1000)), None);
        assert_eq!(summary_reading_pct(Some(1.0), None), None);
        assert_eq!(summary_reading_pct(Some(0.0), Some(0)), None);
    }

    #[test]
    fn pct_is_summary_share() {
        assert_eq!(summary_reading_pct(Some(60.0), Some(180_000)), Some(25.0));
        assert_eq!(summary_reading_pct(Some(10.0), Some(0)), Some(100.0));
    }
}
