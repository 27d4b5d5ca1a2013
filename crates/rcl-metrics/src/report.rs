//! Full participant report: questionnaires, reading behaviour, recall, and
//! scores for every article position.

use std::collections::BTreeSet;

use rcl_core::records::{
    AiTrust, ManipulationCheck, ParticipantLog, ReadingComplete, ReadingEvent, RecallResponse,
};
use rcl_core::responses::{
    ArticleReport, ManipulationSummary, ParticipantReport, RecallSummary, TrustSummary,
};
use rcl_core::scores::MetricsReport;
use rcl_reference::ReferenceData;

use crate::levels::{coherence_level, confidence_level, difficulty_level, trust_level};

/// Assemble the report for one participant.
///
/// `metrics` is the output of [`crate::score_participant`] for the same log;
/// each position's MCQ score is taken from it by `article_num`.
#[must_use]
pub fn build_report(
    log: &ParticipantLog,
    reference: &ReferenceData,
    metrics: MetricsReport,
) -> ParticipantReport {
    let articles = article_positions(log)
        .into_iter()
        .map(|num| article_report(log, reference, &metrics, num))
        .collect();

    ParticipantReport {
        participant: log.participant,
        demographics: log.demographics.clone(),
        prior_knowledge: log.prior_knowledge.clone(),
        ai_trust: log.ai_trust.as_ref().map(trust_summary),
        randomization: log.randomization.clone(),
        articles,
        manipulation_check: log.manipulation_check.as_ref().map(manipulation_summary),
        metrics,
    }
}

/// Every article position named by the randomization or by any per-article row.
fn article_positions(log: &ParticipantLog) -> BTreeSet<i64> {
    let mut positions = BTreeSet::new();
    if let Some(rand) = &log.randomization {
        positions.extend((0..rand.article_order.len()).filter_map(|i| i64::try_from(i).ok()));
    }
    positions.extend(log.reading.iter().map(ReadingEvent::article_num));
    positions.extend(log.summary_viewing.iter().map(|row| row.article_num));
    positions.extend(log.recall.iter().map(|row| row.article_num));
    positions.extend(log.mcq.iter().map(|row| row.article_num));
    positions.extend(log.ratings.iter().map(|row| row.article_num));
    positions.retain(|&num| num >= 0);
    positions
}

fn article_report(
    log: &ParticipantLog,
    reference: &ReferenceData,
    metrics: &MetricsReport,
    num: i64,
) -> ArticleReport {
    let mcq = metrics
        .articles
        .iter()
        .find(|score| score.article_num == num)
        .cloned();
    let article_key = log
        .randomization
        .as_ref()
        .and_then(|rand| rand.article_for(num))
        .map(str::to_string)
        .or_else(|| mcq.as_ref().map(|score| score.article_key.clone()))
        .or_else(|| logged_key(log, num))
        .unwrap_or_default();
    let timing = log
        .randomization
        .as_ref()
        .and_then(|rand| rand.timing_for(num))
        .or_else(|| mcq.as_ref().and_then(|score| score.timing));

    let reading = last_reading_complete(log, num);
    let mut overlay_time_ms = 0;
    let mut overlays_opened = 0;
    let mut visibility_changes = 0;
    for event in log.reading.iter().filter(|event| event.article_num() == num) {
        match event {
            ReadingEvent::SummaryOverlayClosed(closed) => overlay_time_ms += closed.duration_ms,
            ReadingEvent::SummaryOverlayOpened(_) => overlays_opened += 1,
            ReadingEvent::VisibilityChange(_) => visibility_changes += 1,
            ReadingEvent::ReadingComplete(_) => {}
        }
    }

    ArticleReport {
        article_num: num,
        title: reference.article(&article_key).map(|article| article.title.clone()),
        article_key,
        timing,
        reading_time_ms: reading.map(|r| r.reading_time_ms),
        scroll_depth: reading.map(|r| r.scroll_depth),
        overlay_time_ms,
        overlays_opened,
        visibility_changes,
        summary_time_seconds: summary_time_seconds(log, num),
        recall: log
            .recall
            .iter()
            .rev()
            .find(|row| row.article_num == num)
            .map(recall_summary),
        ratings: log
            .ratings
            .iter()
            .rev()
            .find(|row| row.article_num == num)
            .cloned(),
        mcq,
    }
}

fn logged_key(log: &ParticipantLog, num: i64) -> Option<String> {
    let from_recall = log
        .recall
        .iter()
        .filter(|row| row.article_num == num)
        .map(|row| row.article_key.as_str());
    let from_ratings = log
        .ratings
        .iter()
        .filter(|row| row.article_num == num)
        .map(|row| row.article_key.as_str());
    from_recall
        .chain(from_ratings)
        .find(|key| !key.is_empty())
        .map(str::to_string)
}

pub(crate) fn last_reading_complete(log: &ParticipantLog, num: i64) -> Option<&ReadingComplete> {
    log.reading.iter().rev().find_map(|event| match event {
        ReadingEvent::ReadingComplete(complete) if complete.article_num == num => Some(complete),
        _ => None,
    })
}

/// Seconds on the summary page, or the in-reading summary time when no
/// `summary_viewing` row exists.
fn summary_time_seconds(log: &ParticipantLog, num: i64) -> Option<f64> {
    let viewed = log
        .summary_viewing
        .iter()
        .rev()
        .find(|row| row.article_num == num)
        .map(|row| row.time_spent_seconds);
    viewed.or_else(|| {
        last_reading_complete(log, num)
            .filter(|r| r.summary_time_ms > 0)
            .map(|r| ms_to_seconds(r.summary_time_ms))
    })
}

#[allow(clippy::cast_precision_loss)] // durations are far below 2^52 ms
fn ms_to_seconds(ms: i64) -> f64 {
    ms as f64 / 1000.0
}

fn trust_summary(trust: &AiTrust) -> TrustSummary {
    TrustSummary {
        trust: trust.trust,
        trust_level: trust_level(trust.trust).map(Into::into),
        dependence: trust.dependence,
        dependence_level: trust_level(trust.dependence).map(Into::into),
        skill: trust.skill,
        reflection: trust.reflection.clone(),
    }
}

fn recall_summary(recall: &RecallResponse) -> RecallSummary {
    RecallSummary {
        word_count: recall.word_count,
        sentence_count: recall.sentence_count,
        char_count: recall.char_count,
        confidence: recall.confidence,
        confidence_level: confidence_level(recall.confidence).map(Into::into),
        difficulty: recall.difficulty,
        difficulty_level: difficulty_level(recall.difficulty).map(Into::into),
        time_spent_ms: recall.time_spent_ms,
        paste_attempts: recall.paste_attempts,
        over_limit: recall.over_limit,
    }
}

fn manipulation_summary(check: &ManipulationCheck) -> ManipulationSummary {
    ManipulationSummary {
        coherence: check.coherence,
        coherence_level: coherence_level(check.coherence).map(Into::into),
        connectivity: check.connectivity,
        connectivity_level: coherence_level(check.connectivity).map(Into::into),
        strategy: check.strategy.clone(),
    }
}
