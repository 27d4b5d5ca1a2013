//! Greedy answer-key search against externally reported scores.
//!
//! When participants' hand-scored totals disagree with the computed ones, the
//! search proposes the answer-key edits that best explain the difference. It
//! never edits reference data or outputs; fixes go into the quiz files.

use std::collections::BTreeMap;
use std::io::Read;

use rcl_core::enums::Revision;
use rcl_core::errors::CoreError;
use rcl_core::ids::ParticipantId;
use rcl_core::records::ParticipantLog;
use rcl_core::responses::{KeyChange, KeySearchParticipant, KeySearchReport};
use rcl_reference::{OPTION_COUNT, ReferenceData};
use serde::Deserialize;

use crate::error::MetricsError;
use crate::participant::resolve_rows;

/// Responses and reported total for one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParticipant {
    pub participant: ParticipantId,
    pub target: u32,
    /// `(article_key, answers)` for every scored article.
    pub responses: Vec<(String, BTreeMap<usize, usize>)>,
}

impl SearchParticipant {
    /// Collect `log`'s scored responses under `revision`. Articles that do
    /// not resolve to reference data are left out.
    #[must_use]
    pub fn from_log(
        participant: ParticipantId,
        target: u32,
        log: &ParticipantLog,
        reference: &ReferenceData,
        revision: Revision,
    ) -> Self {
        let responses = resolve_rows(log, reference, revision)
            .rows
            .into_iter()
            .map(|(key, response)| (key.to_string(), response.answers.clone()))
            .collect();
        Self {
            participant,
            target,
            responses,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TargetRow {
    participant_id: String,
    score: String,
}

/// Read a `participant_id,score` CSV with a header row.
///
/// # Errors
///
/// Returns [`MetricsError::InvalidTarget`] for an unparseable ID or score,
/// and [`MetricsError::Csv`] for malformed CSV.
pub fn read_targets<R: Read>(reader: R) -> Result<BTreeMap<ParticipantId, u32>, MetricsError> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv.headers()?.clone();
    let mut targets = BTreeMap::new();
    for result in csv.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: TargetRow = record.deserialize(Some(&headers))?;
        let participant = row
            .participant_id
            .parse::<ParticipantId>()
            .map_err(|e: CoreError| MetricsError::InvalidTarget {
                line,
                reason: e.to_string(),
            })?;
        let target = row
            .score
            .parse::<u32>()
            .map_err(|e| MetricsError::InvalidTarget {
                line,
                reason: format!("score '{}': {e}", row.score),
            })?;
        targets.insert(participant, target);
    }
    Ok(targets)
}

/// Greedy single-cell search.
///
/// Each iteration evaluates every `(article, question, option)` edit and
/// applies the one that most reduces `sum |target - score|`. Ties go to the
/// first edit in article, question, option order. Stops when no edit helps
/// or after `max_iterations` edits.
///
/// # Errors
///
/// Returns [`MetricsError::UnknownArticle`] when a participant has responses
/// for an article missing from `keys`.
pub fn search_answer_key(
    revision: Revision,
    keys: &BTreeMap<String, Vec<usize>>,
    participants: &[SearchParticipant],
    max_iterations: u32,
) -> Result<KeySearchReport, MetricsError> {
    // (article, question) -> [(participant slot, selected option)]
    let mut answered: BTreeMap<(&str, usize), Vec<(usize, usize)>> = BTreeMap::new();
    for (slot, participant) in participants.iter().enumerate() {
        for (article, answers) in &participant.responses {
            let key = keys.get(article).ok_or_else(|| MetricsError::UnknownArticle {
                key: article.clone(),
            })?;
            for (&question, &selected) in answers.range(..key.len()) {
                answered
                    .entry((article.as_str(), question))
                    .or_default()
                    .push((slot, selected));
            }
        }
    }

    let score_all = |keys: &BTreeMap<String, Vec<usize>>| -> Vec<i64> {
        let mut scores = vec![0_i64; participants.len()];
        for (&(article, question), answers) in &answered {
            let correct = keys[article][question];
            for &(slot, selected) in answers {
                if selected == correct {
                    scores[slot] += 1;
                }
            }
        }
        scores
    };
    let targets: Vec<i64> = participants.iter().map(|p| i64::from(p.target)).collect();
    let discrepancy = |scores: &[i64]| -> i64 {
        scores
            .iter()
            .zip(&targets)
            .map(|(score, target)| (target - score).abs())
            .sum()
    };

    let initial_scores = score_all(keys);
    let initial_discrepancy = discrepancy(&initial_scores);
    let mut proposed = keys.clone();
    let mut scores = initial_scores.clone();
    let mut current = initial_discrepancy;
    let mut changes = Vec::new();

    for _ in 0..max_iterations {
        if current == 0 {
            break;
        }
        let mut best: Option<(i64, &str, usize, usize)> = None;
        for (&(article, question), answers) in &answered {
            let from = proposed[article][question];
            for option in (0..OPTION_COUNT).filter(|&option| option != from) {
                let improvement: i64 = answers
                    .iter()
                    .map(|&(slot, selected)| {
                        let delta = i64::from(selected == option) - i64::from(selected == from);
                        let target = targets[slot];
                        (target - scores[slot]).abs() - (target - scores[slot] - delta).abs()
                    })
                    .sum();
                if improvement > best.map_or(0, |(gain, ..)| gain) {
                    best = Some((improvement, article, question, option));
                }
            }
        }

        let Some((gain, article, question, option)) = best else {
            break;
        };
        let Some(cells) = proposed.get_mut(article) else {
            break;
        };
        let from = std::mem::replace(&mut cells[question], option);
        for &(slot, selected) in &answered[&(article, question)] {
            scores[slot] += i64::from(selected == option) - i64::from(selected == from);
        }
        current -= gain;
        tracing::debug!(article, question, from, to = option, discrepancy = current, "key change");
        changes.push(KeyChange {
            article_key: article.to_string(),
            question,
            from,
            to: option,
            discrepancy_after: to_u32(current),
        });
    }

    let report_participants = participants
        .iter()
        .enumerate()
        .map(|(slot, p)| KeySearchParticipant {
            participant: p.participant,
            target: p.target,
            initial_score: to_u32(initial_scores[slot]),
            final_score: to_u32(scores[slot]),
        })
        .collect();

    Ok(KeySearchReport {
        revision,
        initial_discrepancy: to_u32(initial_discrepancy),
        final_discrepancy: to_u32(current),
        iterations: u32::try_from(changes.len()).unwrap_or(u32::MAX),
        changes,
        keys: proposed,
        participants: report_participants,
    })
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
