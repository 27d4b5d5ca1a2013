//! Participant-level scoring.

use rcl_core::enums::{DedupPolicy, Revision};
use rcl_core::records::{DroppedDuplicate, McqResponse, ParticipantLog};
use rcl_core::scores::{
    ArticleScore, BucketScore, MetricsReport, ScoreTotals, SourceBuckets, UnscoredArticle,
};
use rcl_reference::ReferenceData;

use crate::calculator::score_article;
use crate::revision::RevisionPolicy;

/// Reference article key for an `mcq_responses` row.
///
/// The logged key is used when the revision has a quiz for it. Otherwise the
/// randomization article order is consulted by `article_num`. `None` when
/// neither names a known article.
#[must_use]
pub fn resolve_article_key<'a>(
    log: &'a ParticipantLog,
    response: &'a McqResponse,
    reference: &ReferenceData,
    revision: Revision,
) -> Option<&'a str> {
    if reference.quiz(&response.article_key, revision).is_some() {
        return Some(response.article_key.as_str());
    }
    let fallback = log
        .randomization
        .as_ref()
        .and_then(|rand| rand.article_for(response.article_num))
        .filter(|key| reference.quiz(key, revision).is_some())?;
    tracing::warn!(
        participant = ?log.participant,
        logged = %response.article_key,
        article_num = response.article_num,
        resolved = fallback,
        "unknown article key in mcq_responses; using randomization order"
    );
    Some(fallback)
}

/// `mcq_responses` rows resolved to reference articles, one per article.
pub(crate) struct ResolvedRows<'a> {
    pub(crate) rows: Vec<(&'a str, &'a McqResponse)>,
    pub(crate) unscored: Vec<UnscoredArticle>,
    /// Drops made on the resolved key, after the parser's own dedup.
    pub(crate) dropped: Vec<DroppedDuplicate>,
}

/// Resolve every row's article and apply the log's dedup policy again on the
/// resolved key.
pub(crate) fn resolve_rows<'a>(
    log: &'a ParticipantLog,
    reference: &ReferenceData,
    revision: Revision,
) -> ResolvedRows<'a> {
    let policy = log.diagnostics.dedup_policy;
    let mut resolved = ResolvedRows {
        rows: Vec::with_capacity(log.mcq.len()),
        unscored: Vec::new(),
        dropped: Vec::new(),
    };

    for response in &log.mcq {
        let Some(key) = resolve_article_key(log, response, reference, revision) else {
            tracing::warn!(
                participant = ?log.participant,
                article_key = %response.article_key,
                article_num = response.article_num,
                "no reference quiz for article; leaving it unscored"
            );
            resolved.unscored.push(UnscoredArticle {
                article_num: response.article_num,
                article_key: response.article_key.clone(),
                responses: response.answers.len(),
            });
            continue;
        };

        // Rows logged under different keys can still name the same article.
        let Some(slot) = resolved.rows.iter().position(|(seen, _)| *seen == key) else {
            resolved.rows.push((key, response));
            continue;
        };
        let (kept, dropped) = pick(policy, resolved.rows[slot].1, response);
        tracing::warn!(
            participant = ?log.participant,
            article = key,
            policy = %policy,
            kept = %kept.timestamp,
            dropped = %dropped.timestamp,
            "duplicate mcq_responses row for resolved article dropped"
        );
        resolved.dropped.push(DroppedDuplicate {
            article_key: key.to_string(),
            kept_timestamp: kept.timestamp.clone(),
            dropped_timestamp: dropped.timestamp.clone(),
        });
        resolved.rows[slot].1 = kept;
    }
    resolved
}

/// Score every deduplicated `mcq_responses` row of `log`.
///
/// Rows whose article cannot be resolved are reported under `unscored`
/// instead of failing the participant.
#[must_use]
pub fn score_participant(
    log: &ParticipantLog,
    reference: &ReferenceData,
    policy: &RevisionPolicy,
) -> MetricsReport {
    let (revision, revision_source) = policy.resolve(log);
    let resolved = resolve_rows(log, reference, revision);

    let mut articles = Vec::with_capacity(resolved.rows.len());
    for (key, response) in resolved.rows {
        let questions = reference.questions(key, revision).unwrap_or_default();
        let source_map = reference.source_map(key, revision);
        let timing = response.timing.or_else(|| {
            log.randomization
                .as_ref()
                .and_then(|rand| rand.timing_for(response.article_num))
        });

        articles.push(ArticleScore {
            article_num: response.article_num,
            article_key: key.to_string(),
            timing,
            scores: score_article(&response.answers, questions, source_map),
        });
    }

    let mut dropped_duplicates = log.diagnostics.dropped_duplicates.clone();
    dropped_duplicates.extend(resolved.dropped);
    let totals = totals(&articles);
    MetricsReport {
        participant: log.participant,
        revision,
        revision_source,
        dedup_policy: log.diagnostics.dedup_policy,
        dropped_duplicates,
        json_warnings: log.diagnostics.json_warnings,
        articles,
        totals,
        unscored: resolved.unscored,
    }
}

/// Survivor and loser of two rows for one article, by logged timestamp.
fn pick<'a>(
    policy: DedupPolicy,
    current: &'a McqResponse,
    candidate: &'a McqResponse,
) -> (&'a McqResponse, &'a McqResponse) {
    let candidate_is_later = candidate.timestamp > current.timestamp;
    match (policy, candidate_is_later) {
        (DedupPolicy::KeepFirst, true) | (DedupPolicy::KeepLast, false) => (current, candidate),
        (DedupPolicy::KeepFirst, false) | (DedupPolicy::KeepLast, true) => (candidate, current),
    }
}

fn totals(articles: &[ArticleScore]) -> ScoreTotals {
    articles.iter().fold(
        ScoreTotals {
            overall: BucketScore::empty(),
            by_source: SourceBuckets::empty(),
            false_lures_selected: 0,
            unanswered: 0,
        },
        |acc, article| ScoreTotals {
            overall: acc.overall.combine(article.scores.overall),
            by_source: acc.by_source.combine(article.scores.by_source),
            false_lures_selected: acc.false_lures_selected + article.scores.false_lures_selected,
            unanswered: acc.unanswered + article.scores.unanswered,
        },
    )
}
