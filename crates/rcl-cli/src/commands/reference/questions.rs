use anyhow::Context;
use rcl_core::enums::Revision;

use super::types::QuestionListing;
use crate::cli::GlobalFlags;
use crate::commands::shared::scoring::revision_override;
use crate::context::AppContext;
use crate::output::output;

/// Questions default to the revised quiz unless `--revision` or
/// `scoring.revision` says otherwise.
pub fn run(
    article: &str,
    revision: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let revision = revision_override(revision, &ctx.config.scoring)?.unwrap_or(Revision::V2);
    let reference = ctx.reference()?;
    let quiz = reference.quiz(article, revision).with_context(|| {
        format!(
            "no {revision} quiz for article '{article}' (known: {})",
            reference.article_keys().join(", ")
        )
    })?;

    let listings = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionListing {
            index,
            text: question.text.clone(),
            options: question.options.clone(),
            correct: question.correct,
            source_type: quiz.source_map.source_of(index),
            lure: quiz.source_map.lure_option(index),
        })
        .collect::<Vec<_>>();
    output(&listings, flags.format)
}
