use rcl_core::enums::Revision;

use super::types::ArticleListing;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reference = ctx.reference()?;
    let count = |key: &str, revision| reference.questions(key, revision).map_or(0, <[_]>::len);

    let listings = reference
        .articles()
        .iter()
        .map(|article| ArticleListing {
            key: article.key.clone(),
            title: article.title.clone(),
            word_count: article.word_count(),
            v1_questions: count(&article.key, Revision::V1),
            v2_questions: count(&article.key, Revision::V2),
        })
        .collect::<Vec<_>>();
    output(&listings, flags.format)
}
