mod articles;
mod questions;
mod types;
mod validate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReferenceCommands;
use crate::context::AppContext;

/// Handle `rcl reference`.
pub fn handle(
    action: &ReferenceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReferenceCommands::Articles => articles::run(ctx, flags),
        ReferenceCommands::Questions { article, revision } => {
            questions::run(article, revision.as_deref(), ctx, flags)
        }
        ReferenceCommands::Validate => validate::run(ctx, flags),
    }
}
