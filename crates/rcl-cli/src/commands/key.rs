#[path = "key/search.rs"]
mod search;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::KeyCommands;
use crate::context::AppContext;

/// Handle `rcl key`.
pub fn handle(action: &KeyCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        KeyCommands::Search {
            targets,
            revision,
            dedup,
            max_iterations,
        } => search::run(
            targets,
            revision.as_deref(),
            dedup.as_deref(),
            *max_iterations,
            ctx,
            flags,
        ),
    }
}
