mod list;
mod new;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ParticipantCommands;
use crate::context::AppContext;

/// Handle `rcl participant`.
pub fn handle(
    action: &ParticipantCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ParticipantCommands::New { name } => new::run(name, ctx, flags),
        ParticipantCommands::List => list::run(ctx, flags),
    }
}
