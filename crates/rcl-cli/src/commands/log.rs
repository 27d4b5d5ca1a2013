#[path = "log/append.rs"]
mod append;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogCommands;
use crate::context::AppContext;

/// Handle `rcl log`.
pub fn handle(action: &LogCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LogCommands::Append {
            participant,
            phase,
            fields,
        } => append::run(participant, phase, fields, ctx, flags),
    }
}
