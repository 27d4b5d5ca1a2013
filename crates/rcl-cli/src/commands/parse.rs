use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseArgs;
use crate::commands::shared::participant::{load_log, resolve_log_path};
use crate::commands::shared::scoring::dedup_policy;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rcl parse`.
pub fn handle(args: &ParseArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = resolve_log_path(&args.participant, ctx.data_dir())?;
    let policy = dedup_policy(args.dedup.as_deref(), &ctx.config.scoring)?;
    let log = load_log(&path, policy)?;
    output(&log, flags.format)
}
