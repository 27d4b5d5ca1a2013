use rcl_metrics::build_report;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScoreArgs;
use crate::commands::metrics::score;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rcl analyze`.
pub fn handle(args: &ScoreArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (log, metrics) = score(args, ctx)?;
    let report = build_report(&log, ctx.reference()?, metrics);
    output(&report, flags.format)
}
