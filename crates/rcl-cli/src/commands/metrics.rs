use rcl_core::records::ParticipantLog;
use rcl_core::scores::MetricsReport;
use rcl_metrics::score_participant;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScoreArgs;
use crate::commands::shared::participant::{load_log, resolve_log_path};
use crate::commands::shared::scoring::scoring_options;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rcl metrics`.
pub fn handle(args: &ScoreArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (_, report) = score(args, ctx)?;
    output(&report, flags.format)
}

/// Parse and score the log named by `args`.
pub fn score(
    args: &ScoreArgs,
    ctx: &mut AppContext,
) -> anyhow::Result<(ParticipantLog, MetricsReport)> {
    let path = resolve_log_path(&args.participant, ctx.data_dir())?;
    let (dedup, policy) = scoring_options(&args.scoring, &ctx.config.scoring)?;
    let log = load_log(&path, dedup)?;

    let report = score_participant(&log, ctx.reference()?, &policy);
    tracing::debug!(
        participant = ?report.participant,
        revision = %report.revision,
        questions = report.questions_processed(),
        "scored participant"
    );
    Ok((log, report))
}
