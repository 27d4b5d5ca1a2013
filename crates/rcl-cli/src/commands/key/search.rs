use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, bail};
use rcl_core::enums::Revision;
use rcl_core::ids::ParticipantId;
use rcl_core::records::ParticipantLog;
use rcl_metrics::{RevisionPolicy, SearchParticipant, read_targets, search_answer_key};

use crate::cli::GlobalFlags;
use crate::commands::shared::participant::{find_log, load_log};
use crate::commands::shared::scoring::{dedup_policy, revision_override};
use crate::context::AppContext;
use crate::output::output;

/// Search for answer-key edits that reconcile computed totals with
/// externally reported ones. Reference data is never modified.
pub fn run(
    targets_path: &Path,
    revision: Option<&str>,
    dedup: Option<&str>,
    max_iterations: u32,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let scoring = &ctx.config.scoring;
    let dedup = dedup_policy(dedup, scoring)?;
    let policy = RevisionPolicy::new(revision_override(revision, scoring)?, scoring.revision_cutover);

    let file = File::open(targets_path)
        .with_context(|| format!("failed to open {}", targets_path.display()))?;
    let targets = read_targets(BufReader::new(file))
        .with_context(|| format!("failed to read targets from {}", targets_path.display()))?;

    let mut logs: Vec<(ParticipantId, u32, ParticipantLog)> = Vec::new();
    for (&id, &target) in &targets {
        let Some(path) = find_log(id, ctx.data_dir())? else {
            tracing::warn!(participant = %id, "no log file; skipping target");
            continue;
        };
        logs.push((id, target, load_log(&path, dedup)?));
    }
    if logs.is_empty() {
        bail!(
            "none of the {} target participants has a log in {}",
            targets.len(),
            ctx.data_dir().display()
        );
    }

    let revision = common_revision(&policy, &logs)?;
    let reference = ctx.reference()?;
    let participants = logs
        .iter()
        .map(|(id, target, log)| SearchParticipant::from_log(*id, *target, log, reference, revision))
        .collect::<Vec<_>>();

    let report = search_answer_key(
        revision,
        &reference.answer_keys(revision),
        &participants,
        max_iterations,
    )?;
    tracing::info!(
        initial = report.initial_discrepancy,
        remaining = report.final_discrepancy,
        changes = report.iterations,
        "answer key search finished"
    );
    output(&report, flags.format)
}

/// One key set is searched at a time, so every participant must resolve to
/// the same revision.
fn common_revision(
    policy: &RevisionPolicy,
    logs: &[(ParticipantId, u32, ParticipantLog)],
) -> anyhow::Result<Revision> {
    let resolved = logs
        .iter()
        .map(|(_, _, log)| policy.resolve(log).0)
        .collect::<BTreeSet<_>>();
    match resolved.into_iter().collect::<Vec<_>>().as_slice() {
        [revision] => Ok(*revision),
        _ => bail!("target participants took different quiz revisions; pass --revision"),
    }
}
