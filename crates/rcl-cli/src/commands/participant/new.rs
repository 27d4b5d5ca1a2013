use anyhow::Context;
use rcl_core::responses::ParticipantAllocation;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Allocate the next ID. The caller holds the data directory lock.
pub fn run(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = ctx.registry();
    let entry = registry
        .allocate(name)
        .with_context(|| format!("failed to update {}", registry.path().display()))?;
    let registered = registry.count()?;
    let log_file = ctx.config.data.log_path(entry.participant_id.log_file_name());

    tracing::info!(participant = %entry.participant_id, registered, "participant registered");
    let response = ParticipantAllocation {
        participant: entry,
        log_file: log_file.display().to_string(),
        registered,
    };
    output(&response, flags.format)
}
