use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use rcl_core::enums::Phase;
use rcl_core::ids::ParticipantId;
use rcl_core::responses::LogAppendResponse;
use rcl_log::LogWriter;

use crate::cli::GlobalFlags;
use crate::commands::shared::participant::find_log;
use crate::context::AppContext;
use crate::output::output;

/// Append one row. The caller holds the data directory lock.
pub fn run(
    participant: &str,
    phase: &str,
    fields: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if phase.trim().is_empty() {
        bail!("phase must not be empty");
    }
    let fields = parse_fields(fields)?;
    let (id, path) = target_log(participant, ctx.data_dir())?;

    let decoded = Phase::from_label(phase);
    if decoded.is_none() {
        tracing::warn!(phase, "phase has no decoded layout; `rcl parse` will skip this row");
    }

    let outcome = LogWriter
        .append(&path, phase, &fields)
        .with_context(|| format!("failed to append to {}", path.display()))?;
    tracing::debug!(participant = %id, phase, created = outcome.created, "row appended");

    let response = LogAppendResponse {
        participant: id,
        phase_label: phase.to_string(),
        phase: decoded,
        path: path.display().to_string(),
        created: outcome.created,
        fields: u32::try_from(outcome.fields).unwrap_or(u32::MAX),
    };
    output(&response, flags.format)
}

/// A participant ID appends to its existing log, or starts `P<nnn>_log.csv`.
/// Anything else is a log path whose file name names the participant.
fn target_log(raw: &str, data_dir: &Path) -> anyhow::Result<(ParticipantId, PathBuf)> {
    if let Ok(id) = raw.parse::<ParticipantId>() {
        let path = find_log(id, data_dir)?.unwrap_or_else(|| data_dir.join(id.log_file_name()));
        return Ok((id, path));
    }

    let path = PathBuf::from(raw);
    let id = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(ParticipantId::from_log_file_name)
        .with_context(|| {
            format!("'{raw}' is neither a participant ID nor a P<nnn>_log.csv path")
        })?;
    Ok((id, path))
}

/// `KEY=VALUE` pairs in argument order. Values may contain `=`.
fn parse_fields(raw: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    raw.iter()
        .map(|pair| {
            let Some((key, value)) = pair.split_once('=') else {
                bail!("field '{pair}' must be KEY=VALUE");
            };
            let key = key.trim();
            if key.is_empty() {
                bail!("field '{pair}' has an empty key");
            }
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}
