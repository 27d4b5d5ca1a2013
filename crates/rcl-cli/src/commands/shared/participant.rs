//! Resolving `<participant>` arguments to log files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rcl_core::enums::DedupPolicy;
use rcl_core::ids::ParticipantId;
use rcl_core::records::ParticipantLog;
use rcl_log::LogParser;

/// Every `P<nnn>[-name]_log.csv` in `data_dir`, sorted by participant then
/// file name.
pub fn list_logs(data_dir: &Path) -> anyhow::Result<Vec<(ParticipantId, PathBuf)>> {
    let entries = std::fs::read_dir(data_dir)
        .with_context(|| format!("failed to read data directory {}", data_dir.display()))?;

    let mut logs = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read data directory {}", data_dir.display()))?
            .path();
        let id = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(ParticipantId::from_log_file_name);
        if let Some(id) = id {
            if path.is_file() {
                logs.push((id, path));
            }
        }
    }
    logs.sort();
    Ok(logs)
}

/// The log file for `id`, preferring the unnamed `P078_log.csv` form.
pub fn find_log(id: ParticipantId, data_dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    let default = data_dir.join(id.log_file_name());
    if default.is_file() {
        return Ok(Some(default));
    }

    let mut matches = list_logs(data_dir)?
        .into_iter()
        .filter(|(found, _)| *found == id)
        .map(|(_, path)| path);
    let first = matches.next();
    if let Some(first) = &first {
        let extra = matches.count();
        if extra > 0 {
            tracing::warn!(
                participant = %id,
                using = %first.display(),
                ignored = extra,
                "several log files for one participant"
            );
        }
    }
    Ok(first)
}

/// An existing file path is used as is; anything else must be a participant
/// ID with a log in `data_dir`.
pub fn resolve_log_path(raw: &str, data_dir: &Path) -> anyhow::Result<PathBuf> {
    let candidate = Path::new(raw);
    if candidate.is_file() {
        return Ok(candidate.to_path_buf());
    }

    let id = raw
        .parse::<ParticipantId>()
        .with_context(|| format!("'{raw}' is neither a log file nor a participant ID"))?;
    find_log(id, data_dir)?
        .with_context(|| format!("no log file for {id} in {}", data_dir.display()))
}

/// Parse a log file under `policy`.
pub fn load_log(path: &Path, policy: DedupPolicy) -> anyhow::Result<ParticipantLog> {
    LogParser::new(policy)
        .parse_path(path)
        .with_context(|| format!("failed to parse {}", path.display()))
}
