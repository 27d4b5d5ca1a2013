use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use rcl_core::responses::DatasetExportResponse;
use rcl_metrics::{dataset_rows, score_participant, write_dataset_csv};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DatasetArgs;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::participant::{list_logs, load_log};
use crate::commands::shared::scoring::scoring_options;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `rcl dataset`.
///
/// A log that fails to parse is skipped and named in `failed`; the rest of
/// the dataset is still produced.
pub fn handle(args: &DatasetArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (dedup, policy) = scoring_options(&args.scoring, &ctx.config.scoring)?;
    let logs = list_logs(ctx.data_dir())?;
    let reference = ctx.reference()?;

    let progress = Progress::bar(logs.len() as u64, "scoring logs");
    let mut rows = Vec::new();
    let mut failed = Vec::new();
    let mut participants = 0_u32;
    for (id, path) in &logs {
        progress.set_message(&id.to_string());
        match load_log(path, dedup) {
            Ok(log) => {
                let metrics = score_participant(&log, reference, &policy);
                rows.extend(dataset_rows(&log, &metrics));
                participants += 1;
            }
            Err(error) => {
                tracing::warn!(participant = %id, "skipping log: {error:#}");
                failed.push(path.display().to_string());
            }
        }
        progress.inc();
    }
    progress.finish_clear();

    let Some(out_path) = &args.output else {
        if let Some(limit) = flags.limit {
            apply_limit(&mut rows, limit, "dataset rows");
        }
        return output(&rows, flags.format);
    };

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let file = File::create(out_path)
        .with_context(|| format!("failed to create {}", out_path.display()))?;
    write_dataset_csv(BufWriter::new(file), &rows)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    let response = DatasetExportResponse {
        path: out_path.display().to_string(),
        participants,
        rows: u32::try_from(rows.len()).unwrap_or(u32::MAX),
        failed,
    };
    output(&response, flags.format)
}
