use anyhow::bail;
use rcl_core::enums::Revision;
use rcl_reference::{ReferenceData, ReferenceError};

use super::types::ValidationReport;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Print every consistency issue, then fail if there were any.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = ctx.config.scoring.reference_dir.as_deref();
    let source = dir.map_or_else(|| "builtin".to_string(), |dir| dir.display().to_string());
    let loaded = match dir {
        Some(dir) => ReferenceData::from_dir(dir),
        None => ReferenceData::builtin(),
    };

    let report = match loaded {
        Ok(data) => ValidationReport {
            source,
            valid: true,
            articles: data.articles().len(),
            revisions: Revision::ALL.to_vec(),
            issues: Vec::new(),
        },
        Err(ReferenceError::Invalid { issues }) => ValidationReport {
            source,
            valid: false,
            articles: 0,
            revisions: Revision::ALL.to_vec(),
            issues,
        },
        Err(error) => return Err(error.into()),
    };

    output(&report, flags.format)?;
    if !report.valid {
        bail!("reference data has {} issue(s)", report.issues.len());
    }
    Ok(())
}
