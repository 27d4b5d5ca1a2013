use rcl_config::ScoringConfig;
use rcl_core::enums::{DedupPolicy, Revision};
use rcl_metrics::RevisionPolicy;

use crate::cli::root_commands::ScoringArgs;
use crate::commands::shared::parse::parse_enum;

/// `--dedup` if given, else `scoring.dedup_policy`.
pub fn dedup_policy(raw: Option<&str>, config: &ScoringConfig) -> anyhow::Result<DedupPolicy> {
    raw.map_or(Ok(config.dedup_policy), |raw| {
        parse_enum(raw, "dedup policy")
    })
}

/// `--revision` if given, else `scoring.revision` (which may be unset).
pub fn revision_override(
    raw: Option<&str>,
    config: &ScoringConfig,
) -> anyhow::Result<Option<Revision>> {
    raw.map_or(Ok(config.revision), |raw| parse_enum(raw, "revision").map(Some))
}

/// Dedup policy and revision rules for a scoring command.
pub fn scoring_options(
    args: &ScoringArgs,
    config: &ScoringConfig,
) -> anyhow::Result<(DedupPolicy, RevisionPolicy)> {
    let dedup = dedup_policy(args.dedup.as_deref(), config)?;
    let revision = revision_override(args.revision.as_deref(), config)?;
    Ok((dedup, RevisionPolicy::new(revision, config.revision_cutover)))
}
