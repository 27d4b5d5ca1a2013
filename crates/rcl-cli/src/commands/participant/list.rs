use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = ctx.registry();
    let mut entries = registry
        .list()
        .with_context(|| format!("failed to read {}", registry.path().display()))?;
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    apply_limit(&mut entries, limit, "participants");
    output(&entries, flags.format)
}
