/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `limit` items, logging how many were cut.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: u32, what: &str) {
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    if items.len() > limit {
        tracing::info!(shown = limit, total = items.len(), "{what} truncated; raise --limit");
        items.truncate(limit);
    }
}
