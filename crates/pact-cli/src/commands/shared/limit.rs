/// Compute effective limit with precedence: global flag -> fallback.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> usize {
    usize::try_from(global.unwrap_or(fallback)).unwrap_or(usize::MAX)
}

/// Keep at most `limit` leading items when a limit is set.
#[must_use]
pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<u32>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    items
}
