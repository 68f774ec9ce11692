use std::collections::BTreeSet;

/// Normalize a raw captured reference.
///
/// Drops everything from the first `?`, then everything from the first `#`,
/// then trims surrounding whitespace. Returns `None` when nothing is left.
pub fn normalize(raw: &str) -> Option<String> {
    let without_query = raw.split_once('?').map_or(raw, |(head, _)| head);
    let without_fragment = without_query
        .split_once('#')
        .map_or(without_query, |(head, _)| head);
    let trimmed = without_fragment.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize every raw reference into the used set.
pub fn normalize_all<I, S>(raw_references: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_references
        .into_iter()
        .filter_map(|raw| normalize(raw.as_ref()))
        .collect()
}
