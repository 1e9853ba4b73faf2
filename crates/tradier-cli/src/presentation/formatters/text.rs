/// Date part of an ISO-8601 timestamp.
///
/// Keeps the first ten characters; assumes the date always leads at a fixed
/// offset (`2026-02-17T14:30:00.000Z` -> `2026-02-17`).
pub fn short_date(value: &str) -> String {
    match value.char_indices().nth(10) {
        Some((end, _)) => value[..end].to_string(),
        None => value.to_string(),
    }
}
