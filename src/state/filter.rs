//! Case-insensitive substring matching for the gallery and employee search.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Join a card's designated text fields into one lower-cased searchable
/// string. Computed at filter time, not cached.
pub fn searchable_text<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A card is visible iff the trimmed, lower-cased query is empty or a
/// substring of its searchable text.
pub fn matches(searchable: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || searchable.contains(&query)
}
