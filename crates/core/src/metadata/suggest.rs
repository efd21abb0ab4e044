//! Suggestion provider for the metadata pickers.

use super::types::MetadataEntry;

/// Compute the ranked suggestion list for a field.
///
/// Entries already present on the active note are excluded from the universe
/// before filtering, so a value is never suggested twice. The trimmed query
/// then filters by case-insensitive substring match; an empty query returns
/// the whole present-excluded universe in its given order.
///
/// When `allow_create` is set and the query equals neither a present value
/// nor a remaining universe match (case-insensitively), a synthetic
/// `is_new` entry with the query as its title is appended last.
pub fn suggest(
    field: &str,
    query: &str,
    present: &[MetadataEntry],
    universe: &[MetadataEntry],
    allow_create: bool,
) -> Vec<MetadataEntry> {
    let present_titles: Vec<String> =
        present.iter().map(|e| e.title_text().to_lowercase()).collect();

    let mut matches: Vec<MetadataEntry> = universe
        .iter()
        .filter(|e| !present_titles.contains(&e.title_text().to_lowercase()))
        .cloned()
        .collect();

    let trimmed = query.trim();
    if trimmed.is_empty() {
        return matches;
    }

    let needle = trimmed.to_lowercase();
    matches.retain(|e| e.title_text().to_lowercase().contains(&needle));

    // Creating a value that is already on the note would be a no-op toggle,
    // and an exact universe match is selectable directly above.
    let present_exact = present_titles.iter().any(|t| *t == needle);
    let universe_exact = matches.iter().any(|e| e.title_text().to_lowercase() == needle);

    if allow_create && !present_exact && !universe_exact {
        matches.push(MetadataEntry::created(trimmed, field));
    }

    matches
}
