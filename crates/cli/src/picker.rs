//! Interactive pickers.
//!
//! One picker surface covers every dialog shape the flows need: a fuzzy
//! list select over metadata entries, a plain action select, and a
//! validated free-text prompt with optional seeded input. Cancelling any of
//! them returns `None`; callers abandon the pending operation.

use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input, Select};
use mdmeta_core::metadata::MetadataEntry;

/// What the user chose in an entry picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the entry slice that was shown.
    Existing(usize),
    /// The trailing "create a new value" item.
    CreateNew,
}

/// Fuzzy list select over metadata entries.
///
/// With `allow_create`, a "create a new value" item is appended after the
/// entries. Returns `None` on cancel or when there is nothing to show.
pub fn pick_entry(
    prompt: &str,
    entries: &[MetadataEntry],
    allow_create: bool,
) -> Option<Selection> {
    let mut items: Vec<String> = entries.iter().map(render_entry).collect();
    if allow_create {
        items.push("create a new value...".to_string());
    }
    if items.is_empty() {
        return None;
    }

    let index = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .ok()
        .flatten()?;

    if allow_create && index == entries.len() {
        Some(Selection::CreateNew)
    } else {
        Some(Selection::Existing(index))
    }
}

/// Fuzzy list select over a note's `(field, value)` pairs for the browse
/// flow. Returns the chosen index, `None` on cancel.
pub fn pick_present(prompt: &str, entries: &[MetadataEntry]) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }

    let items: Vec<String> = entries
        .iter()
        .map(|e| format!("{}  [{}]", e.title, e.field))
        .collect();

    FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .ok()
        .flatten()
}

/// Plain select over a small action list. Returns the chosen index.
pub fn pick_action(prompt: &str, actions: &[&str]) -> Option<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(actions)
        .default(0)
        .interact_opt()
        .ok()
        .flatten()
}

/// Free-text prompt with per-field validation and optional seeded input.
///
/// The `year` field accepts digits only. Returns the raw input, `None` on
/// cancel; blank input is the caller's empty-input case.
pub fn prompt_value(prompt: &str, field: &str, initial: Option<&str>) -> Option<String> {
    let theme = ColorfulTheme::default();

    let mut input = Input::<String>::with_theme(&theme);
    input = input.with_prompt(prompt);
    input = input.allow_empty(true);

    if field == "year" {
        input = input.validate_with(|value: &String| -> Result<(), &str> {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed.chars().all(|c| c.is_ascii_digit()) {
                Ok(())
            } else {
                Err("year must be digits only")
            }
        });
    }

    if let Some(init) = initial {
        input = input.with_initial_text(init);
    }

    input.interact_text().ok()
}

fn render_entry(entry: &MetadataEntry) -> String {
    if entry.is_new {
        format!("create new {}: \"{}\"", entry.field, entry.title)
    } else {
        entry.title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdmeta_core::metadata::Scalar;

    #[test]
    fn render_marks_creation_candidates() {
        let existing = MetadataEntry::existing(Scalar::Text("rust".into()), "tags");
        assert_eq!(render_entry(&existing), "rust");

        let created = MetadataEntry::created("rust", "tags");
        assert_eq!(render_entry(&created), "create new tags: \"rust\"");
    }
}
