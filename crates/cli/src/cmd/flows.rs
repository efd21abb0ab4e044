//! Shared pieces of the add/toggle flows.

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use mdmeta_core::activity::{ActivityLog, Operation};
use mdmeta_core::config::types::ResolvedConfig;
use mdmeta_core::metadata::{present_for_field, suggest, MetadataEntry, Scalar};
use mdmeta_core::store::{self, StoreError};
use mdmeta_core::vault;

use crate::picker::{self, Selection};

/// All known values of a field across the vault, as suggestion entries.
///
/// A failed scan degrades to an empty universe instead of aborting the
/// flow; creating new values still works without one.
pub fn universe_entries(cfg: &ResolvedConfig, field: &str) -> Vec<MetadataEntry> {
    let scanned = if field == "tags" {
        vault::tag_universe(&cfg.vault_root, &cfg.excluded_folders)
    } else {
        vault::field_universe(&cfg.vault_root, &cfg.excluded_folders, field)
    };

    match scanned {
        Ok(values) => values
            .into_iter()
            .map(|v| MetadataEntry::existing(Scalar::Text(v), field))
            .collect(),
        Err(e) => {
            eprintln!("Warning: vault scan failed: {e}");
            Vec::new()
        }
    }
}

/// The YAML value a raw input stores as: the year field stores digits as a
/// number, everything else as text.
pub fn parse_candidate(field: &str, raw: &str) -> Value {
    if field == "year" {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Number(n.into());
        }
    }
    Value::String(raw.to_string())
}

/// Toggle a value on a note's field and record it in the activity log.
///
/// Returns whether the value was added (false: an existing match was
/// removed).
pub fn apply_toggle(
    cfg: &ResolvedConfig,
    note: &Path,
    field: &str,
    value_text: &str,
) -> Result<bool, StoreError> {
    let candidate = parse_candidate(field, value_text);

    let doc = store::read_note(note)?;
    let was_present = mdmeta_core::metadata::present_values(&doc, field)
        .iter()
        .any(|e| e.title_text() == value_text);

    store::update_frontmatter(note, |fields| {
        mdmeta_core::frontmatter::toggle_field(fields, field, &candidate)
    })?;

    let op = if was_present { Operation::Remove } else { Operation::Add };
    if let Err(e) = ActivityLog::from_config(cfg).record(op, field, value_text, note) {
        debug!("activity log write failed: {e}");
    }

    Ok(!was_present)
}

/// Interactive value selection for one field: suggestion picker over the
/// vault universe, with a free-text prompt behind the "create new" item.
///
/// Returns the chosen value, or `None` when the user cancels.
pub fn pick_value(cfg: &ResolvedConfig, note: &Path, field: &str) -> Option<String> {
    loop {
        let doc = match store::read_note(note) {
            Ok(doc) => doc,
            Err(e) => {
                println!("{e}");
                return None;
            }
        };

        let present = present_for_field(&doc, field);
        let universe = universe_entries(cfg, field);
        let entries = suggest(field, "", &present, &universe, false);

        match picker::pick_entry(&format!("Select a {field} to add"), &entries, true)? {
            Selection::Existing(index) => return Some(entries[index].title_text()),
            Selection::CreateNew => {
                let raw = picker::prompt_value(&format!("New {field}"), field, None)?;
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    println!("no value provided");
                    continue;
                }

                // Re-run the provider with the typed query: an entry comes
                // back only when the value is creatable or selectable, not
                // when it is already on the note.
                let proposals = suggest(field, trimmed, &present, &universe, true);
                let allowed = proposals.iter().any(|e| {
                    e.is_new || e.title_text().to_lowercase() == trimmed.to_lowercase()
                });
                if !allowed {
                    println!("\"{trimmed}\" is already on the note");
                    continue;
                }

                return Some(trimmed.to_string());
            }
        }
    }
}

/// Print the note path the way notices refer to it: vault-relative when
/// possible.
pub fn display_note(cfg: &ResolvedConfig, note: &Path) -> String {
    note.strip_prefix(&cfg.vault_root).unwrap_or(note).display().to_string()
}

/// The add-tag / add-category command body, shared between the two fields.
pub fn run_add_value(
    cmd: &str,
    cfg: &ResolvedConfig,
    note: Option<&Path>,
    field: &str,
    value: Option<&str>,
) {
    let path = match store::resolve_active_note(note, cfg) {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL mdm {cmd}");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let value = match value {
        Some(v) => v.trim().to_string(),
        None => match pick_value(cfg, &path, field) {
            Some(v) => v,
            None => {
                println!("cancelled");
                return;
            }
        },
    };

    if value.is_empty() {
        println!("FAIL mdm {cmd}");
        println!("no value provided");
        std::process::exit(1);
    }

    match apply_toggle(cfg, &path, field, &value) {
        Ok(added) => {
            println!("OK   mdm {cmd}");
            println!("note: {}", display_note(cfg, &path));
            if added {
                println!("added \"{value}\" to {field}");
            } else {
                println!("removed \"{value}\" from {field}");
            }
        }
        Err(e) => {
            println!("FAIL mdm {cmd}");
            println!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_digits_become_numbers() {
        assert_eq!(parse_candidate("year", "2012"), Value::Number(2012.into()));
        assert_eq!(parse_candidate("year", "around 2012"), Value::String("around 2012".into()));
        assert_eq!(parse_candidate("tags", "2012"), Value::String("2012".into()));
    }
}
