//! remove command: browse, modify, or delete the active note's metadata.

use std::path::Path;

use mdmeta_core::activity::{ActivityLog, Operation};
use mdmeta_core::config::loader::ConfigLoader;
use mdmeta_core::config::types::ResolvedConfig;
use mdmeta_core::frontmatter::toggle_field;
use mdmeta_core::metadata::{all_present, present_values, MetadataEntry};
use mdmeta_core::store;
use tracing::debug;

use super::flows;
use crate::picker;
use crate::RemoveArgs;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    note: Option<&Path>,
    args: &RemoveArgs,
) {
    debug!("Running remove");
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdm remove");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let path = match store::resolve_active_note(note, &cfg) {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL mdm remove");
            println!("{e}");
            std::process::exit(1);
        }
    };

    if let Some(value) = args.value.as_deref() {
        run_batch(&cfg, &path, args.field.as_deref(), value, args.replace.as_deref());
        return;
    }

    let edits = browse_loop(&cfg, &path);
    println!("OK   mdm remove");
    println!("note:  {}", flows::display_note(&cfg, &path));
    println!("edits: {edits}");
}

fn run_batch(
    cfg: &ResolvedConfig,
    path: &Path,
    field: Option<&str>,
    value: &str,
    replace: Option<&str>,
) {
    let Some(field) = field else {
        println!("FAIL mdm remove");
        println!("--value requires --field");
        std::process::exit(1);
    };

    let doc = match store::read_note(path) {
        Ok(doc) => doc,
        Err(e) => {
            println!("FAIL mdm remove");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let present = present_values(&doc, field);
    if !present.iter().any(|e| e.title_text() == value) {
        println!("FAIL mdm remove");
        println!("\"{value}\" is not present in {field}");
        std::process::exit(1);
    }

    match replace {
        Some(replacement) => {
            let replacement = replacement.trim();
            if replacement.is_empty() {
                println!("FAIL mdm remove");
                println!("no value provided");
                std::process::exit(1);
            }
            if replacement == value {
                println!("OK   mdm remove");
                println!("no change made");
                return;
            }
            match modify_value(cfg, path, field, value, replacement) {
                Ok(()) => {
                    println!("OK   mdm remove");
                    println!("note: {}", flows::display_note(cfg, path));
                    println!("modified \"{value}\" to \"{replacement}\" in {field}");
                }
                Err(e) => {
                    println!("FAIL mdm remove");
                    println!("{e}");
                    std::process::exit(1);
                }
            }
        }
        None => match delete_value(cfg, path, field, value) {
            Ok(()) => {
                println!("OK   mdm remove");
                println!("note: {}", flows::display_note(cfg, path));
                println!("removed \"{value}\" from {field}");
            }
            Err(e) => {
                println!("FAIL mdm remove");
                println!("{e}");
                std::process::exit(1);
            }
        },
    }
}

/// Browse every `(field, value)` pair, act on selections, re-render from
/// live metadata after each action. Ends on cancel or when nothing remains.
fn browse_loop(cfg: &ResolvedConfig, path: &Path) -> usize {
    let mut edits = 0;

    loop {
        let doc = match store::read_note(path) {
            Ok(doc) => doc,
            Err(e) => {
                println!("{e}");
                break;
            }
        };

        let entries = all_present(&doc);
        if entries.is_empty() {
            if edits > 0 {
                println!("all metadata removed");
            } else {
                println!("no metadata on the active note");
            }
            break;
        }

        let Some(index) =
            picker::pick_present("Select metadata to modify or delete", &entries)
        else {
            break;
        };
        let entry = &entries[index];

        let Some(action) = picker::pick_action(
            &format!("\"{}\" in {}", entry.title, entry.field),
            &["Modify value", "Delete value", "Back"],
        ) else {
            continue;
        };

        match action {
            0 => {
                if modify_selected(cfg, path, entry) {
                    edits += 1;
                }
            }
            1 => {
                let value = entry.title_text();
                match delete_value(cfg, path, &entry.field, &value) {
                    Ok(()) => {
                        println!("removed \"{value}\" from {}", entry.field);
                        edits += 1;
                    }
                    Err(e) => println!("{e}"),
                }
            }
            _ => continue,
        }
    }

    edits
}

/// Prompt for a replacement, seeded with the old value. Returns whether a
/// mutation happened.
fn modify_selected(cfg: &ResolvedConfig, path: &Path, entry: &MetadataEntry) -> bool {
    let old = entry.title_text();

    let Some(raw) = picker::prompt_value(
        &format!("New value for {}", entry.field),
        &entry.field,
        Some(&old),
    ) else {
        return false;
    };

    let new = raw.trim();
    if new.is_empty() {
        println!("no value provided, modification cancelled");
        return false;
    }
    if new == old {
        println!("no change made");
        return false;
    }

    match modify_value(cfg, path, &entry.field, &old, new) {
        Ok(()) => {
            println!("modified \"{old}\" to \"{new}\" in {}", entry.field);
            true
        }
        Err(e) => {
            println!("{e}");
            false
        }
    }
}

/// Remove `old` and add `new` in a single atomic update.
fn modify_value(
    cfg: &ResolvedConfig,
    path: &Path,
    field: &str,
    old: &str,
    new: &str,
) -> Result<(), store::StoreError> {
    let old_candidate = flows::parse_candidate(field, old);
    let new_candidate = flows::parse_candidate(field, new);

    store::update_frontmatter(path, |fields| {
        toggle_field(fields, field, &old_candidate);
        toggle_field(fields, field, &new_candidate);
        true
    })?;

    if let Err(e) = ActivityLog::from_config(cfg).record(Operation::Modify, field, new, path) {
        debug!("activity log write failed: {e}");
    }
    Ok(())
}

fn delete_value(
    cfg: &ResolvedConfig,
    path: &Path,
    field: &str,
    value: &str,
) -> Result<(), store::StoreError> {
    let candidate = flows::parse_candidate(field, value);

    store::update_frontmatter(path, |fields| toggle_field(fields, field, &candidate))?;

    if let Err(e) = ActivityLog::from_config(cfg).record(Operation::Remove, field, value, path) {
        debug!("activity log write failed: {e}");
    }
    Ok(())
}
