//! Guided add flow: pick a field, then pick or type a value.

use std::path::Path;

use mdmeta_core::config::loader::ConfigLoader;
use mdmeta_core::config::types::ResolvedConfig;
use mdmeta_core::store;
use tracing::debug;

use super::flows;
use crate::picker;
use crate::AddArgs;

struct FieldChoice {
    label: &'static str,
    field: &'static str,
    /// Free-text fields skip the suggestion picker.
    free_text: bool,
}

const FIELD_CHOICES: &[FieldChoice] = &[
    FieldChoice { label: "Add Category", field: "category", free_text: false },
    FieldChoice { label: "Add Tag", field: "tags", free_text: false },
    FieldChoice { label: "Add Alias", field: "aliases", free_text: true },
    FieldChoice { label: "Add Year", field: "year", free_text: true },
    FieldChoice { label: "Add Author", field: "author", free_text: false },
];

pub fn run(config: Option<&Path>, profile: Option<&str>, note: Option<&Path>, args: &AddArgs) {
    debug!("Running guided add");
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdm add");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let path = match store::resolve_active_note(note, &cfg) {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL mdm add");
            println!("{e}");
            std::process::exit(1);
        }
    };

    if args.value.is_some() && args.field.is_none() {
        println!("FAIL mdm add");
        println!("--value requires --field");
        std::process::exit(1);
    }

    // Batch path: --field with --value, no pickers.
    if let Some(field) = args.field.as_deref() {
        let Some(value) = args.value.as_deref() else {
            println!("FAIL mdm add");
            println!("--field requires --value");
            std::process::exit(1);
        };
        let value = value.trim();
        if value.is_empty() {
            println!("FAIL mdm add");
            println!("no value provided");
            std::process::exit(1);
        }
        if field == "year" && !value.chars().all(|c| c.is_ascii_digit()) {
            println!("FAIL mdm add");
            println!("year must be digits only");
            std::process::exit(1);
        }

        match flows::apply_toggle(&cfg, &path, field, value) {
            Ok(added) => {
                println!("OK   mdm add");
                println!("note: {}", flows::display_note(&cfg, &path));
                if added {
                    println!("added \"{value}\" to {field}");
                } else {
                    println!("removed \"{value}\" from {field}");
                }
            }
            Err(e) => {
                println!("FAIL mdm add");
                println!("{e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let edits = guided_flow(&cfg, &path);
    println!("OK   mdm add");
    println!("note:  {}", flows::display_note(&cfg, &path));
    println!("edits: {edits}");
}

/// The interactive field-choice loop. Re-renders after every edit until the
/// user cancels; returns the number of edits made.
pub fn guided_flow(cfg: &ResolvedConfig, note: &Path) -> usize {
    let labels: Vec<&str> = FIELD_CHOICES.iter().map(|c| c.label).collect();
    let mut edits = 0;

    loop {
        let Some(index) = picker::pick_action("Add metadata to the active note", &labels)
        else {
            break;
        };
        let choice = &FIELD_CHOICES[index];

        let value = if choice.free_text {
            match picker::prompt_value(choice.field, choice.field, None) {
                Some(raw) => {
                    let trimmed = raw.trim().to_string();
                    if trimmed.is_empty() {
                        println!("no value provided");
                        continue;
                    }
                    trimmed
                }
                None => continue,
            }
        } else {
            match flows::pick_value(cfg, note, choice.field) {
                Some(v) => v,
                None => continue,
            }
        };

        match flows::apply_toggle(cfg, note, choice.field, &value) {
            Ok(added) => {
                if added {
                    println!("added \"{value}\" to {}", choice.field);
                } else {
                    println!("removed \"{value}\" from {}", choice.field);
                }
                edits += 1;
            }
            Err(e) => println!("{e}"),
        }
    }

    edits
}
