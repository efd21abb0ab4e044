//! suggest command: batch surface of the suggestion provider.
//!
//! Prints ranked value suggestions for a field, for scripting and shell
//! completion. The synthesized creation candidate is marked with `+`.

use std::path::Path;

use mdmeta_core::config::loader::ConfigLoader;
use mdmeta_core::metadata::{present_for_field, suggest};
use mdmeta_core::store;
use tracing::debug;

use super::flows;
use crate::SuggestArgs;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    note: Option<&Path>,
    args: &SuggestArgs,
) {
    debug!("Running suggest for field {}", args.field);
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdm suggest");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let path = match store::resolve_active_note(note, &cfg) {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL mdm suggest");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let doc = match store::read_note(&path) {
        Ok(doc) => doc,
        Err(e) => {
            println!("FAIL mdm suggest");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let present = present_for_field(&doc, &args.field);
    let universe = flows::universe_entries(&cfg, &args.field);
    let query = args.query.as_deref().unwrap_or("");

    let entries = suggest(&args.field, query, &present, &universe, !args.no_create);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries).unwrap_or_default());
        return;
    }

    for entry in &entries {
        if entry.is_new {
            println!("+ {} (new)", entry.title);
        } else {
            println!("{}", entry.title);
        }
    }
}
