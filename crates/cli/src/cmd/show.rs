//! show command: table of the active note's metadata.

use std::path::Path;

use mdmeta_core::config::loader::ConfigLoader;
use mdmeta_core::metadata::all_present;
use mdmeta_core::store;

use super::flows;

pub fn run(config: Option<&Path>, profile: Option<&str>, note: Option<&Path>) {
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdm show");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let path = match store::resolve_active_note(note, &cfg) {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL mdm show");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let doc = match store::read_note(&path) {
        Ok(doc) => doc,
        Err(e) => {
            println!("FAIL mdm show");
            println!("{e}");
            std::process::exit(1);
        }
    };

    println!("note: {}", flows::display_note(&cfg, &path));

    let entries = all_present(&doc);
    if entries.is_empty() {
        println!("(no metadata)");
        return;
    }

    let field_width =
        entries.iter().map(|e| e.field.len()).max().unwrap_or(5).clamp(5, 30);

    println!("{:<field_width$}  VALUE", "FIELD", field_width = field_width);
    println!("{:-<field_width$}  {:-<30}", "", "", field_width = field_width);
    for entry in &entries {
        println!("{:<field_width$}  {}", entry.field, entry.title, field_width = field_width);
    }
}
