//! focus command: set, show, or clear the active note.

use std::path::Path;

use mdmeta_core::config::loader::ConfigLoader;
use mdmeta_core::context::FocusManager;
use tracing::debug;

use crate::FocusArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &FocusArgs) {
    debug!("Running focus");
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdm focus");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let mut manager = match FocusManager::load(&cfg.vault_root) {
        Ok(m) => m,
        Err(e) => {
            println!("FAIL mdm focus");
            println!("{e}");
            std::process::exit(1);
        }
    };

    if args.clear {
        if let Err(e) = manager.clear() {
            println!("FAIL mdm focus");
            println!("{e}");
            std::process::exit(1);
        }
        println!("OK   mdm focus");
        println!("focus cleared");
        return;
    }

    let Some(target) = args.target.as_deref() else {
        match manager.active_note() {
            Some(note) => println!("focused note: {note}"),
            None => println!("no focused note"),
        }
        return;
    };

    if target.extension().and_then(|e| e.to_str()) != Some("md") {
        println!("FAIL mdm focus");
        println!("not a markdown file: {}", target.display());
        std::process::exit(1);
    }

    let absolute = match target.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL mdm focus");
            println!("note does not exist: {} ({e})", target.display());
            std::process::exit(1);
        }
    };

    let root = match cfg.vault_root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL mdm focus");
            println!("vault root does not exist: {} ({e})", cfg.vault_root.display());
            std::process::exit(1);
        }
    };

    let Ok(relative) = absolute.strip_prefix(&root) else {
        println!("FAIL mdm focus");
        println!("note is not inside the vault: {}", absolute.display());
        std::process::exit(1);
    };

    if let Err(e) = manager.set_note(&relative.to_string_lossy()) {
        println!("FAIL mdm focus");
        println!("{e}");
        std::process::exit(1);
    }

    println!("OK   mdm focus");
    println!("note: {}", relative.display());
}
