//! doctor command: validate configuration and print resolved paths.

use std::path::Path;

use mdmeta_core::config::loader::{default_config_path, ConfigLoader};
use mdmeta_core::context::FocusManager;
use mdmeta_core::vault::VaultWalker;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdm doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    if !cfg.vault_root.is_dir() {
        println!("FAIL mdm doctor");
        println!("vault root does not exist: {}", cfg.vault_root.display());
        std::process::exit(1);
    }

    let note_count = VaultWalker::with_exclusions(&cfg.vault_root, cfg.excluded_folders.clone())
        .and_then(|w| w.walk())
        .map(|files| files.len());

    println!("OK   mdm doctor");
    println!("mdmeta:     v{}", mdmeta_core::version());
    println!("profile:    {}", cfg.active_profile);
    println!("vault_root: {}", cfg.vault_root.display());
    match note_count {
        Ok(count) => println!("notes:      {count}"),
        Err(e) => println!("notes:      unavailable ({e})"),
    }

    match FocusManager::load(&cfg.vault_root) {
        Ok(manager) => match manager.active_note() {
            Some(note) => println!("focus:      {note}"),
            None => println!("focus:      (none)"),
        },
        Err(e) => println!("focus:      unreadable ({e})"),
    }
}
