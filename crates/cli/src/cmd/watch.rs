//! watch command: open the guided add flow when a new note appears.

use std::path::{Component, Path};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use notify::{recommended_watcher, EventKind, RecursiveMode, Watcher};
use tracing::{debug, warn};

use mdmeta_core::config::loader::ConfigLoader;
use mdmeta_core::config::types::ResolvedConfig;
use mdmeta_core::context::FocusManager;

use super::add;

/// How long to let the creating editor settle before the flow opens.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdm watch");
            println!("{e}");
            std::process::exit(1);
        }
    };

    if !cfg.vault_root.is_dir() {
        println!("FAIL mdm watch");
        println!("vault root does not exist: {}", cfg.vault_root.display());
        std::process::exit(1);
    }

    let (tx, rx) = mpsc::channel();
    let mut watcher = match recommended_watcher(tx) {
        Ok(w) => w,
        Err(e) => {
            println!("FAIL mdm watch");
            println!("failed to create watcher: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = watcher.watch(&cfg.vault_root, RecursiveMode::Recursive) {
        println!("FAIL mdm watch");
        println!("failed to watch {}: {e}", cfg.vault_root.display());
        std::process::exit(1);
    }

    println!("watching {} for new notes (ctrl-c to stop)", cfg.vault_root.display());

    for result in rx {
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                warn!("watch error: {e}");
                continue;
            }
        };

        if !matches!(event.kind, EventKind::Create(_)) {
            continue;
        }

        for path in &event.paths {
            if is_watched_note(&cfg, path) {
                on_note_created(&cfg, path);
            }
        }
    }
}

fn is_watched_note(cfg: &ResolvedConfig, path: &Path) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some("md") {
        return false;
    }

    let Ok(relative) = path.strip_prefix(&cfg.vault_root) else {
        return false;
    };

    // Hidden files and directories never trigger the flow.
    let hidden = relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    });
    if hidden {
        return false;
    }

    !cfg.excluded_folders.iter().any(|excluded| relative.starts_with(excluded))
}

fn on_note_created(cfg: &ResolvedConfig, path: &Path) {
    debug!("note created: {}", path.display());

    // Let the creating editor finish writing before the flow opens.
    thread::sleep(SETTLE_DELAY);

    if !path.is_file() {
        return;
    }

    let relative = path.strip_prefix(&cfg.vault_root).unwrap_or(path);

    match FocusManager::load(&cfg.vault_root) {
        Ok(mut manager) => {
            if let Err(e) = manager.set_note(&relative.to_string_lossy()) {
                warn!("failed to focus new note: {e}");
            }
        }
        Err(e) => warn!("failed to load focus state: {e}"),
    }

    println!("new note: {}", relative.display());
    let edits = add::guided_flow(cfg, path);
    println!("edits: {edits}");
}
