//! add-tag command implementation.

use std::path::Path;

use mdmeta_core::config::loader::{default_config_path, ConfigLoader};
use tracing::debug;

use super::flows;
use crate::AddValueArgs;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    note: Option<&Path>,
    args: &AddValueArgs,
) {
    debug!("Running add-tag");
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdm add-tag");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    flows::run_add_value("add-tag", &cfg, note, "tags", args.value.as_deref());
}
