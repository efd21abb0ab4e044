//! Activity log: append-only JSONL record of metadata edits.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::config::types::ResolvedConfig;

/// Error type for activity logging.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("failed to write activity log: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize entry: {0}")]
    Serialize(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, ActivityError>;

/// A metadata edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Remove,
    Modify,
}

/// One logged edit.
#[derive(Debug, Serialize)]
pub struct ActivityEntry {
    pub ts: DateTime<Utc>,
    pub op: Operation,
    pub field: String,
    pub value: String,
    pub note: String,
}

/// Appends metadata edits to `.mdmeta/activity.jsonl` under the vault root.
pub struct ActivityLog {
    log_path: PathBuf,
    vault_root: PathBuf,
}

impl ActivityLog {
    const LOG_FILE: &'static str = ".mdmeta/activity.jsonl";

    /// Create an activity log for the given vault.
    pub fn new(vault_root: &Path) -> Self {
        Self { log_path: vault_root.join(Self::LOG_FILE), vault_root: vault_root.to_path_buf() }
    }

    /// Create from resolved configuration.
    pub fn from_config(cfg: &ResolvedConfig) -> Self {
        Self::new(&cfg.vault_root)
    }

    /// Record one edit. Call sites treat failures as non-fatal.
    pub fn record(&self, op: Operation, field: &str, value: &str, note: &Path) -> Result<()> {
        let entry = ActivityEntry {
            ts: Utc::now(),
            op,
            field: field.to_string(),
            value: value.to_string(),
            note: self.relativize(note),
        };

        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(&entry)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.log_path)?;
        writeln!(file, "{json}")?;
        Ok(())
    }

    fn relativize(&self, path: &Path) -> String {
        path.strip_prefix(&self.vault_root).unwrap_or(path).display().to_string()
    }
}
