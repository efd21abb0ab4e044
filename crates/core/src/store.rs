//! Note store: active-note resolution and atomic frontmatter updates.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::types::ResolvedConfig;
use crate::context::{FocusError, FocusManager};
use crate::frontmatter::{self, Frontmatter, FrontmatterParseError, ParsedDocument};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no active markdown note (pass --note or set one with `mdm focus`)")]
    NoActiveNote,

    #[error("not a markdown file: {0}")]
    NotMarkdown(PathBuf),

    #[error("failed to access note {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid frontmatter in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FrontmatterParseError,
    },

    #[error("failed to read focus state: {0}")]
    Focus(#[from] FocusError),
}

/// Resolve the note a command operates on.
///
/// An explicit path wins; otherwise the persistent focus context supplies
/// one. Either way the result must be an existing `.md` file.
pub fn resolve_active_note(
    explicit: Option<&Path>,
    cfg: &ResolvedConfig,
) -> Result<PathBuf, StoreError> {
    if let Some(path) = explicit {
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            return Err(StoreError::NotMarkdown(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "note does not exist"),
            });
        }
        return Ok(path.to_path_buf());
    }

    let focus = FocusManager::load(&cfg.vault_root)?;
    match focus.active_note() {
        Some(relative) => {
            let path = cfg.vault_root.join(relative);
            if path.is_file() {
                debug!("resolved active note from focus: {}", path.display());
                Ok(path)
            } else {
                // The focused note is gone; treat as no active note.
                Err(StoreError::NoActiveNote)
            }
        }
        None => Err(StoreError::NoActiveNote),
    }
}

/// Read and parse a note.
pub fn read_note(path: &Path) -> Result<ParsedDocument, StoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StoreError::Io { path: path.to_path_buf(), source: e })?;
    frontmatter::parse(&content)
        .map_err(|e| StoreError::Parse { path: path.to_path_buf(), source: e })
}

/// Atomically read-modify-write a note's frontmatter.
///
/// The mutation closure receives the field map and reports whether it
/// changed anything; an unchanged map leaves the file untouched. The new
/// content is written to a temp file in the same directory and renamed over
/// the original, so no partially-written note is ever observable.
pub fn update_frontmatter<F>(path: &Path, mutate: F) -> Result<bool, StoreError>
where
    F: FnOnce(&mut HashMap<String, Value>) -> bool,
{
    let doc = read_note(path)?;

    let mut fields = doc.frontmatter.map(|fm| fm.fields).unwrap_or_default();
    let changed = mutate(&mut fields);

    if changed {
        let updated =
            ParsedDocument { frontmatter: Some(Frontmatter { fields }), body: doc.body };
        let content = frontmatter::serialize(&updated);
        write_atomic(path, &content)
            .map_err(|e| StoreError::Io { path: path.to_path_buf(), source: e })?;
        debug!("updated frontmatter of {}", path.display());
    }

    Ok(changed)
}

fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid note path"))?;

    // Hidden temp name so a concurrent vault scan never picks it up.
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}
