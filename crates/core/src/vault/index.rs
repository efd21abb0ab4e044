//! On-demand value universe scan across the vault.
//!
//! There is deliberately no persistent index: universes are recomputed from
//! the note files every time a picker opens, so suggestions can never go
//! stale. Unreadable or unparseable notes are skipped with a warning and
//! never fail the scan.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::frontmatter::{self, toggle::field_as_values};
use crate::metadata::entries::present_tags;
use crate::metadata::types::Scalar;

use super::walker::{VaultWalkError, VaultWalker};

/// Every value of `field` across all notes of the vault, as string forms,
/// deduplicated and sorted lexicographically.
pub fn field_universe(
    root: &Path,
    excluded: &[PathBuf],
    field: &str,
) -> Result<Vec<String>, VaultWalkError> {
    let mut values = BTreeSet::new();

    for_each_note(root, excluded, |doc| {
        if let Some(fields) = doc.fields() {
            for value in field_as_values(fields.get(field)) {
                if let Some(scalar) = Scalar::from_yaml(&value) {
                    values.insert(scalar.to_string());
                }
            }
        }
    })?;

    Ok(values.into_iter().collect())
}

/// Every tag across all notes of the vault (frontmatter `tags` plus inline
/// hashtags), deduplicated and sorted lexicographically.
pub fn tag_universe(root: &Path, excluded: &[PathBuf]) -> Result<Vec<String>, VaultWalkError> {
    let mut tags = BTreeSet::new();

    for_each_note(root, excluded, |doc| {
        for entry in present_tags(doc) {
            tags.insert(entry.title_text());
        }
    })?;

    Ok(tags.into_iter().collect())
}

fn for_each_note<F>(root: &Path, excluded: &[PathBuf], mut visit: F) -> Result<(), VaultWalkError>
where
    F: FnMut(&frontmatter::ParsedDocument),
{
    let walker = VaultWalker::with_exclusions(root, excluded.to_vec())?;

    for file in walker.walk()? {
        let content = match fs::read_to_string(&file.absolute_path) {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping unreadable note {}: {e}", file.relative_path.display());
                continue;
            }
        };

        match frontmatter::parse(&content) {
            Ok(doc) => visit(&doc),
            Err(e) => {
                warn!("skipping note with invalid frontmatter {}: {e}", file.relative_path.display());
            }
        }
    }

    Ok(())
}
