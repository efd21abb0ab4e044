//! Present-value readers: the active note's entries for a field.
//!
//! Entries are computed from the parsed document each time a picker opens or
//! a command runs; nothing is cached.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::frontmatter::toggle::field_as_values;
use crate::frontmatter::ParsedDocument;

use super::types::{MetadataEntry, Scalar};

// Inline tags like #reading or #projects/open, outside the frontmatter block.
static INLINE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)#([A-Za-z0-9_][A-Za-z0-9_/-]*)").unwrap());

/// Entries for one field of the note, in stored order.
///
/// Non-scalar YAML items (mappings, booleans) are skipped.
pub fn present_values(doc: &ParsedDocument, field: &str) -> Vec<MetadataEntry> {
    let Some(fields) = doc.fields() else {
        return Vec::new();
    };

    field_as_values(fields.get(field))
        .iter()
        .filter_map(Scalar::from_yaml)
        .map(|scalar| MetadataEntry::existing(scalar, field))
        .collect()
}

/// Tag entries of the note: the frontmatter `tags` field plus inline
/// `#hashtags` scanned from the body, deduplicated, `#` stripped.
pub fn present_tags(doc: &ParsedDocument) -> Vec<MetadataEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for entry in present_values(doc, "tags") {
        let tag = entry.title_text().trim_start_matches('#').to_string();
        if !tag.is_empty() && seen.insert(tag.clone()) {
            entries.push(MetadataEntry::existing(Scalar::Text(tag), "tags"));
        }
    }

    for cap in INLINE_TAG_RE.captures_iter(&doc.body) {
        let tag = cap[1].to_string();
        if seen.insert(tag.clone()) {
            entries.push(MetadataEntry::existing(Scalar::Text(tag), "tags"));
        }
    }

    entries
}

/// Every `(field, scalar)` pair of the note's frontmatter, sorted by field
/// then value for a stable browse listing.
pub fn all_present(doc: &ParsedDocument) -> Vec<MetadataEntry> {
    let Some(fields) = doc.fields() else {
        return Vec::new();
    };

    let mut keys: Vec<&String> = fields.keys().collect();
    keys.sort();

    let mut entries = Vec::new();
    for key in keys {
        for value in field_as_values(fields.get(key)) {
            if let Some(scalar) = Scalar::from_yaml(&value) {
                entries.push(MetadataEntry::existing(scalar, key.clone()));
            }
        }
    }
    entries
}

/// Dispatch: tags go through the tag reader (frontmatter plus inline),
/// everything else reads the field directly.
pub fn present_for_field(doc: &ParsedDocument, field: &str) -> Vec<MetadataEntry> {
    if field == "tags" {
        present_tags(doc)
    } else {
        present_values(doc, field)
    }
}
