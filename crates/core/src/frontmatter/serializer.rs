//! Frontmatter serialization back to markdown.

use super::types::ParsedDocument;
use serde_yaml::Value;
use std::collections::HashMap;

/// Serialize a parsed document back to markdown string.
///
/// A document whose frontmatter has no fields left serializes without a
/// frontmatter block at all.
pub fn serialize(doc: &ParsedDocument) -> String {
    serialize_with_order(doc, None)
}

/// Serialize a parsed document with optional field ordering.
pub fn serialize_with_order(doc: &ParsedDocument, order: Option<&[String]>) -> String {
    if let Some(fm) = &doc.frontmatter {
        if !fm.fields.is_empty() {
            let yaml = serialize_fields(&fm.fields, order);
            return format!("---\n{}---\n\n{}", yaml, doc.body);
        }
    }
    doc.body.clone()
}

/// Serialize frontmatter fields to YAML string.
fn serialize_fields(fields: &HashMap<String, Value>, order: Option<&[String]>) -> String {
    let mut mapping = serde_yaml::Mapping::new();

    let mut added_keys = Vec::new();

    // 1. Add fields in specified order
    if let Some(order_list) = order {
        for key in order_list {
            if let Some(value) = fields.get(key) {
                mapping.insert(Value::String(key.clone()), value.clone());
                added_keys.push(key.clone());
            }
        }
    }

    // 2. Add remaining fields (sorted alphabetically)
    let mut remaining: Vec<_> = fields.keys().filter(|k| !added_keys.contains(k)).collect();
    remaining.sort();

    for key in remaining {
        if let Some(value) = fields.get(key) {
            mapping.insert(Value::String(key.clone()), value.clone());
        }
    }

    serde_yaml::to_string(&mapping).unwrap_or_default()
}
