//! Full parse -> toggle -> serialize chains over real note files.

use std::fs;

use serde_yaml::Value;
use tempfile::tempdir;

use mdmeta_core::frontmatter::toggle::toggle_field;
use mdmeta_core::frontmatter::parse;
use mdmeta_core::store::update_frontmatter;

fn toggle_on_file(path: &std::path::Path, field: &str, value: Value) -> bool {
    update_frontmatter(path, |fields| toggle_field(fields, field, &value)).unwrap()
}

#[test]
fn category_grows_from_absent_to_sequence_and_collapses_back() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("note.md");
    fs::write(&note, "# A note\n").unwrap();

    // absent -> scalar
    assert!(toggle_on_file(&note, "category", Value::String("philosophy".into())));
    let doc = parse(&fs::read_to_string(&note).unwrap()).unwrap();
    let fields = doc.fields().unwrap();
    assert_eq!(fields.get("category").and_then(|v| v.as_str()), Some("philosophy"));

    // scalar -> sequence
    assert!(toggle_on_file(&note, "category", Value::String("ethics".into())));
    let doc = parse(&fs::read_to_string(&note).unwrap()).unwrap();
    let seq = doc.fields().unwrap().get("category").and_then(|v| v.as_sequence()).unwrap();
    assert_eq!(seq.len(), 2);

    // sequence -> scalar (collapse)
    assert!(toggle_on_file(&note, "category", Value::String("philosophy".into())));
    let doc = parse(&fs::read_to_string(&note).unwrap()).unwrap();
    let fields = doc.fields().unwrap();
    assert_eq!(fields.get("category").and_then(|v| v.as_str()), Some("ethics"));

    // scalar -> absent, frontmatter block disappears with its last field
    assert!(toggle_on_file(&note, "category", Value::String("ethics".into())));
    let content = fs::read_to_string(&note).unwrap();
    assert!(!content.contains("---"));
    assert!(content.contains("# A note"));
}

#[test]
fn quoted_year_and_numeric_year_are_the_same_value() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("note.md");
    fs::write(&note, "---\nyear: \"2012\"\n---\n\nbody\n").unwrap();

    // toggling the number 2012 removes the string "2012"
    assert!(toggle_on_file(&note, "year", Value::Number(2012.into())));
    let doc = parse(&fs::read_to_string(&note).unwrap()).unwrap();
    assert!(doc.frontmatter.is_none() || !doc.fields().unwrap().contains_key("year"));
}

#[test]
fn unrelated_fields_survive_a_toggle() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("note.md");
    fs::write(&note, "---\nauthor: Arendt\naliases: [HA]\n---\n\nbody\n").unwrap();

    toggle_on_file(&note, "tags", Value::String("reading".into()));

    let doc = parse(&fs::read_to_string(&note).unwrap()).unwrap();
    let fields = doc.fields().unwrap();
    assert_eq!(fields.get("author").and_then(|v| v.as_str()), Some("Arendt"));
    assert!(fields.contains_key("aliases"));
    assert_eq!(fields.get("tags").and_then(|v| v.as_str()), Some("reading"));
}
