//! Toggle-style frontmatter field updates.
//!
//! A field holds either a single scalar or an ordered sequence of scalars.
//! Toggling a candidate value appends it when absent and removes every match
//! when present, then collapses the result: zero values remove the field,
//! one value is stored as a bare scalar, more stay a sequence.

use serde_yaml::Value;
use std::collections::HashMap;

/// Result of toggling a candidate against a field's existing values.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    /// The field's new value, or `None` when the field should be removed.
    pub value: Option<Value>,
    /// Whether the document changed. Always true for well-formed calls;
    /// call sites use it to decide whether to report a notice.
    pub changed: bool,
}

/// String form used for value equality.
///
/// Matching by string form makes the numeric `2012` and the string `"2012"`
/// the same value, tolerating mixed scalar typing in hand-edited documents.
pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn same_value(a: &Value, b: &Value) -> bool {
    match (value_text(a), value_text(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Toggle `candidate` against a list of existing values.
///
/// Non-scalar values (mappings, booleans) are never considered matches and
/// pass through untouched.
pub fn toggle_values(existing: &[Value], candidate: &Value) -> ToggleOutcome {
    let has_item = existing.iter().any(|v| same_value(v, candidate));

    let mut values: Vec<Value> = if has_item {
        existing.iter().filter(|v| !same_value(v, candidate)).cloned().collect()
    } else {
        let mut values = existing.to_vec();
        values.push(candidate.clone());
        values
    };

    let value = match values.len() {
        0 => None,
        1 => Some(values.remove(0)),
        _ => Some(Value::Sequence(values)),
    };

    ToggleOutcome { value, changed: true }
}

/// Toggle `candidate` on a field of a frontmatter field map.
///
/// The field is read as a list (absent or null: empty, scalar: one element,
/// sequence: its items), toggled, and written back with the collapsing rule
/// applied. Returns whether the map changed.
pub fn toggle_field(
    fields: &mut HashMap<String, Value>,
    field: &str,
    candidate: &Value,
) -> bool {
    let existing = field_as_values(fields.get(field));
    let outcome = toggle_values(&existing, candidate);

    match outcome.value {
        Some(value) => {
            fields.insert(field.to_string(), value);
        }
        None => {
            fields.remove(field);
        }
    }
    outcome.changed
}

/// Normalize a field's stored value into a list of values.
pub fn field_as_values(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(seq)) => seq.clone(),
        Some(other) => vec![other.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(s: &str) -> Value {
        Value::String(s.to_string())
    }

    fn num(n: i64) -> Value {
        Value::Number(n.into())
    }

    #[test]
    fn absent_candidate_is_appended() {
        let existing = vec![text("ethics")];
        let outcome = toggle_values(&existing, &text("reason"));
        assert!(outcome.changed);
        let seq = outcome.value.unwrap();
        let seq = seq.as_sequence().unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[1].as_str(), Some("reason"));
    }

    #[test]
    fn adding_to_empty_yields_bare_scalar() {
        let outcome = toggle_values(&[], &text("philosophy"));
        assert!(outcome.changed);
        assert_eq!(outcome.value.unwrap().as_str(), Some("philosophy"));
    }

    #[test]
    fn removing_collapses_to_scalar() {
        let existing = vec![text("philosophy"), text("ethics")];
        let outcome = toggle_values(&existing, &text("philosophy"));
        assert_eq!(outcome.value.unwrap().as_str(), Some("ethics"));
    }

    #[test]
    fn removing_last_value_removes_the_field() {
        let existing = vec![text("solo")];
        let outcome = toggle_values(&existing, &text("solo"));
        assert!(outcome.changed);
        assert!(outcome.value.is_none());
    }

    #[test]
    fn removes_every_string_equal_match() {
        let existing = vec![text("2012"), num(2012), text("keep")];
        let outcome = toggle_values(&existing, &num(2012));
        assert_eq!(outcome.value.unwrap().as_str(), Some("keep"));
    }

    #[rstest]
    #[case(text("2012"), num(2012))]
    #[case(num(2012), text("2012"))]
    fn string_and_number_forms_are_the_same_value(#[case] stored: Value, #[case] candidate: Value) {
        let outcome = toggle_values(&[stored], &candidate);
        assert!(outcome.changed);
        assert!(outcome.value.is_none());
    }

    #[test]
    fn double_toggle_restores_normalized_form() {
        let existing = vec![text("a"), text("b")];
        let added = toggle_values(&existing, &text("c"));
        let with_c = field_as_values(added.value.as_ref());
        let removed = toggle_values(&with_c, &text("c"));
        let restored = field_as_values(removed.value.as_ref());
        assert_eq!(restored, existing);
    }

    #[test]
    fn non_scalar_values_pass_through() {
        let existing = vec![Value::Bool(true), text("real")];
        let outcome = toggle_values(&existing, &text("real"));
        assert_eq!(outcome.value.unwrap(), Value::Bool(true));
    }

    #[test]
    fn toggle_field_inserts_and_removes() {
        let mut fields = HashMap::new();

        assert!(toggle_field(&mut fields, "category", &text("history")));
        assert_eq!(fields.get("category").and_then(|v| v.as_str()), Some("history"));

        assert!(toggle_field(&mut fields, "category", &text("history")));
        assert!(!fields.contains_key("category"));
    }

    #[test]
    fn toggle_field_promotes_scalar_to_sequence() {
        let mut fields = HashMap::new();
        fields.insert("category".to_string(), text("philosophy"));

        toggle_field(&mut fields, "category", &text("ethics"));

        let seq = fields.get("category").and_then(|v| v.as_sequence()).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].as_str(), Some("philosophy"));
        assert_eq!(seq[1].as_str(), Some("ethics"));
    }

    #[test]
    fn toggle_field_treats_null_as_absent() {
        let mut fields = HashMap::new();
        fields.insert("tags".to_string(), Value::Null);

        toggle_field(&mut fields, "tags", &text("rust"));
        assert_eq!(fields.get("tags").and_then(|v| v.as_str()), Some("rust"));
    }
}
