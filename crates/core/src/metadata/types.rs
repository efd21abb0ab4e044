//! Metadata entry types.

use serde::Serialize;
use serde_yaml::Value;
use std::fmt;

/// A scalar metadata value: text or a number.
///
/// These are the only value shapes a metadata field may hold. Display (and
/// therefore equality everywhere in this crate) goes through the string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(i64),
}

impl Scalar {
    /// Convert a YAML value into a scalar, if it is one.
    ///
    /// Non-integer numbers are carried as text so that string-form equality
    /// stays consistent with how they print.
    pub fn from_yaml(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Scalar::Number(i)),
                None => Some(Scalar::Text(n.to_string())),
            },
            _ => None,
        }
    }

    /// The YAML value this scalar stores as.
    pub fn to_yaml(&self) -> Value {
        match self {
            Scalar::Text(s) => Value::String(s.clone()),
            Scalar::Number(n) => Value::Number((*n).into()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// One value of one frontmatter field, either already present on a note or
/// synthesized as a creation candidate.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataEntry {
    pub title: Scalar,
    pub field: String,
    pub is_new: bool,
}

impl MetadataEntry {
    /// An entry for a value that exists on a note or in the vault.
    pub fn existing(title: Scalar, field: impl Into<String>) -> Self {
        Self { title, field: field.into(), is_new: false }
    }

    /// A synthesized creation candidate that exists nowhere yet.
    pub fn created(title: impl Into<String>, field: impl Into<String>) -> Self {
        Self { title: Scalar::Text(title.into()), field: field.into(), is_new: true }
    }

    /// The entry title's string form.
    pub fn title_text(&self) -> String {
        self.title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_from_yaml() {
        assert_eq!(Scalar::from_yaml(&Value::String("a".into())), Some(Scalar::Text("a".into())));
        assert_eq!(Scalar::from_yaml(&Value::Number(7.into())), Some(Scalar::Number(7)));
        assert_eq!(Scalar::from_yaml(&Value::Bool(true)), None);
        assert_eq!(Scalar::from_yaml(&Value::Null), None);
    }

    #[test]
    fn scalar_display_is_string_form() {
        assert_eq!(Scalar::Number(2012).to_string(), "2012");
        assert_eq!(Scalar::Text("2012".into()).to_string(), "2012");
    }

    #[test]
    fn created_entries_are_text() {
        let entry = MetadataEntry::created("2012", "year");
        assert!(entry.is_new);
        assert_eq!(entry.title, Scalar::Text("2012".into()));
    }
}
