//! Focus state types.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Root focus state structure.
///
/// Serialized to `.mdmeta/state/focus.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FocusState {
    /// Currently focused note (if any).
    #[serde(default)]
    pub note: Option<FocusNote>,
}

/// The focused note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusNote {
    /// Vault-relative path of the note.
    pub path: String,

    /// When the focus was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Local>>,
}

impl FocusNote {
    /// Create a new focus entry for a note.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), since: Some(Local::now()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_note_records_timestamp() {
        let note = FocusNote::new("notes/today.md");
        assert_eq!(note.path, "notes/today.md");
        assert!(note.since.is_some());
    }

    #[test]
    fn state_roundtrips_through_toml() {
        let state = FocusState { note: Some(FocusNote::new("a.md")) };
        let serialized = toml::to_string_pretty(&state).unwrap();
        let parsed: FocusState = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.note.unwrap().path, "a.md");
    }
}
