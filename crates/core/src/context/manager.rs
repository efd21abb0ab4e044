//! Focus manager for persistent active-note state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::context::types::{FocusNote, FocusState};

/// Error type for focus operations.
#[derive(Debug, thiserror::Error)]
pub enum FocusError {
    #[error("failed to read focus state: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse focus state: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize focus state: {0}")]
    Serialize(#[from] toml::ser::Error),
}

type Result<T> = std::result::Result<T, FocusError>;

/// Manages persistent focus state.
///
/// State is stored in `.mdmeta/state/focus.toml` within the vault.
#[derive(Debug)]
pub struct FocusManager {
    /// Path to the focus state file.
    state_path: PathBuf,

    /// Current focus state.
    state: FocusState,
}

impl FocusManager {
    /// State file location relative to vault root.
    const STATE_DIR: &'static str = ".mdmeta/state";
    const STATE_FILE: &'static str = "focus.toml";

    /// Load focus state for a vault.
    ///
    /// A missing state file yields the default (no focus).
    pub fn load(vault_root: &Path) -> Result<Self> {
        let state_dir = vault_root.join(Self::STATE_DIR);
        let state_path = state_dir.join(Self::STATE_FILE);

        let state = if state_path.exists() {
            let content = fs::read_to_string(&state_path)?;
            toml::from_str(&content)?
        } else {
            FocusState::default()
        };

        Ok(Self { state_path, state })
    }

    /// Save current state to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(&self.state)?;
        fs::write(&self.state_path, content)?;
        Ok(())
    }

    /// Focus a note (vault-relative path). Replaces any existing focus.
    pub fn set_note(&mut self, path: &str) -> Result<()> {
        self.state.note = Some(FocusNote::new(path));
        self.save()
    }

    /// Clear the current focus.
    pub fn clear(&mut self) -> Result<()> {
        self.state.note = None;
        self.save()
    }

    /// The focused note's vault-relative path, if any.
    pub fn active_note(&self) -> Option<&str> {
        self.state.note.as_ref().map(|n| n.path.as_str())
    }

    /// Check if there is an active focus.
    pub fn has_focus(&self) -> bool {
        self.state.note.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_state_means_no_focus() {
        let dir = TempDir::new().unwrap();
        let manager = FocusManager::load(dir.path()).unwrap();
        assert!(!manager.has_focus());
        assert_eq!(manager.active_note(), None);
    }

    #[test]
    fn set_and_reload_focus() {
        let dir = TempDir::new().unwrap();

        let mut manager = FocusManager::load(dir.path()).unwrap();
        manager.set_note("notes/today.md").unwrap();

        let reloaded = FocusManager::load(dir.path()).unwrap();
        assert_eq!(reloaded.active_note(), Some("notes/today.md"));
    }

    #[test]
    fn clear_removes_focus() {
        let dir = TempDir::new().unwrap();

        let mut manager = FocusManager::load(dir.path()).unwrap();
        manager.set_note("a.md").unwrap();
        manager.clear().unwrap();

        let reloaded = FocusManager::load(dir.path()).unwrap();
        assert!(!reloaded.has_focus());
    }
}
