//! Persistent focus context: which note commands operate on by default.

pub mod manager;
pub mod types;

pub use manager::{FocusError, FocusManager};
pub use types::{FocusNote, FocusState};
