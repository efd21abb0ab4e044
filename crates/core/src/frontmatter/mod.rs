//! Frontmatter parsing, toggling, and serialization.
//!
//! This module provides functionality to:
//! - Parse YAML frontmatter from markdown documents
//! - Toggle a scalar value in and out of a frontmatter field
//! - Serialize documents back to markdown with frontmatter

pub mod parser;
pub mod serializer;
pub mod toggle;
pub mod types;

pub use parser::{parse, FrontmatterParseError};
pub use serializer::{serialize, serialize_with_order};
pub use toggle::{toggle_field, toggle_values, ToggleOutcome};
pub use types::{Frontmatter, ParsedDocument};
