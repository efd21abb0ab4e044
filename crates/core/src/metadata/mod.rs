//! Metadata entry model, present-value readers, and the suggestion provider.

pub mod entries;
pub mod suggest;
pub mod types;

pub use entries::{all_present, present_for_field, present_tags, present_values};
pub use suggest::suggest;
pub use types::{MetadataEntry, Scalar};
