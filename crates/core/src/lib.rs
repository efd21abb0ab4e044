//! Core library for mdmeta: frontmatter metadata management for markdown vaults.
//!
//! The crate is split along the same seams as the CLI that consumes it:
//! frontmatter parsing and the toggle-style field update, the metadata entry
//! model with its suggestion provider, the on-demand vault scan, the note
//! store with its atomic read-modify-write, and the ambient pieces (config,
//! focus context, activity log).

pub mod activity;
pub mod config;
pub mod context;
pub mod frontmatter;
pub mod metadata;
pub mod store;
pub mod vault;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
