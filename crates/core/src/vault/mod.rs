//! Vault discovery and the on-demand value universe scan.

pub mod index;
pub mod walker;

pub use index::{field_universe, tag_universe};
pub use walker::{VaultWalkError, VaultWalker, WalkedFile};
