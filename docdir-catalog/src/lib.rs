//! Provider directory data model, text normalization, slug codec, and
//! snapshot loading.
//!
//! This crate defines the provider record without any database dependencies.
//! Consumers can use these types directly for serialization, display, or
//! passing to `docdir-db` for persistence.

pub mod loader;
pub mod normalize;
pub mod slug;
pub mod types;

pub use loader::{SnapshotError, load_csv, load_snapshot, load_yaml};
pub use normalize::normalize;
pub use slug::{SLUG_PREFIX, SlugParts, decode, encode, slugify_segment};
pub use types::*;
