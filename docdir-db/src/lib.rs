//! SQLite persistence layer for the provider directory.
//!
//! Provides schema creation, provider CRUD, and snapshot fetching backed by
//! SQLite (via rusqlite with bundled feature). Callers refetch a full
//! snapshot after every mutation; this crate never hands out deltas.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, clear_providers, delete_provider, get_provider, insert_provider,
    insert_providers, update_provider,
};
pub use queries::{
    DirectoryStats, FETCH_PAGE_SIZE, directory_stats, fetch_page, fetch_snapshot,
    fetch_snapshot_paged, provider_count,
};
pub use schema::{SchemaError, open_database, open_memory};

pub use rusqlite::Connection;
