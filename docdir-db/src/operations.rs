//! CRUD operations for provider records.
//!
//! Storage assigns ids; any id carried by a record passed to
//! [`insert_provider`] is ignored.

use docdir_catalog::types::{Provider, ProviderId};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::queries::{PROVIDER_COLUMNS, row_to_provider};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Provider not found: {0}")]
    NotFound(ProviderId),
}

// ── Create ──────────────────────────────────────────────────────────────────

/// Insert a new provider. Returns the id assigned by storage.
pub fn insert_provider(conn: &Connection, provider: &Provider) -> Result<ProviderId, OperationError> {
    conn.execute(
        "INSERT INTO providers (display_name, profession, region, province, suburb,
                                telephone, address, profile_picture_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            provider.display_name,
            provider.profession,
            provider.region,
            provider.province,
            provider.suburb,
            provider.telephone,
            provider.address,
            provider.profile_picture_url,
        ],
    )?;
    Ok(ProviderId(conn.last_insert_rowid()))
}

/// Insert many providers in one transaction. Returns the assigned ids in
/// input order.
pub fn insert_providers(
    conn: &mut Connection,
    providers: &[Provider],
) -> Result<Vec<ProviderId>, OperationError> {
    let tx = conn.transaction()?;
    let ids = providers
        .iter()
        .map(|p| insert_provider(&tx, p))
        .collect::<Result<Vec<_>, _>>()?;
    tx.commit()?;
    log::debug!("Inserted {} providers", ids.len());
    Ok(ids)
}

// ── Read ────────────────────────────────────────────────────────────────────

/// Fetch one provider by id.
pub fn get_provider(conn: &Connection, id: ProviderId) -> Result<Option<Provider>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PROVIDER_COLUMNS} FROM providers WHERE id = ?1"
    ))?;
    stmt.query_row(params![id.0], row_to_provider)
        .optional()
        .map_err(Into::into)
}

// ── Update ──────────────────────────────────────────────────────────────────

/// Overwrite every field of an existing provider.
pub fn update_provider(conn: &Connection, provider: &Provider) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE providers SET
             display_name = ?2,
             profession = ?3,
             region = ?4,
             province = ?5,
             suburb = ?6,
             telephone = ?7,
             address = ?8,
             profile_picture_url = ?9,
             updated_at = datetime('now')
         WHERE id = ?1",
        params![
            provider.id.0,
            provider.display_name,
            provider.profession,
            provider.region,
            provider.province,
            provider.suburb,
            provider.telephone,
            provider.address,
            provider.profile_picture_url,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound(provider.id));
    }
    Ok(())
}

// ── Delete ──────────────────────────────────────────────────────────────────

/// Delete a provider. Its id is never handed out again.
pub fn delete_provider(conn: &Connection, id: ProviderId) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM providers WHERE id = ?1", params![id.0])?;
    if changed == 0 {
        return Err(OperationError::NotFound(id));
    }
    Ok(())
}

/// Delete every provider. Returns how many rows were removed.
pub fn clear_providers(conn: &Connection) -> Result<usize, OperationError> {
    Ok(conn.execute("DELETE FROM providers", [])?)
}
