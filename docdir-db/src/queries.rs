//! Read queries for the provider database.
//!
//! The engine only ever works on complete snapshots, so the main entry
//! point is [`fetch_snapshot`], which pages through the table and folds the
//! pages with a [`PageAccumulator`].

use docdir_catalog::types::{Provider, ProviderId, Snapshot};
use docdir_lib::{PageAccumulator, facets};
use rusqlite::{Connection, params};

use crate::operations::OperationError;

/// Rows fetched per page when assembling a snapshot.
pub const FETCH_PAGE_SIZE: usize = 1000;

pub(crate) const PROVIDER_COLUMNS: &str = "id, display_name, profession, region, province, \
     suburb, telephone, address, profile_picture_url";

// ── Paging ──────────────────────────────────────────────────────────────────

/// Fetch one page of providers ordered by id.
pub fn fetch_page(
    conn: &Connection,
    offset: usize,
    limit: usize,
) -> Result<Vec<Provider>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PROVIDER_COLUMNS} FROM providers ORDER BY id LIMIT ?1 OFFSET ?2"
    ))?;
    let rows = stmt.query_map(params![limit as i64, offset as i64], row_to_provider)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch the full provider set as a snapshot.
pub fn fetch_snapshot(conn: &Connection) -> Result<Snapshot, OperationError> {
    fetch_snapshot_paged(conn, FETCH_PAGE_SIZE)
}

/// Fetch the full provider set, `page_size` rows at a time.
pub fn fetch_snapshot_paged(conn: &Connection, page_size: usize) -> Result<Snapshot, OperationError> {
    let mut acc = PageAccumulator::new(page_size);
    loop {
        let page = fetch_page(conn, acc.next_offset(), acc.page_size())?;
        if !acc.append(page) {
            break;
        }
    }
    log::debug!(
        "Fetched {} providers in {} pages",
        acc.items().len(),
        acc.pages()
    );
    Ok(Snapshot::new(acc.into_items()))
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Count stored providers.
pub fn provider_count(conn: &Connection) -> Result<i64, OperationError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM providers", [], |r| r.get(0))?)
}

/// Get overall directory statistics.
///
/// Distinct professions and suburbs are counted by normalized value, the
/// same way the listing facets group them.
pub fn directory_stats(conn: &Connection) -> Result<DirectoryStats, OperationError> {
    let providers = provider_count(conn)?;
    let max_id: Option<i64> = conn.query_row("SELECT MAX(id) FROM providers", [], |r| r.get(0))?;
    let last_updated: Option<String> =
        conn.query_row("SELECT MAX(updated_at) FROM providers", [], |r| r.get(0))?;

    let snapshot = fetch_snapshot(conn)?;
    let facets = facets(snapshot.providers());

    Ok(DirectoryStats {
        providers,
        max_id: max_id.map(ProviderId),
        professions: facets.professions.len() as i64,
        suburbs: facets.suburbs.len() as i64,
        last_updated,
    })
}

/// Summary statistics for the stored directory.
#[derive(Debug)]
pub struct DirectoryStats {
    pub providers: i64,
    pub max_id: Option<ProviderId>,
    pub professions: i64,
    pub suburbs: i64,
    pub last_updated: Option<String>,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

pub(crate) fn row_to_provider(row: &rusqlite::Row<'_>) -> rusqlite::Result<Provider> {
    Ok(Provider {
        id: ProviderId(row.get(0)?),
        display_name: row.get(1)?,
        profession: row.get(2)?,
        region: row.get(3)?,
        province: row.get(4)?,
        suburb: row.get(5)?,
        telephone: row.get(6)?,
        address: row.get(7)?,
        profile_picture_url: row.get(8)?,
    })
}
