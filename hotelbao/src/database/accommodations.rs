//! SQL for the `accommodations` table.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::accommodation::{Accommodation, AccommodationDraft};
use crate::error::{Error, Result};
use crate::id::AccommodationId;
use crate::money::Money;

use super::store::{from_unix_secs, now_secs};

const ACCOMMODATION_COLUMNS: &str =
    "id, description, value_cents, image_url, created_at, updated_at";

const INSERT_ACCOMMODATION: &str = r"
    INSERT INTO accommodations (description, value_cents, image_url, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?)
";

const UPDATE_ACCOMMODATION: &str = r"
    UPDATE accommodations
    SET description = ?, value_cents = ?, image_url = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_ACCOMMODATION: &str = "DELETE FROM accommodations WHERE id = ?";

/// Maps a row selected with [`ACCOMMODATION_COLUMNS`] starting at `offset`.
pub(super) fn row_to_accommodation(
    row: &Row<'_>,
    offset: usize,
) -> rusqlite::Result<Accommodation> {
    Ok(Accommodation {
        id: AccommodationId::new(row.get(offset)?),
        description: row.get(offset + 1)?,
        value: Money::from_cents(row.get(offset + 2)?),
        image_url: row.get(offset + 3)?,
        created_at: from_unix_secs(row.get(offset + 4)?)?,
        updated_at: from_unix_secs(row.get(offset + 5)?)?,
    })
}

pub(super) fn insert(conn: &Connection, draft: &AccommodationDraft) -> Result<Accommodation> {
    let now = now_secs();
    conn.execute(
        INSERT_ACCOMMODATION,
        params![
            draft.description(),
            draft.value().cents(),
            draft.image_url(),
            now,
            now
        ],
    )
    .map_err(|e| Error::from_write(e, "insert accommodation"))?;

    let id = AccommodationId::new(conn.last_insert_rowid());
    log::debug!("inserted {}", id.describe());
    find(conn, id)?.ok_or_else(|| Error::not_found(id.describe()))
}

pub(super) fn find(conn: &Connection, id: AccommodationId) -> Result<Option<Accommodation>> {
    let sql = format!("SELECT {ACCOMMODATION_COLUMNS} FROM accommodations WHERE id = ?");
    Ok(conn
        .query_row(&sql, [id], |row| row_to_accommodation(row, 0))
        .optional()?)
}

pub(super) fn list(conn: &Connection) -> Result<Vec<Accommodation>> {
    let sql = format!("SELECT {ACCOMMODATION_COLUMNS} FROM accommodations ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let rooms = stmt
        .query_map([], |row| row_to_accommodation(row, 0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rooms)
}

pub(super) fn update(
    conn: &Connection,
    id: AccommodationId,
    draft: &AccommodationDraft,
) -> Result<bool> {
    let rows = conn
        .execute(
            UPDATE_ACCOMMODATION,
            params![
                draft.description(),
                draft.value().cents(),
                draft.image_url(),
                now_secs(),
                id
            ],
        )
        .map_err(|e| Error::from_write(e, &format!("update {}", id.describe())))?;
    Ok(rows > 0)
}

pub(super) fn delete(conn: &Connection, id: AccommodationId) -> Result<bool> {
    let rows = conn
        .execute(DELETE_ACCOMMODATION, [id])
        .map_err(|e| Error::from_write(e, &format!("delete {}", id.describe())))?;
    Ok(rows > 0)
}
