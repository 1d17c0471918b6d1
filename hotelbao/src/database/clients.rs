//! SQL for the `clients` table.

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::auth::Role;
use crate::client::{Client, ClientDraft};
use crate::error::{Error, Result};
use crate::id::ClientId;

use super::store::{from_unix_secs, now_secs};

const CLIENT_COLUMNS: &str =
    "id, name, email, password_hash, phone, address, city, role, created_at, updated_at";

const INSERT_CLIENT: &str = r"
    INSERT INTO clients
    (name, email, password_hash, phone, address, city, role, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const UPDATE_CLIENT: &str = r"
    UPDATE clients
    SET name = ?, email = ?, password_hash = ?, phone = ?, address = ?, city = ?, role = ?,
        updated_at = ?
    WHERE id = ?
";

const DELETE_CLIENT: &str = "DELETE FROM clients WHERE id = ?";

/// Maps a row selected with [`CLIENT_COLUMNS`] starting at `offset`.
pub(super) fn row_to_client(row: &Row<'_>, offset: usize) -> rusqlite::Result<Client> {
    let role: String = row.get(offset + 7)?;
    let role = role.parse::<Role>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(offset + 7, Type::Text, Box::new(e))
    })?;

    Ok(Client {
        id: ClientId::new(row.get(offset)?),
        name: row.get(offset + 1)?,
        email: row.get(offset + 2)?,
        password_hash: row.get(offset + 3)?,
        phone: row.get(offset + 4)?,
        address: row.get(offset + 5)?,
        city: row.get(offset + 6)?,
        role,
        created_at: from_unix_secs(row.get(offset + 8)?)?,
        updated_at: from_unix_secs(row.get(offset + 9)?)?,
    })
}

pub(super) fn insert(conn: &Connection, draft: &ClientDraft) -> Result<Client> {
    let now = now_secs();
    conn.execute(
        INSERT_CLIENT,
        params![
            draft.name(),
            draft.email(),
            draft.password_hash(),
            draft.phone(),
            draft.address(),
            draft.city(),
            draft.role().as_str(),
            now,
            now,
        ],
    )
    .map_err(|e| Error::from_write(e, &format!("register {}", draft.email())))?;

    let id = ClientId::new(conn.last_insert_rowid());
    log::debug!("inserted {}", id.describe());
    find(conn, id)?.ok_or_else(|| Error::not_found(id.describe()))
}

pub(super) fn find(conn: &Connection, id: ClientId) -> Result<Option<Client>> {
    let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = ?");
    Ok(conn
        .query_row(&sql, [id], |row| row_to_client(row, 0))
        .optional()?)
}

pub(super) fn find_by_email(conn: &Connection, email: &str) -> Result<Option<Client>> {
    let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE email = ? COLLATE NOCASE");
    Ok(conn
        .query_row(&sql, [email.trim()], |row| row_to_client(row, 0))
        .optional()?)
}

pub(super) fn list(conn: &Connection) -> Result<Vec<Client>> {
    let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let clients = stmt
        .query_map([], |row| row_to_client(row, 0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(clients)
}

pub(super) fn update(conn: &Connection, id: ClientId, draft: &ClientDraft) -> Result<bool> {
    let rows = conn
        .execute(
            UPDATE_CLIENT,
            params![
                draft.name(),
                draft.email(),
                draft.password_hash(),
                draft.phone(),
                draft.address(),
                draft.city(),
                draft.role().as_str(),
                now_secs(),
                id,
            ],
        )
        .map_err(|e| Error::from_write(e, &format!("update {}", id.describe())))?;
    Ok(rows > 0)
}

pub(super) fn delete(conn: &Connection, id: ClientId) -> Result<bool> {
    let rows = conn
        .execute(DELETE_CLIENT, [id])
        .map_err(|e| Error::from_write(e, &format!("delete {}", id.describe())))?;
    Ok(rows > 0)
}
