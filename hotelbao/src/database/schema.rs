//! Database schema definitions and SQL constants.
//!
//! Instants (`check_in`, `check_out`, `created_at`, `updated_at`) are stored
//! as Unix epoch seconds; money is stored as integer cents.

/// Current schema version for the database.
///
/// Stored in the metadata table and checked every time a database is opened.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the clients table.
///
/// E-mails are unique regardless of case.
pub const CREATE_CLIENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS clients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE COLLATE NOCASE,
        password_hash TEXT NOT NULL,
        phone TEXT,
        address TEXT,
        city TEXT,
        role TEXT NOT NULL DEFAULT 'client' CHECK (role IN ('client', 'admin')),
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to create the accommodations table.
pub const CREATE_ACCOMMODATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS accommodations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        description TEXT,
        value_cents INTEGER NOT NULL CHECK (value_cents > 0),
        image_url TEXT,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Both references are `ON DELETE RESTRICT`: a client or accommodation with
/// reservations cannot be deleted.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        client_id INTEGER NOT NULL REFERENCES clients(id) ON DELETE RESTRICT,
        accommodation_id INTEGER NOT NULL REFERENCES accommodations(id) ON DELETE RESTRICT,
        check_in INTEGER NOT NULL,
        check_out INTEGER NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL,
        CHECK (check_in < check_out)
    )";

/// Index used by the overlap query.
pub const CREATE_ACCOMMODATION_PERIOD_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_accommodation_period
    ON reservations(accommodation_id, check_in, check_out)";

/// Index used by the per-client reports.
pub const CREATE_CLIENT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_client ON reservations(client_id)";

/// Message raised by the overlap triggers.
pub const OVERLAP_TRIGGER_MESSAGE: &str = "reservation overlap";

/// Trigger rejecting an insert that overlaps another stay in the same room.
pub const CREATE_OVERLAP_INSERT_TRIGGER: &str = r"
    CREATE TRIGGER IF NOT EXISTS trg_reservations_no_overlap_insert
    BEFORE INSERT ON reservations
    WHEN EXISTS (
        SELECT 1 FROM reservations r
        WHERE r.accommodation_id = NEW.accommodation_id
          AND r.check_in < NEW.check_out
          AND r.check_out > NEW.check_in
    )
    BEGIN
        SELECT RAISE(ABORT, 'reservation overlap');
    END";

/// Trigger rejecting an update that would overlap another stay in the same
/// room. The row being updated is ignored.
pub const CREATE_OVERLAP_UPDATE_TRIGGER: &str = r"
    CREATE TRIGGER IF NOT EXISTS trg_reservations_no_overlap_update
    BEFORE UPDATE OF accommodation_id, check_in, check_out ON reservations
    WHEN EXISTS (
        SELECT 1 FROM reservations r
        WHERE r.accommodation_id = NEW.accommodation_id
          AND r.id <> OLD.id
          AND r.check_in < NEW.check_out
          AND r.check_out > NEW.check_in
    )
    BEGIN
        SELECT RAISE(ABORT, 'reservation overlap');
    END";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
