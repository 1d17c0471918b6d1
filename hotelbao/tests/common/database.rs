//! Shared database test utilities.

use std::path::PathBuf;

use tempfile::TempDir;

use hotelbao::database::{Database, DatabaseConfig};

/// A database file in its own temporary directory.
///
/// The directory is removed when the value is dropped.
#[allow(dead_code)]
pub struct TestDatabase {
    /// The open database.
    pub db: Database,
    /// Path of the database file, for opening extra connections.
    pub path: PathBuf,
    _dir: TempDir,
}

/// Creates a temporary test database.
#[allow(dead_code)]
pub fn create_test_database() -> TestDatabase {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hotelbao.db");
    let db = Database::open(DatabaseConfig::new(&path)).unwrap();
    TestDatabase {
        db,
        path,
        _dir: dir,
    }
}

/// Opens another connection to an existing test database.
#[allow(dead_code)]
pub fn reopen(path: &std::path::Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}
