//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{AccommodationDraft, ClientDraft, Money};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// A valid client draft with the given e-mail and a complete address.
///
/// # Panics
///
/// Panics if the draft fails validation.
#[must_use]
pub fn sample_client(email: &str) -> ClientDraft {
    ClientDraft::builder("Test Client", email, "hash")
        .address(Some("Rua das Flores, 100".into()))
        .city(Some("Formiga".into()))
        .build()
        .unwrap()
}

/// A valid accommodation draft with the given description and value in cents.
///
/// # Panics
///
/// Panics if the draft fails validation.
#[must_use]
pub fn sample_room(description: &str, cents: i64) -> AccommodationDraft {
    AccommodationDraft::builder(Money::from_cents(cents))
        .description(Some(description.into()))
        .build()
        .unwrap()
}
