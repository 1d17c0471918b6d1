//! `SQLite` persistence for clients, accommodations and reservations.
//!
//! [`Database`] owns the connection and applies pragmas and schema checks on
//! open. The [`HotelStore`](crate::store::HotelStore) implementation lives on
//! `rusqlite::Connection`, so it works the same on `db.connection()` and on a
//! transaction obtained from [`Database::begin_transaction`].
//!
//! # Examples
//!
//! ```no_run
//! use hotelbao::database::{Database, DatabaseConfig};
//! use hotelbao::store::HotelStore;
//! use hotelbao::{AccommodationDraft, Money};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/hotelbao.db")).unwrap();
//! let draft = AccommodationDraft::builder(Money::from_cents(15000))
//!     .description(Some("Standard".to_string()))
//!     .build()
//!     .unwrap();
//! let room = db.connection().insert_accommodation(&draft).unwrap();
//! println!("created accommodation {}", room.id);
//! ```

mod accommodations;
mod clients;
mod config;
mod connection;
pub mod migrations;
mod reservations;
mod schema;
mod store;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;
