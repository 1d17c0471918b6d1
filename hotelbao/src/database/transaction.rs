//! Transaction helpers.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::{Error, Result};
use crate::store::{HotelStore, PurgeCounts};

use super::connection::Database;

impl Database {
    /// Begins an `IMMEDIATE` transaction.
    ///
    /// The write lock is taken up front, so two callers that each check for
    /// a conflicting stay and then insert are serialized: the second one
    /// waits (up to the busy timeout) and then sees the first one's row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if the lock could not be acquired
    /// within the busy timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hotelbao::database::{Database, DatabaseConfig};
    /// use hotelbao::store::HotelStore;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/hotelbao.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// let rooms = tx.list_accommodations().unwrap();
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| Error::from_write(e, "begin transaction"))
    }

    /// Deletes every reservation, client and accommodation atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or any delete
    /// fails; nothing is deleted in that case.
    pub fn purge(&mut self) -> Result<PurgeCounts> {
        let tx = self.begin_transaction()?;
        let counts = tx.purge()?;
        tx.commit()?;
        log::info!("purged {} rows", counts.total());
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use crate::database::test_util::{create_test_database, sample_client, sample_room};
    use crate::store::HotelStore;

    #[test]
    fn test_rollback_on_drop() {
        let mut db = create_test_database();
        {
            let tx = db.begin_transaction().unwrap();
            tx.insert_client(&sample_client("a@x.io")).unwrap();
        }
        assert!(db.connection().list_clients().unwrap().is_empty());
    }

    #[test]
    fn test_commit_persists() {
        let mut db = create_test_database();
        let tx = db.begin_transaction().unwrap();
        tx.insert_accommodation(&sample_room("Suite", 100)).unwrap();
        tx.commit().unwrap();
        assert_eq!(db.connection().list_accommodations().unwrap().len(), 1);
    }

    #[test]
    fn test_purge_empty_database() {
        let mut db = create_test_database();
        let counts = db.purge().unwrap();
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_purge_counts_rows() {
        let mut db = create_test_database();
        db.connection()
            .insert_client(&sample_client("a@x.io"))
            .unwrap();
        db.connection()
            .insert_client(&sample_client("b@x.io"))
            .unwrap();
        let counts = db.purge().unwrap();
        assert_eq!(counts.clients, 2);
        assert!(db.connection().list_clients().unwrap().is_empty());
    }
}
