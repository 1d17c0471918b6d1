//! The persistence seam.
//!
//! Every service function takes its store explicitly as `&S where S:
//! HotelStore`. The SQLite [`rusqlite::Connection`] implements the trait in
//! the `database` module; a transaction derefs to a connection, so the same
//! code runs inside or outside one. Unit tests use the generated
//! `MockHotelStore`.

use serde::Serialize;

use crate::accommodation::{Accommodation, AccommodationDraft};
use crate::client::{Client, ClientDraft};
use crate::error::Result;
use crate::id::{AccommodationId, ClientId, ReservationId};
use crate::reservation::{NewReservation, Reservation, ReservationDetails};
use crate::stay::StayPeriod;

/// Ordering of a client's reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueOrder {
    /// Booking order (ascending reservation id).
    #[default]
    Booked,
    /// Cheapest accommodation first, ties by ascending reservation id.
    Ascending,
    /// Most expensive accommodation first, ties by ascending reservation id.
    Descending,
}

/// Rows removed by [`HotelStore::purge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PurgeCounts {
    /// Deleted reservations.
    pub reservations: usize,
    /// Deleted clients.
    pub clients: usize,
    /// Deleted accommodations.
    pub accommodations: usize,
}

impl PurgeCounts {
    /// Total number of deleted rows.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.reservations + self.clients + self.accommodations
    }
}

/// CRUD and range-query access to clients, accommodations and reservations.
///
/// `update_*` and `delete_*` return `false` when no row has the given id.
#[cfg_attr(test, mockall::automock)]
pub trait HotelStore {
    /// Inserts a client and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the e-mail is already registered.
    fn insert_client(&self, draft: &ClientDraft) -> Result<Client>;

    /// Looks up a client by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_client(&self, id: ClientId) -> Result<Option<Client>>;

    /// Looks up a client by login e-mail (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_client_by_email(&self, email: &str) -> Result<Option<Client>>;

    /// Lists every client by ascending id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_clients(&self) -> Result<Vec<Client>>;

    /// Replaces a client's profile.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the new e-mail belongs to another client.
    fn update_client(&self, id: ClientId, draft: &ClientDraft) -> Result<bool>;

    /// Deletes a client.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` if reservations still reference the client.
    fn delete_client(&self, id: ClientId) -> Result<bool>;

    /// Inserts an accommodation and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_accommodation(&self, draft: &AccommodationDraft) -> Result<Accommodation>;

    /// Looks up an accommodation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_accommodation(&self, id: AccommodationId) -> Result<Option<Accommodation>>;

    /// Lists every accommodation by ascending id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_accommodations(&self) -> Result<Vec<Accommodation>>;

    /// Replaces an accommodation's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn update_accommodation(&self, id: AccommodationId, draft: &AccommodationDraft)
        -> Result<bool>;

    /// Deletes an accommodation.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityViolation` if reservations still reference it.
    fn delete_accommodation(&self, id: AccommodationId) -> Result<bool>;

    /// Inserts a reservation and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the store's overlap guard rejects the row, or
    /// `IntegrityViolation` if a referenced record is missing.
    fn insert_reservation(&self, request: &NewReservation) -> Result<Reservation>;

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_reservation(&self, id: ReservationId) -> Result<Option<Reservation>>;

    /// Lists every reservation by ascending id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_reservations(&self) -> Result<Vec<Reservation>>;

    /// Replaces a reservation's client, accommodation and period.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the store's overlap guard rejects the new period.
    fn update_reservation(&self, id: ReservationId, request: &NewReservation) -> Result<bool>;

    /// Deletes a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_reservation(&self, id: ReservationId) -> Result<bool>;

    /// Returns `true` if some reservation of `accommodation` overlaps
    /// `period` under half-open semantics, ignoring `exclude`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn has_overlapping_reservation(
        &self,
        accommodation: AccommodationId,
        period: &StayPeriod,
        exclude: Option<ReservationId>,
    ) -> Result<bool>;

    /// Returns a client's reservations joined with both referenced records.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn reservations_for_client(
        &self,
        client: ClientId,
        order: ValueOrder,
    ) -> Result<Vec<ReservationDetails>>;

    /// Returns every reservation joined with both referenced records, by
    /// ascending reservation id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn all_reservation_details(&self) -> Result<Vec<ReservationDetails>>;

    /// Deletes every reservation, client and accommodation.
    ///
    /// # Errors
    ///
    /// Returns an error if any delete fails.
    fn purge(&self) -> Result<PurgeCounts>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purge_counts_total() {
        let counts = PurgeCounts {
            reservations: 3,
            clients: 2,
            accommodations: 1,
        };
        assert_eq!(counts.total(), 6);
        assert_eq!(PurgeCounts::default().total(), 0);
    }

    #[test]
    fn test_default_order_is_booking_order() {
        assert_eq!(ValueOrder::default(), ValueOrder::Booked);
    }
}
