//! [`HotelStore`] for a plain `SQLite` connection.
//!
//! Implementing the trait on [`Connection`] rather than on [`Database`]
//! lets the same calls run inside an open transaction (`&*tx`).
//!
//! [`Database`]: super::Database

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Connection;

use crate::accommodation::{Accommodation, AccommodationDraft};
use crate::client::{Client, ClientDraft};
use crate::error::Result;
use crate::id::{AccommodationId, ClientId, ReservationId};
use crate::reservation::{NewReservation, Reservation, ReservationDetails};
use crate::stay::StayPeriod;
use crate::store::{HotelStore, PurgeCounts, ValueOrder};

use super::{accommodations, clients, reservations};

/// Current time as Unix epoch seconds for database storage.
pub(super) fn now_secs() -> i64 {
    Utc::now().timestamp()
}

/// Converts Unix epoch seconds from the database.
pub(super) fn from_unix_secs(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Integer,
            format!("timestamp {secs} is out of range").into(),
        )
    })
}

impl HotelStore for Connection {
    fn insert_client(&self, draft: &ClientDraft) -> Result<Client> {
        clients::insert(self, draft)
    }

    fn find_client(&self, id: ClientId) -> Result<Option<Client>> {
        clients::find(self, id)
    }

    fn find_client_by_email(&self, email: &str) -> Result<Option<Client>> {
        clients::find_by_email(self, email)
    }

    fn list_clients(&self) -> Result<Vec<Client>> {
        clients::list(self)
    }

    fn update_client(&self, id: ClientId, draft: &ClientDraft) -> Result<bool> {
        clients::update(self, id, draft)
    }

    fn delete_client(&self, id: ClientId) -> Result<bool> {
        clients::delete(self, id)
    }

    fn insert_accommodation(&self, draft: &AccommodationDraft) -> Result<Accommodation> {
        accommodations::insert(self, draft)
    }

    fn find_accommodation(&self, id: AccommodationId) -> Result<Option<Accommodation>> {
        accommodations::find(self, id)
    }

    fn list_accommodations(&self) -> Result<Vec<Accommodation>> {
        accommodations::list(self)
    }

    fn update_accommodation(
        &self,
        id: AccommodationId,
        draft: &AccommodationDraft,
    ) -> Result<bool> {
        accommodations::update(self, id, draft)
    }

    fn delete_accommodation(&self, id: AccommodationId) -> Result<bool> {
        accommodations::delete(self, id)
    }

    fn insert_reservation(&self, request: &NewReservation) -> Result<Reservation> {
        reservations::insert(self, request)
    }

    fn find_reservation(&self, id: ReservationId) -> Result<Option<Reservation>> {
        reservations::find(self, id)
    }

    fn list_reservations(&self) -> Result<Vec<Reservation>> {
        reservations::list(self)
    }

    fn update_reservation(&self, id: ReservationId, request: &NewReservation) -> Result<bool> {
        reservations::update(self, id, request)
    }

    fn delete_reservation(&self, id: ReservationId) -> Result<bool> {
        reservations::delete(self, id)
    }

    fn has_overlapping_reservation(
        &self,
        accommodation: AccommodationId,
        period: &StayPeriod,
        exclude: Option<ReservationId>,
    ) -> Result<bool> {
        reservations::has_overlap(self, accommodation, period, exclude)
    }

    fn reservations_for_client(
        &self,
        client: ClientId,
        order: ValueOrder,
    ) -> Result<Vec<ReservationDetails>> {
        reservations::for_client(self, client, order)
    }

    fn all_reservation_details(&self) -> Result<Vec<ReservationDetails>> {
        reservations::all_details(self)
    }

    fn purge(&self) -> Result<PurgeCounts> {
        reservations::purge(self)
    }
}
