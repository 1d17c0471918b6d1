//! Reservation records.
//!
//! A reservation books one accommodation for one client over a
//! [`StayPeriod`]. [`ReservationDetails`] joins the reservation with both
//! referenced records for reporting.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::accommodation::Accommodation;
use crate::client::Client;
use crate::id::{AccommodationId, ClientId, ReservationId};
use crate::stay::StayPeriod;

/// A stored reservation.
///
/// # Examples
///
/// ```
/// use hotelbao::{AccommodationId, ClientId, NewReservation, StayPeriod};
///
/// let request = NewReservation::new(
///     ClientId::new(1),
///     AccommodationId::new(3),
///     StayPeriod::parse("2025-07-20", "2025-07-25").unwrap(),
/// );
/// assert_eq!(request.period.nights(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    /// Store-assigned identifier.
    pub id: ReservationId,
    /// The guest.
    pub client_id: ClientId,
    /// The booked room.
    pub accommodation_id: AccommodationId,
    /// The booked interval.
    pub period: StayPeriod,
    /// When the booking was made.
    pub created_at: DateTime<Utc>,
    /// When the booking last changed.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Returns the logical fields, without the store-assigned parts.
    #[must_use]
    pub const fn request(&self) -> NewReservation {
        NewReservation {
            client_id: self.client_id,
            accommodation_id: self.accommodation_id,
            period: self.period,
        }
    }
}

/// The logical fields of a reservation, before the store assigns an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NewReservation {
    /// The guest.
    pub client_id: ClientId,
    /// The booked room.
    pub accommodation_id: AccommodationId,
    /// The booked interval.
    pub period: StayPeriod,
}

impl NewReservation {
    /// Creates a reservation request.
    #[must_use]
    pub const fn new(
        client_id: ClientId,
        accommodation_id: AccommodationId,
        period: StayPeriod,
    ) -> Self {
        Self {
            client_id,
            accommodation_id,
            period,
        }
    }
}

/// A reservation joined with its client and accommodation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationDetails {
    /// The reservation itself.
    pub reservation: Reservation,
    /// The guest who booked it.
    pub client: Client,
    /// The booked room.
    pub accommodation: Accommodation,
}

impl ReservationDetails {
    /// Returns `true` if this stay can appear on an invoice: the room has a
    /// non-blank description and a non-zero value.
    #[must_use]
    pub fn is_invoiceable(&self) -> bool {
        !crate::validation::is_blank(self.accommodation.description.as_deref())
            && !self.accommodation.value.is_zero()
    }
}
