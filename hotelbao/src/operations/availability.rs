//! Accommodation availability checks.

use crate::error::{Error, Result};
use crate::id::{AccommodationId, ReservationId};
use crate::reservation::Reservation;
use crate::stay::StayPeriod;
use crate::store::HotelStore;

/// Answers whether an accommodation is free over a stay period.
///
/// Two stays of the same accommodation conflict when
/// `existing.check_in < requested.check_out` and
/// `existing.check_out > requested.check_in`. A stay that ends exactly when
/// another begins is not a conflict.
pub struct AvailabilityChecker<'a, S: HotelStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: HotelStore + ?Sized> AvailabilityChecker<'a, S> {
    /// Creates a checker reading from the given store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Returns `true` if any other reservation of `accommodation` overlaps
    /// `period`. `exclude` skips one reservation, used when moving it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn has_conflict(
        &self,
        accommodation: AccommodationId,
        period: &StayPeriod,
        exclude: Option<ReservationId>,
    ) -> Result<bool> {
        self.store
            .has_overlapping_reservation(accommodation, period, exclude)
    }

    /// Like [`has_conflict`](Self::has_conflict) but fails with `Conflict`.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the accommodation is taken, or the store error.
    pub fn ensure_available(
        &self,
        accommodation: AccommodationId,
        period: &StayPeriod,
        exclude: Option<ReservationId>,
    ) -> Result<()> {
        if self.has_conflict(accommodation, period, exclude)? {
            log::debug!("{} is taken over {period}", accommodation.describe());
            return Err(Error::Conflict {
                details: format!(
                    "{} is already booked within {period}",
                    accommodation.describe()
                ),
            });
        }
        Ok(())
    }
}

/// Returns the first reservation in `existing` that conflicts with `period`
/// for `accommodation`, skipping `exclude`.
///
/// This is the in-memory form of the store's overlap query.
///
/// # Examples
///
/// ```
/// use hotelbao::operations::first_conflict;
/// use hotelbao::{AccommodationId, StayPeriod};
///
/// let period = StayPeriod::parse("2025-07-20", "2025-07-25").unwrap();
/// assert!(first_conflict(&[], AccommodationId::new(1), &period, None).is_none());
/// ```
#[must_use]
pub fn first_conflict<'r>(
    existing: &'r [Reservation],
    accommodation: AccommodationId,
    period: &StayPeriod,
    exclude: Option<ReservationId>,
) -> Option<&'r Reservation> {
    existing.iter().find(|r| {
        r.accommodation_id == accommodation
            && Some(r.id) != exclude
            && r.period.overlaps(period)
    })
}
