//! Reservation admission: create, move and cancel bookings.
//!
//! Each operation has an options struct and a plan builder. Planning performs
//! every check in a fixed order and fails with the first problem found:
//!
//! 1. the stay period (`InvalidArgument` unless check-in precedes check-out);
//! 2. availability of the accommodation (`Conflict`);
//! 3. the client (`NotFound`);
//! 4. the accommodation (`NotFound`).
//!
//! Moving a booking first resolves the booking itself, and excludes it from
//! the availability check so it never collides with its own old dates.
//!
//! The free functions at the bottom run plan and execution inside a single
//! `IMMEDIATE` transaction.

use chrono::{DateTime, Utc};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::id::{AccommodationId, ClientId, ReservationId};
use crate::reservation::{NewReservation, Reservation};
use crate::stay::StayPeriod;
use crate::store::HotelStore;
use crate::validation::is_blank;

use super::availability::AvailabilityChecker;
use super::executor::{execute_atomically, ExecutionResult};
use super::plan::{OperationPlan, PlanAction};

/// Options for booking an accommodation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveOptions {
    /// The guest.
    pub client_id: ClientId,

    /// The room to book.
    pub accommodation_id: AccommodationId,

    /// Start of the stay (inclusive).
    pub check_in: DateTime<Utc>,

    /// End of the stay (exclusive).
    pub check_out: DateTime<Utc>,
}

impl ReserveOptions {
    /// Creates reserve options. The period is validated when the plan is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::operations::ReserveOptions;
    /// use hotelbao::stay::parse_instant;
    /// use hotelbao::{AccommodationId, ClientId};
    ///
    /// let options = ReserveOptions::new(
    ///     ClientId::new(1),
    ///     AccommodationId::new(3),
    ///     parse_instant("2025-07-20").unwrap(),
    ///     parse_instant("2025-07-25").unwrap(),
    /// );
    /// assert_eq!(options.accommodation_id, AccommodationId::new(3));
    /// ```
    #[must_use]
    pub const fn new(
        client_id: ClientId,
        accommodation_id: AccommodationId,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> Self {
        Self {
            client_id,
            accommodation_id,
            check_in,
            check_out,
        }
    }

    /// Sets the guest.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = client_id;
        self
    }

    /// Sets the room.
    #[must_use]
    pub const fn with_accommodation(mut self, accommodation_id: AccommodationId) -> Self {
        self.accommodation_id = accommodation_id;
        self
    }

    /// Sets both ends of the stay.
    #[must_use]
    pub const fn with_period(mut self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }
}

/// Checks the client and accommodation of a request, in that order, and
/// returns warnings worth showing.
fn resolve_parties<S: HotelStore + ?Sized>(
    store: &S,
    client_id: ClientId,
    accommodation_id: AccommodationId,
) -> Result<Vec<String>> {
    if store.find_client(client_id)?.is_none() {
        return Err(Error::not_found(client_id.describe()));
    }
    let accommodation = store
        .find_accommodation(accommodation_id)?
        .ok_or_else(|| Error::not_found(accommodation_id.describe()))?;

    let mut warnings = Vec::new();
    if is_blank(accommodation.description.as_deref()) {
        warnings.push(format!(
            "{} has no description and will not appear on invoices",
            accommodation_id.describe()
        ));
    }
    Ok(warnings)
}

/// A reserve operation plan builder.
pub struct ReservePlan {
    options: ReserveOptions,
}

impl ReservePlan {
    /// Creates a new reserve plan.
    #[must_use]
    pub const fn new(options: ReserveOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan that inserts the reservation.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence: `InvalidArgument` for a bad period,
    /// `Conflict` if the room is taken, `NotFound` for a missing client or
    /// accommodation, or the store error.
    pub fn build_plan<S: HotelStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let o = &self.options;
        let period = StayPeriod::new(o.check_in, o.check_out)?;

        AvailabilityChecker::new(store).ensure_available(o.accommodation_id, &period, None)?;
        let warnings = resolve_parties(store, o.client_id, o.accommodation_id)?;

        let request = NewReservation::new(o.client_id, o.accommodation_id, period);
        let mut plan = OperationPlan::new(format!(
            "Reserve {} for {}",
            o.accommodation_id.describe(),
            o.client_id.describe()
        ))
        .add_action(PlanAction::InsertReservation(request));
        for warning in warnings {
            plan = plan.add_warning(warning);
        }
        Ok(plan)
    }
}

/// Options for moving an existing reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReservationOptions {
    /// The reservation to change.
    pub id: ReservationId,

    /// Its new client, accommodation and period.
    pub target: ReserveOptions,
}

impl UpdateReservationOptions {
    /// Creates update options replacing every logical field of `id`.
    #[must_use]
    pub const fn new(id: ReservationId, target: ReserveOptions) -> Self {
        Self { id, target }
    }
}

/// An update operation plan builder.
pub struct UpdateReservationPlan {
    options: UpdateReservationOptions,
}

impl UpdateReservationPlan {
    /// Creates a new update plan.
    #[must_use]
    pub const fn new(options: UpdateReservationOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan that rewrites the reservation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the reservation is absent, then the same errors
    /// as [`ReservePlan::build_plan`].
    pub fn build_plan<S: HotelStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let id = self.options.id;
        let t = &self.options.target;
        let existing = store
            .find_reservation(id)?
            .ok_or_else(|| Error::not_found(id.describe()))?;

        let period = StayPeriod::new(t.check_in, t.check_out)?;
        AvailabilityChecker::new(store).ensure_available(t.accommodation_id, &period, Some(id))?;
        let warnings = resolve_parties(store, t.client_id, t.accommodation_id)?;

        let request = NewReservation::new(t.client_id, t.accommodation_id, period);
        let mut plan = OperationPlan::new(format!("Update {}", id.describe()));
        if existing.request() == request {
            plan = plan.add_warning(format!("{} is unchanged", id.describe()));
        }
        plan = plan.add_action(PlanAction::UpdateReservation { id, request });
        for warning in warnings {
            plan = plan.add_warning(warning);
        }
        Ok(plan)
    }
}

/// A cancel operation plan builder.
pub struct CancelPlan {
    id: ReservationId,
}

impl CancelPlan {
    /// Creates a new cancel plan.
    #[must_use]
    pub const fn new(id: ReservationId) -> Self {
        Self { id }
    }

    /// Builds an operation plan that deletes the reservation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the reservation does not exist.
    pub fn build_plan<S: HotelStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        if store.find_reservation(self.id)?.is_none() {
            return Err(Error::not_found(self.id.describe()));
        }
        Ok(OperationPlan::new(format!("Cancel {}", self.id.describe()))
            .add_action(PlanAction::DeleteReservation(self.id)))
    }
}

/// Plans and executes a booking in one transaction, or only plans it when
/// `dry_run` is set.
///
/// # Errors
///
/// See [`ReservePlan::build_plan`]. A concurrent booking that wins the race
/// also yields `Conflict`; a lock held past the busy timeout yields
/// `LockTimeout`.
pub fn reserve(db: &mut Database, options: ReserveOptions, dry_run: bool) -> Result<ExecutionResult> {
    execute_atomically(db, dry_run, |conn| ReservePlan::new(options).build_plan(conn))
}

/// Plans and executes a reservation update in one transaction.
///
/// # Errors
///
/// See [`UpdateReservationPlan::build_plan`].
pub fn reschedule(
    db: &mut Database,
    options: UpdateReservationOptions,
    dry_run: bool,
) -> Result<ExecutionResult> {
    execute_atomically(db, dry_run, |conn| {
        UpdateReservationPlan::new(options).build_plan(conn)
    })
}

/// Plans and executes a cancellation in one transaction.
///
/// # Errors
///
/// Returns `NotFound` if the reservation does not exist.
pub fn cancel(db: &mut Database, id: ReservationId, dry_run: bool) -> Result<ExecutionResult> {
    execute_atomically(db, dry_run, |conn| CancelPlan::new(id).build_plan(conn))
}

/// Books `accommodation_id` for `client_id` and returns the stored reservation.
///
/// # Errors
///
/// See [`reserve`].
///
/// # Examples
///
/// ```no_run
/// use hotelbao::operations::create_reservation;
/// use hotelbao::stay::parse_instant;
/// use hotelbao::{AccommodationId, ClientId, Database, DatabaseConfig};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/hotelbao.db")).unwrap();
/// let reservation = create_reservation(
///     &mut db,
///     ClientId::new(1),
///     AccommodationId::new(3),
///     parse_instant("2025-07-20").unwrap(),
///     parse_instant("2025-07-25").unwrap(),
/// )
/// .unwrap();
/// println!("booked {}", reservation.id);
/// ```
pub fn create_reservation(
    db: &mut Database,
    client_id: ClientId,
    accommodation_id: AccommodationId,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> Result<Reservation> {
    let options = ReserveOptions::new(client_id, accommodation_id, check_in, check_out);
    let result = reserve(db, options, false)?;
    let reservation = result
        .reservation
        .ok_or_else(|| Error::not_found("created reservation"))?;
    log::info!(
        "{} booked {} for {}",
        reservation.id.describe(),
        accommodation_id.describe(),
        client_id.describe()
    );
    Ok(reservation)
}

/// Replaces the client, accommodation and period of reservation `id`.
///
/// # Errors
///
/// See [`reschedule`].
pub fn update_reservation(
    db: &mut Database,
    id: ReservationId,
    target: ReserveOptions,
) -> Result<Reservation> {
    let result = reschedule(db, UpdateReservationOptions::new(id, target), false)?;
    let reservation = result
        .reservation
        .ok_or_else(|| Error::not_found(id.describe()))?;
    log::info!("{} updated", id.describe());
    Ok(reservation)
}

/// Deletes reservation `id`.
///
/// # Errors
///
/// Returns `NotFound` if the reservation does not exist.
pub fn delete_reservation(db: &mut Database, id: ReservationId) -> Result<()> {
    cancel(db, id, false)?;
    log::info!("{} deleted", id.describe());
    Ok(())
}
