//! Hotel operations.
//!
//! Reservation writes use a plan-execute pattern: planning runs every
//! admission check against a [`HotelStore`](crate::store::HotelStore) and
//! produces an [`OperationPlan`]; the [`PlanExecutor`] then applies it, or
//! only reports it in dry-run mode. The convenience functions
//! ([`create_reservation`], [`update_reservation`], [`delete_reservation`])
//! run both phases inside one `IMMEDIATE` transaction.
//!
//! Client and accommodation management are plain store calls that turn
//! missing rows into `NotFound`.
//!
//! # Examples
//!
//! ```no_run
//! use hotelbao::operations::{PlanExecutor, ReserveOptions, ReservePlan};
//! use hotelbao::stay::parse_instant;
//! use hotelbao::{AccommodationId, ClientId, Database, DatabaseConfig};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/hotelbao.db")).unwrap();
//! let options = ReserveOptions::new(
//!     ClientId::new(1),
//!     AccommodationId::new(3),
//!     parse_instant("2025-07-20").unwrap(),
//!     parse_instant("2025-07-25").unwrap(),
//! );
//!
//! // Generate plan
//! let plan = ReservePlan::new(options).build_plan(db.connection()).unwrap();
//!
//! // Execute plan
//! let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
//! println!("{:?}", result.reservation);
//! ```

pub mod accommodations;
pub mod admission;
pub mod availability;
pub mod clients;
pub mod executor;
pub mod init;
pub mod plan;

#[cfg(test)]
mod proptests;

pub use accommodations::{
    add_accommodation, delete_accommodation, get_accommodation, update_accommodation,
};
pub use admission::{
    cancel, create_reservation, delete_reservation, reschedule, reserve, update_reservation,
    CancelPlan, ReserveOptions, ReservePlan, UpdateReservationOptions, UpdateReservationPlan,
};
pub use availability::{first_conflict, AvailabilityChecker};
pub use clients::{delete_client, get_client, get_client_by_email, register_client, update_client};
pub use executor::{execute_atomically, ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
