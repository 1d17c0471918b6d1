#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotelbao
//!
//! A library for running a small hotel's reservation desk.
//!
//! It stores clients, accommodations and reservations in SQLite, admits new
//! reservations only when the accommodation is free over the requested
//! half-open period, and renders per-client reports and invoices.
//!
//! ## Core Types
//!
//! - [`Client`], [`Accommodation`] and [`Reservation`]: stored records
//! - [`Money`] and [`StayPeriod`]: value types with validation
//! - [`HotelStore`]: the persistence seam, implemented by `rusqlite::Connection`
//! - [`Role`], [`Principal`] and [`authorize`]: role gates for front ends
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use hotelbao::{Money, StayPeriod};
//! use hotelbao::stay::parse_instant;
//!
//! let july = StayPeriod::new(
//!     parse_instant("2025-07-20").unwrap(),
//!     parse_instant("2025-07-25").unwrap(),
//! )
//! .unwrap();
//! let next = StayPeriod::new(
//!     parse_instant("2025-07-25").unwrap(),
//!     parse_instant("2025-07-28").unwrap(),
//! )
//! .unwrap();
//!
//! // Back-to-back stays never overlap
//! assert!(!july.overlaps(&next));
//!
//! let nightly: Money = "120.50".parse().unwrap();
//! assert_eq!(nightly.to_string(), "120.50");
//! ```

pub mod accommodation;
pub mod auth;
pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod id;
pub mod logging;
pub mod money;
pub mod operations;
pub mod report;
pub mod reservation;
pub mod stay;
pub mod store;
pub mod validation;

// Re-export key types at crate root for convenience
pub use accommodation::{Accommodation, AccommodationDraft};
pub use auth::{authorize, Action, Principal, Role};
pub use client::{Client, ClientDraft};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, ErrorKind, Result};
pub use id::{AccommodationId, ClientId, ReservationId};
pub use logging::{init_logger, LogLevel, Logger};
pub use money::Money;
pub use operations::{
    create_reservation, delete_reservation, update_reservation, ExecutionResult, OperationPlan,
    PlanAction, PlanExecutor, ReserveOptions, ReservePlan,
};
pub use report::ReportStyle;
pub use reservation::{NewReservation, Reservation, ReservationDetails};
pub use stay::StayPeriod;
pub use store::{HotelStore, ValueOrder};
pub use validation::ValidationError;
