//! CLI command implementations.
//!
//! - `init`: Create the data directory and database
//! - `client`: Register and manage client accounts
//! - `accommodation`: Manage accommodations
//! - `reservation`: Book, reschedule and cancel stays
//! - `report`: Listings, invoices, value summaries and purge
//! - `completions`: Shell completion scripts

pub mod accommodation;
pub mod client;
pub mod completions;
pub mod init;
pub mod report;
pub mod reservation;

pub use accommodation::AccommodationCommand;
pub use client::ClientCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use report::ReportCommand;
pub use reservation::ReservationCommand;
