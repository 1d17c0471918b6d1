//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AccommodationCommand, ClientCommand, CompletionsCommand, InitCommand, ReportCommand,
    ReservationCommand,
};
use clap::{Parser, Subcommand};
use hotelbao::{ClientId, Role};
use std::path::PathBuf;

/// Command-line back office for the hotelbao reservation system.
#[derive(Parser)]
#[command(name = "hotelbao")]
#[command(version, about = "Manage hotel clients, accommodations and reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "HOTELBAO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "HOTELBAO_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "HOTELBAO_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// Role to act as (admin or client)
    #[arg(
        long,
        value_name = "ROLE",
        global = true,
        default_value = "admin",
        env = "HOTELBAO_ROLE"
    )]
    pub role: Role,

    /// Client account to act as; required with --role client
    #[arg(long, value_name = "ID", global = true, env = "HOTELBAO_AS_CLIENT")]
    pub as_client: Option<ClientId>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Manage client accounts
    Client(ClientCommand),

    /// Manage accommodations
    Accommodation(AccommodationCommand),

    /// Manage reservations
    Reservation(ReservationCommand),

    /// Print reports and invoices
    Report(ReportCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
