//! Build script for hotelbao-cli.
//!
//! Generates the `hotelbao.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! tree is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("hotelbao")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage hotel clients, accommodations and reservations")
        .long_about(
            "Back office for the hotelbao reservation system: client accounts, \
             accommodations, double-booking-safe reservations and reports",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("HOTELBAO_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("HOTELBAO_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("HOTELBAO_DISABLE_AUTOINIT"),
        )
        .arg(
            Arg::new("role")
                .long("role")
                .help("Role to act as (admin or client)")
                .value_name("ROLE")
                .global(true)
                .default_value("admin")
                .env("HOTELBAO_ROLE"),
        )
        .arg(
            Arg::new("as-client")
                .long("as-client")
                .help("Client account to act as; required with --role client")
                .value_name("ID")
                .global(true)
                .env("HOTELBAO_AS_CLIENT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the data directory, the database and optionally a config file"),
            Command::new("client")
                .about("Manage client accounts")
                .long_about("Register, show, list, update and delete client accounts"),
            Command::new("accommodation")
                .about("Manage accommodations")
                .long_about("Add, show, list, update and delete accommodations"),
            Command::new("reservation")
                .about("Manage reservations")
                .long_about(
                    "Create, show, list, update and delete reservations; an accommodation \
                     is never booked twice for overlapping dates",
                ),
            Command::new("report")
                .about("Print reports and invoices")
                .long_about(
                    "Listings, invoices and per-client value summaries, plus purging all data",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("hotelbao.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
