//! Main entry point for the hotelbao CLI.
//!
//! The back office for the hotelbao reservation system:
//! - `client`: Register and manage clients
//! - `accommodation`: Manage accommodations
//! - `reservation`: Book, reschedule and cancel stays
//! - `report`: Listings, invoices and value summaries

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _logger = hotelbao::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
        role: cli.role,
        as_client: cli.as_client,
    };

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Client(cmd) => cmd.execute(&global),
        cli::Command::Accommodation(cmd) => cmd.execute(&global),
        cli::Command::Reservation(cmd) => cmd.execute(&global),
        cli::Command::Report(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
