//! Report commands.
//!
//! Reports print fixed-template text lines, one per record, for the front
//! desk. Per-client reports (invoice, total, highest, lowest) are open to
//! admins and to the client they describe.

use crate::error::CliError;
use crate::utils::{open_session, GlobalOptions};
use clap::{Args, Subcommand};
use hotelbao::operations::get_client;
use hotelbao::report::{
    accommodation_listing, client_listing, generate_invoice, highest_value_line,
    highest_value_reservation, lowest_value_line, lowest_value_reservation, reservation_listing,
    total_value, total_value_line,
};
use hotelbao::{Action, ClientId};

/// Print reports.
#[derive(Args)]
pub struct ReportCommand {
    #[command(subcommand)]
    action: ReportAction,
}

#[derive(Subcommand)]
enum ReportAction {
    /// One line per client
    Clients,
    /// One line per accommodation
    Accommodations,
    /// One line per reservation
    Reservations,
    /// Invoice for a client's stays
    Invoice(ClientReport),
    /// Total value of a client's stays
    Total(ClientReport),
    /// A client's most expensive stay
    Highest(ClientReport),
    /// A client's cheapest stay
    Lowest(ClientReport),
    /// Delete every reservation, client and accommodation
    Purge(PurgeArgs),
}

#[derive(Args)]
struct ClientReport {
    /// Client the report is about (defaults to --as-client)
    #[arg(long, value_name = "ID")]
    client: Option<ClientId>,
}

#[derive(Args)]
struct PurgeArgs {
    /// Confirm that all data should be deleted
    #[arg(long)]
    force: bool,
}

impl ReportCommand {
    /// Execute the selected report.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            ReportAction::Clients => {
                global.authorize(Action::ListClients)?;
                let (_config, db, _style) = open_session(global)?;
                print_lines(&client_listing(db.connection())?);
            }
            ReportAction::Accommodations => {
                global.authorize(Action::ViewAccommodations)?;
                let (_config, db, style) = open_session(global)?;
                print_lines(&accommodation_listing(db.connection(), &style)?);
            }
            ReportAction::Reservations => {
                global.authorize(Action::ListReservations)?;
                let (_config, db, style) = open_session(global)?;
                print_lines(&reservation_listing(db.connection(), &style)?);
            }
            ReportAction::Invoice(args) => {
                let client = args.resolve(global)?;
                let (_config, db, style) = open_session(global)?;
                println!("{}", generate_invoice(db.connection(), client, &style)?);
            }
            ReportAction::Total(args) => {
                let client = args.resolve(global)?;
                let (_config, db, style) = open_session(global)?;
                let store = db.connection();
                get_client(store, client)?;
                println!("{}", total_value_line(total_value(store, client)?, &style));
            }
            ReportAction::Highest(args) => {
                let client = args.resolve(global)?;
                let (_config, db, style) = open_session(global)?;
                let store = db.connection();
                get_client(store, client)?;
                let stay = highest_value_reservation(store, client)?;
                println!("{}", highest_value_line(stay.as_ref(), &style));
            }
            ReportAction::Lowest(args) => {
                let client = args.resolve(global)?;
                let (_config, db, style) = open_session(global)?;
                let store = db.connection();
                get_client(store, client)?;
                let stay = lowest_value_reservation(store, client)?;
                println!("{}", lowest_value_line(stay.as_ref(), &style));
            }
            ReportAction::Purge(args) => {
                global.authorize(Action::PurgeData)?;
                if !args.force {
                    return Err(CliError::InvalidArguments(
                        "purge deletes all data; pass --force to confirm".to_string(),
                    ));
                }
                let (_config, mut db, _style) = open_session(global)?;
                let counts = db.purge()?;
                if !global.quiet {
                    eprintln!(
                        "Deleted {} reservations, {} clients and {} accommodations",
                        counts.reservations, counts.clients, counts.accommodations
                    );
                }
            }
        }
        Ok(())
    }
}

impl ClientReport {
    /// Resolves the subject client and checks the caller may see it.
    fn resolve(&self, global: &GlobalOptions) -> Result<ClientId, CliError> {
        let client = global.subject_client(self.client)?;
        global.authorize(Action::ViewClientReport(client))?;
        Ok(client)
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
