//! Reservation commands.
//!
//! Create, update and delete run the admission plan inside one transaction
//! and accept `--dry-run` to print the plan without writing anything.

use crate::error::CliError;
use crate::output::{or_na, parse_format, resolve_format, Listing};
use crate::utils::{format_timestamp, open_session, parse_date_arg, GlobalOptions};
use clap::{Args, Subcommand};
use hotelbao::config::OutputFormat;
use hotelbao::operations::{
    cancel, get_accommodation, get_client, reschedule, reserve, ExecutionResult,
    UpdateReservationOptions,
};
use hotelbao::report::ReportStyle;
use hotelbao::store::{HotelStore, ValueOrder};
use hotelbao::{
    AccommodationId, Action, ClientId, Error, ReservationDetails, ReservationId, ReserveOptions,
};

/// Column names for reservation listings.
const COLUMNS: &[&str] = &[
    "id",
    "client_id",
    "client",
    "accommodation_id",
    "accommodation",
    "check_in",
    "check_out",
    "nights",
    "value",
];

/// Manage reservations (stays).
#[derive(Args)]
pub struct ReservationCommand {
    #[command(subcommand)]
    action: ReservationAction,
}

#[derive(Subcommand)]
enum ReservationAction {
    /// Book an accommodation for a client
    Create(CreateReservation),
    /// Show one reservation
    Show(ShowReservation),
    /// List every reservation
    List(ListReservations),
    /// Change a reservation's client, accommodation or dates
    Update(UpdateReservation),
    /// Cancel a reservation
    Delete(DeleteReservation),
}

impl ReservationCommand {
    /// Execute the selected reservation subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            ReservationAction::Create(cmd) => cmd.execute(global),
            ReservationAction::Show(cmd) => cmd.execute(global),
            ReservationAction::List(cmd) => cmd.execute(global),
            ReservationAction::Update(cmd) => cmd.execute(global),
            ReservationAction::Delete(cmd) => cmd.execute(global),
        }
    }
}

#[derive(Args)]
struct CreateReservation {
    /// Guest (defaults to --as-client)
    #[arg(long, value_name = "ID")]
    client: Option<ClientId>,

    /// Accommodation to book
    #[arg(long, value_name = "ID")]
    accommodation: AccommodationId,

    /// Check-in, YYYY-MM-DD or RFC 3339
    #[arg(long, value_name = "DATE")]
    check_in: String,

    /// Check-out, YYYY-MM-DD or RFC 3339
    #[arg(long, value_name = "DATE")]
    check_out: String,

    /// Show what would be booked without writing
    #[arg(long)]
    dry_run: bool,
}

impl CreateReservation {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let client = global.subject_client(self.client)?;
        global.authorize(Action::CreateReservation(client))?;

        let options = ReserveOptions::new(
            client,
            self.accommodation,
            parse_date_arg("--check-in", &self.check_in)?,
            parse_date_arg("--check-out", &self.check_out)?,
        );

        let (_config, mut db, _style) = open_session(global)?;
        let result = reserve(&mut db, options, self.dry_run)?;
        report_execution(&result, global);

        if let Some(reservation) = &result.reservation {
            println!("{}", reservation.id);
        }
        Ok(())
    }
}

#[derive(Args)]
struct ShowReservation {
    /// Reservation id
    id: ReservationId,

    /// Output format (table, json, csv, tsv)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

impl ShowReservation {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ListReservations)?;
        let (config, db, style) = open_session(global)?;
        let store = db.connection();

        let reservation = store
            .find_reservation(self.id)?
            .ok_or_else(|| Error::not_found(self.id.describe()))?;
        let details = ReservationDetails {
            client: get_client(store, reservation.client_id)?,
            accommodation: get_accommodation(store, reservation.accommodation_id)?,
            reservation,
        };

        reservation_listing(&[details], &style).print(resolve_format(self.format, &config))
    }
}

#[derive(Args)]
struct ListReservations {
    /// Only reservations of this client
    #[arg(long, value_name = "ID")]
    client: Option<ClientId>,

    /// Output format (table, json, csv, tsv)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

impl ListReservations {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.client {
            // A client may list their own stays
            Some(client) => global.authorize(Action::ViewClientReport(client))?,
            None => global.authorize(Action::ListReservations)?,
        }

        let (config, db, style) = open_session(global)?;
        let store = db.connection();
        let stays = match self.client {
            Some(client) => store.reservations_for_client(client, ValueOrder::Booked)?,
            None => store.all_reservation_details()?,
        };

        reservation_listing(&stays, &style).print(resolve_format(self.format, &config))
    }
}

#[derive(Args)]
struct UpdateReservation {
    /// Reservation id
    id: ReservationId,

    /// New guest
    #[arg(long, value_name = "ID")]
    client: Option<ClientId>,

    /// New accommodation
    #[arg(long, value_name = "ID")]
    accommodation: Option<AccommodationId>,

    /// New check-in
    #[arg(long, value_name = "DATE")]
    check_in: Option<String>,

    /// New check-out
    #[arg(long, value_name = "DATE")]
    check_out: Option<String>,

    /// Show what would change without writing
    #[arg(long)]
    dry_run: bool,
}

impl UpdateReservation {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ModifyReservation)?;

        let check_in = self
            .check_in
            .as_deref()
            .map(|text| parse_date_arg("--check-in", text))
            .transpose()?;
        let check_out = self
            .check_out
            .as_deref()
            .map(|text| parse_date_arg("--check-out", text))
            .transpose()?;

        let (_config, mut db, _style) = open_session(global)?;
        let current = db
            .connection()
            .find_reservation(self.id)?
            .ok_or_else(|| Error::not_found(self.id.describe()))?;

        // Unspecified fields keep their stored values
        let target = ReserveOptions::new(
            self.client.unwrap_or(current.client_id),
            self.accommodation.unwrap_or(current.accommodation_id),
            check_in.unwrap_or_else(|| current.period.check_in()),
            check_out.unwrap_or_else(|| current.period.check_out()),
        );

        let result = reschedule(
            &mut db,
            UpdateReservationOptions::new(self.id, target),
            self.dry_run,
        )?;
        report_execution(&result, global);
        Ok(())
    }
}

#[derive(Args)]
struct DeleteReservation {
    /// Reservation id
    id: ReservationId,

    /// Show what would be removed without writing
    #[arg(long)]
    dry_run: bool,
}

impl DeleteReservation {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ModifyReservation)?;
        let (_config, mut db, _style) = open_session(global)?;
        let result = cancel(&mut db, self.id, self.dry_run)?;
        report_execution(&result, global);
        Ok(())
    }
}

/// Print plan actions and warnings to stderr.
fn report_execution(result: &ExecutionResult, global: &GlobalOptions) {
    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }
    if global.quiet {
        return;
    }
    if result.dry_run {
        eprintln!("Dry run: no changes were made");
        for action in &result.actions_taken {
            eprintln!("  Would: {action}");
        }
    } else {
        for action in &result.actions_taken {
            eprintln!("{action}");
        }
    }
}

fn reservation_listing(stays: &[ReservationDetails], style: &ReportStyle) -> Listing {
    let mut listing = Listing::new(COLUMNS);
    for stay in stays {
        let r = &stay.reservation;
        let (check_in, check_out) = (r.period.check_in(), r.period.check_out());
        let value = stay.accommodation.value;
        listing.push(
            vec![
                r.id.to_string(),
                stay.client.id.to_string(),
                or_na(Some(&stay.client.name)),
                stay.accommodation.id.to_string(),
                or_na(stay.accommodation.description.as_deref()),
                style.format_date(check_in),
                style.format_date(check_out),
                r.period.nights().to_string(),
                format!("{} {}", style.currency_symbol, value),
            ],
            vec![
                r.id.to_string(),
                stay.client.id.to_string(),
                stay.client.name.clone(),
                stay.accommodation.id.to_string(),
                stay.accommodation.description.clone().unwrap_or_default(),
                format_timestamp(check_in),
                format_timestamp(check_out),
                r.period.nights().to_string(),
                value.to_string(),
            ],
            serde_json::json!({
                "id": r.id.value(),
                "client_id": stay.client.id.value(),
                "client": stay.client.name,
                "accommodation_id": stay.accommodation.id.value(),
                "accommodation": stay.accommodation.description,
                "check_in": format_timestamp(check_in),
                "check_out": format_timestamp(check_out),
                "nights": r.period.nights(),
                "value": value.to_string(),
            }),
        );
    }
    listing
}
