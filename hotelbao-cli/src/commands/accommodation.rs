//! Accommodation commands.

use crate::error::CliError;
use crate::output::{or_na, parse_format, resolve_format, Listing};
use crate::utils::{format_timestamp, open_session, parse_money_arg, GlobalOptions};
use clap::{Args, Subcommand};
use hotelbao::config::OutputFormat;
use hotelbao::operations::{
    add_accommodation, delete_accommodation, get_accommodation, update_accommodation,
};
use hotelbao::report::ReportStyle;
use hotelbao::store::HotelStore;
use hotelbao::{Accommodation, AccommodationDraft, AccommodationId, Action};

/// Column names for accommodation listings.
const COLUMNS: &[&str] = &["id", "description", "value", "image_url", "created_at"];

/// Manage accommodations (bedrooms).
#[derive(Args)]
pub struct AccommodationCommand {
    #[command(subcommand)]
    action: AccommodationAction,
}

#[derive(Subcommand)]
enum AccommodationAction {
    /// Add an accommodation
    Add(AddAccommodation),
    /// Show one accommodation
    Show(ShowAccommodation),
    /// List every accommodation
    List(ListAccommodations),
    /// Change an accommodation
    Update(UpdateAccommodation),
    /// Delete an accommodation without reservations
    Delete(DeleteAccommodation),
}

impl AccommodationCommand {
    /// Execute the selected accommodation subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            AccommodationAction::Add(cmd) => cmd.execute(global),
            AccommodationAction::Show(cmd) => cmd.execute(global),
            AccommodationAction::List(cmd) => cmd.execute(global),
            AccommodationAction::Update(cmd) => cmd.execute(global),
            AccommodationAction::Delete(cmd) => cmd.execute(global),
        }
    }
}

#[derive(Args)]
struct AddAccommodation {
    /// Nightly value, e.g. 120.50
    #[arg(long)]
    value: String,

    /// Description shown in listings and invoices
    #[arg(long)]
    description: Option<String>,

    /// Reference to an image of the room
    #[arg(long, value_name = "URL")]
    image_url: Option<String>,
}

impl AddAccommodation {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ManageAccommodations)?;

        let value = parse_money_arg("--value", &self.value)?;
        let draft = AccommodationDraft::builder(value)
            .description(self.description)
            .image_url(self.image_url)
            .build()
            .map_err(hotelbao::Error::from)?;

        let (_config, db, _style) = open_session(global)?;
        let accommodation = add_accommodation(db.connection(), &draft)?;

        println!("{}", accommodation.id);
        if !global.quiet {
            eprintln!("Added accommodation {}", accommodation.id);
        }
        Ok(())
    }
}

#[derive(Args)]
struct ShowAccommodation {
    /// Accommodation id
    id: AccommodationId,

    /// Output format (table, json, csv, tsv)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

impl ShowAccommodation {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ViewAccommodations)?;
        let (config, db, style) = open_session(global)?;
        let accommodation = get_accommodation(db.connection(), self.id)?;
        accommodation_listing(&[accommodation], &style).print(resolve_format(self.format, &config))
    }
}

#[derive(Args)]
struct ListAccommodations {
    /// Output format (table, json, csv, tsv)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

impl ListAccommodations {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ViewAccommodations)?;
        let (config, db, style) = open_session(global)?;
        let accommodations = db.connection().list_accommodations()?;
        accommodation_listing(&accommodations, &style).print(resolve_format(self.format, &config))
    }
}

#[derive(Args)]
struct UpdateAccommodation {
    /// Accommodation id
    id: AccommodationId,

    /// New nightly value
    #[arg(long)]
    value: Option<String>,

    /// New description (empty to clear)
    #[arg(long)]
    description: Option<String>,

    /// New image reference (empty to clear)
    #[arg(long, value_name = "URL")]
    image_url: Option<String>,
}

impl UpdateAccommodation {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ManageAccommodations)?;

        let value = self
            .value
            .as_deref()
            .map(|text| parse_money_arg("--value", text))
            .transpose()?;

        let (_config, db, _style) = open_session(global)?;
        let store = db.connection();
        let current = get_accommodation(store, self.id)?;

        let mut builder = current.to_builder();
        if let Some(value) = value {
            builder = builder.value(value);
        }
        if self.description.is_some() {
            builder = builder.description(self.description);
        }
        if self.image_url.is_some() {
            builder = builder.image_url(self.image_url);
        }
        let draft = builder.build().map_err(hotelbao::Error::from)?;

        update_accommodation(store, self.id, &draft)?;
        if !global.quiet {
            eprintln!("Updated accommodation {}", self.id);
        }
        Ok(())
    }
}

#[derive(Args)]
struct DeleteAccommodation {
    /// Accommodation id
    id: AccommodationId,
}

impl DeleteAccommodation {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ManageAccommodations)?;
        let (_config, db, _style) = open_session(global)?;
        delete_accommodation(db.connection(), self.id)?;
        if !global.quiet {
            eprintln!("Deleted accommodation {}", self.id);
        }
        Ok(())
    }
}

fn accommodation_listing(accommodations: &[Accommodation], style: &ReportStyle) -> Listing {
    let mut listing = Listing::new(COLUMNS);
    for room in accommodations {
        listing.push(
            vec![
                room.id.to_string(),
                or_na(room.description.as_deref()),
                format!("{} {}", style.currency_symbol, room.value),
                or_na(room.image_url.as_deref()),
                style.format_date(room.created_at),
            ],
            vec![
                room.id.to_string(),
                room.description.clone().unwrap_or_default(),
                room.value.to_string(),
                room.image_url.clone().unwrap_or_default(),
                format_timestamp(room.created_at),
            ],
            serde_json::json!({
                "id": room.id.value(),
                "description": room.description,
                "value": room.value.to_string(),
                "image_url": room.image_url,
                "created_at": format_timestamp(room.created_at),
            }),
        );
    }
    listing
}
