//! Client commands: register, inspect, edit and delete client accounts.

use crate::error::CliError;
use crate::output::{or_na, parse_format, resolve_format, Listing};
use crate::utils::{format_timestamp, open_session, GlobalOptions};
use clap::{Args, Subcommand};
use hotelbao::config::OutputFormat;
use hotelbao::operations::{delete_client, get_client, register_client, update_client};
use hotelbao::report::ReportStyle;
use hotelbao::store::HotelStore;
use hotelbao::{Action, Client, ClientDraft, ClientId, Role};

/// Column names for client listings.
const COLUMNS: &[&str] = &["id", "name", "email", "phone", "address", "city", "role", "created_at"];

/// Manage client accounts.
#[derive(Args)]
pub struct ClientCommand {
    #[command(subcommand)]
    action: ClientAction,
}

#[derive(Subcommand)]
enum ClientAction {
    /// Register a new client
    Add(AddClient),
    /// Show one client
    Show(ShowClient),
    /// List every client
    List(ListClients),
    /// Change a client's profile
    Update(UpdateClient),
    /// Delete a client without reservations
    Delete(DeleteClient),
}

impl ClientCommand {
    /// Execute the selected client subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            ClientAction::Add(cmd) => cmd.execute(global),
            ClientAction::Show(cmd) => cmd.execute(global),
            ClientAction::List(cmd) => cmd.execute(global),
            ClientAction::Update(cmd) => cmd.execute(global),
            ClientAction::Delete(cmd) => cmd.execute(global),
        }
    }
}

#[derive(Args)]
struct AddClient {
    /// Full name (3 to 255 characters)
    #[arg(long)]
    name: String,

    /// Login e-mail, unique across clients
    #[arg(long)]
    email: String,

    /// Password hash produced by the login service
    #[arg(long, value_name = "HASH")]
    password_hash: String,

    /// Contact phone
    #[arg(long)]
    phone: Option<String>,

    /// Street address (required for invoices)
    #[arg(long)]
    address: Option<String>,

    /// City (required for invoices)
    #[arg(long)]
    city: Option<String>,

    /// Role of the new account
    #[arg(long = "account-role", value_name = "ROLE", default_value = "client")]
    account_role: Role,
}

impl AddClient {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::RegisterClient)?;
        if self.account_role == Role::Admin {
            global.authorize(Action::GrantAdmin)?;
        }

        let draft = ClientDraft::builder(self.name, self.email, self.password_hash)
            .phone(self.phone)
            .address(self.address)
            .city(self.city)
            .role(self.account_role)
            .build()
            .map_err(hotelbao::Error::from)?;

        let (_config, db, _style) = open_session(global)?;
        let client = register_client(db.connection(), &draft)?;

        // Id goes to stdout so scripts can capture it
        println!("{}", client.id);
        if !global.quiet {
            eprintln!("Registered client {} <{}>", client.name, client.email);
        }
        Ok(())
    }
}

#[derive(Args)]
struct ShowClient {
    /// Client id
    id: ClientId,

    /// Output format (table, json, csv, tsv)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

impl ShowClient {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ManageClient(self.id))?;
        let (config, db, style) = open_session(global)?;
        let client = get_client(db.connection(), self.id)?;
        client_listing(&[client], &style).print(resolve_format(self.format, &config))
    }
}

#[derive(Args)]
struct ListClients {
    /// Output format (table, json, csv, tsv)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

impl ListClients {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ListClients)?;
        let (config, db, style) = open_session(global)?;
        let clients = db.connection().list_clients()?;
        client_listing(&clients, &style).print(resolve_format(self.format, &config))
    }
}

#[derive(Args)]
struct UpdateClient {
    /// Client id
    id: ClientId,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New e-mail
    #[arg(long)]
    email: Option<String>,

    /// New password hash
    #[arg(long, value_name = "HASH")]
    password_hash: Option<String>,

    /// New phone (empty to clear)
    #[arg(long)]
    phone: Option<String>,

    /// New address (empty to clear)
    #[arg(long)]
    address: Option<String>,

    /// New city (empty to clear)
    #[arg(long)]
    city: Option<String>,

    /// New role
    #[arg(long = "account-role", value_name = "ROLE")]
    account_role: Option<Role>,
}

impl UpdateClient {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ManageClient(self.id))?;
        if self.account_role == Some(Role::Admin) {
            global.authorize(Action::GrantAdmin)?;
        }

        let (_config, db, _style) = open_session(global)?;
        let store = db.connection();
        let current = get_client(store, self.id)?;

        let mut builder = current.to_builder();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(email) = self.email {
            builder = builder.email(email);
        }
        if let Some(hash) = self.password_hash {
            builder = builder.password_hash(hash);
        }
        if self.phone.is_some() {
            builder = builder.phone(self.phone);
        }
        if self.address.is_some() {
            builder = builder.address(self.address);
        }
        if self.city.is_some() {
            builder = builder.city(self.city);
        }
        if let Some(role) = self.account_role {
            builder = builder.role(role);
        }
        let draft = builder.build().map_err(hotelbao::Error::from)?;

        let updated = update_client(store, self.id, &draft)?;
        if !global.quiet {
            eprintln!("Updated client {} <{}>", updated.id, updated.email);
        }
        Ok(())
    }
}

#[derive(Args)]
struct DeleteClient {
    /// Client id
    id: ClientId,
}

impl DeleteClient {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.authorize(Action::ManageClient(self.id))?;
        let (_config, db, _style) = open_session(global)?;
        delete_client(db.connection(), self.id)?;
        if !global.quiet {
            eprintln!("Deleted client {}", self.id);
        }
        Ok(())
    }
}

/// Builds the listing shown by `client show` and `client list`.
fn client_listing(clients: &[Client], style: &ReportStyle) -> Listing {
    let mut listing = Listing::new(COLUMNS);
    for client in clients {
        listing.push(
            vec![
                client.id.to_string(),
                or_na(Some(&client.name)),
                client.email.clone(),
                or_na(client.phone.as_deref()),
                or_na(client.address.as_deref()),
                or_na(client.city.as_deref()),
                client.role.to_string(),
                style.format_date(client.created_at),
            ],
            vec![
                client.id.to_string(),
                client.name.clone(),
                client.email.clone(),
                client.phone.clone().unwrap_or_default(),
                client.address.clone().unwrap_or_default(),
                client.city.clone().unwrap_or_default(),
                client.role.to_string(),
                format_timestamp(client.created_at),
            ],
            serde_json::json!({
                "id": client.id.value(),
                "name": client.name,
                "email": client.email,
                "phone": client.phone,
                "address": client.address,
                "city": client.city,
                "role": client.role.as_str(),
                "created_at": format_timestamp(client.created_at),
            }),
        );
    }
    listing
}
