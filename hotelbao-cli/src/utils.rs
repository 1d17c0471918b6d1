//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, authorization and
//! argument parsing.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use hotelbao::database::{default_data_dir, DATABASE_FILE_NAME};
use hotelbao::report::ReportStyle;
use hotelbao::stay::parse_instant;
use hotelbao::{
    authorize, Action, ClientId, Config, ConfigBuilder, Database, DatabaseConfig, Money,
    Principal, Role,
};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,

    /// Role the command runs under.
    pub role: Role,

    /// Client the command acts for when running as `client`.
    pub as_client: Option<ClientId>,
}

impl GlobalOptions {
    /// Builds the principal the command runs as.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` if the client role is used without
    /// `--as-client`.
    pub fn principal(&self) -> Result<Principal, CliError> {
        match (self.role, self.as_client) {
            (Role::Admin, _) => Ok(Principal::admin()),
            (Role::Client, Some(id)) => Ok(Principal::client(id)),
            (Role::Client, None) => Err(CliError::InvalidArguments(
                "--role client requires --as-client <ID>".to_string(),
            )),
        }
    }

    /// Checks that the current principal may perform `action`.
    ///
    /// Browsing accommodations and self-registration are open to callers
    /// without a client id.
    pub fn authorize(&self, action: Action) -> Result<(), CliError> {
        let principal = match action {
            Action::ViewAccommodations | Action::RegisterClient => Principal {
                client_id: self.as_client,
                role: self.role,
            },
            _ => self.principal()?,
        };
        authorize(&principal, action).map_err(CliError::from)
    }

    /// Client a report or booking is about: `--client` if given, else
    /// `--as-client`.
    pub fn subject_client(&self, explicit: Option<ClientId>) -> Result<ClientId, CliError> {
        explicit.or(self.as_client).ok_or_else(|| {
            CliError::InvalidArguments("a client id is required (--client <ID>)".to_string())
        })
    }
}

/// Resolve the data directory: `--data-dir` (or `HOTELBAO_DATA_DIR`), else
/// `~/.hotelbao`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|_| {
            CliError::Config("Could not determine home directory".to_string())
        }),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. `hotelbao.yaml` found walking up from the working directory
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_working_dir(&env::current_dir()?);
    if let Ok(data_dir) = resolve_data_dir(global) {
        builder = builder.with_data_dir(&data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled, either by flag or by configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);
    let autoinit_disabled = global.disable_autoinit || config.disable_autoinit.unwrap_or(false);

    if !db_path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path).with_auto_create(!autoinit_disabled);

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Load configuration, then open the database and derive the report style.
pub fn open_session(global: &GlobalOptions) -> Result<(Config, Database, ReportStyle), CliError> {
    let config = load_configuration(global)?;
    let db = open_database(global, &config)?;
    let style = ReportStyle::from_config(&config);
    Ok((config, db, style))
}

/// Parse a check-in or check-out argument.
pub fn parse_date_arg(flag: &str, text: &str) -> Result<DateTime<Utc>, CliError> {
    parse_instant(text).map_err(|e| CliError::InvalidArguments(format!("{flag}: {e}")))
}

/// Parse a monetary argument such as `120.50`.
pub fn parse_money_arg(flag: &str, text: &str) -> Result<Money, CliError> {
    text.parse()
        .map_err(|e| CliError::InvalidArguments(format!("{flag}: {e}")))
}

/// Format a timestamp for machine-readable output.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339()
}
