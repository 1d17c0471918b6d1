//! Data directory initialization.
//!
//! Creates the data directory and an empty database, optionally with a
//! commented configuration file next to it.

use std::fs;
use std::path::PathBuf;

use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};

/// Options for data directory initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a default `config.yaml` if none exists.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates initialization options for `data_dir`.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to replace an existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write a default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// What [`init_database`] did.
#[derive(Debug)]
pub struct InitResult {
    /// The data directory had to be created.
    pub data_dir_created: bool,
    /// The database was created or recreated.
    pub database_created: bool,
    /// A configuration file was written.
    pub config_created: bool,
    /// The initialized data directory.
    pub data_dir: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# hotelbao configuration

# Seconds to wait for the database write lock (default: 5)
# maximum_lock_wait_seconds: 5

# Symbol printed before amounts in reports and invoices (default: R$)
# currency_symbol: R$

# strftime pattern for dates in listings (default: %d/%m/%Y)
# date_format: '%d/%m/%Y'

# Default output format for list commands: table, json, csv or tsv
# output_format: table

# Refuse to create the database implicitly (default: false)
# disable_autoinit: false
";

/// Initializes the data directory and database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database exists and `overwrite` is not set
/// - The database or configuration file cannot be written
///
/// # Examples
///
/// ```no_run
/// use hotelbao::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/hotelbao")).with_create_config(true);
/// let result = init_database(&options).unwrap();
/// assert!(result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::Validation {
                field: "database".into(),
                message: format!(
                    "database already exists at {}; use --overwrite to replace it",
                    db_path.display()
                ),
            });
        }
        log::warn!("replacing database at {}", db_path.display());
        fs::remove_file(&db_path)?;
    }

    let db = Database::open(DatabaseConfig::new(&db_path))?;
    db.verify_integrity()?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join("config.yaml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}
