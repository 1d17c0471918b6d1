//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; unset
/// fields fall back to the built-in defaults when read.
///
/// # Examples
///
/// ```
/// use hotelbao::config::{Config, OutputFormat};
///
/// let config = Config {
///     currency_symbol: Some("US$".to_string()),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.currency_symbol.as_deref(), Some("US$"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for the database write lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Symbol printed before amounts in reports and invoices.
    pub currency_symbol: Option<String>,

    /// `strftime` pattern for dates in listings.
    pub date_format: Option<String>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use hotelbao::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    #[default]
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            other => Err(format!(
                "unknown output format '{other}' (expected table, json, csv or tsv)"
            )),
        }
    }
}
