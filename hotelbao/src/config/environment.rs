//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! | Variable                              | Field                        |
//! |---------------------------------------|------------------------------|
//! | `HOTELBAO_MAXIMUM_LOCK_WAIT_SECONDS`  | `maximum_lock_wait_seconds`  |
//! | `HOTELBAO_CURRENCY_SYMBOL`            | `currency_symbol`            |
//! | `HOTELBAO_DATE_FORMAT`                | `date_format`                |
//! | `HOTELBAO_OUTPUT_FORMAT`              | `output_format`              |
//! | `HOTELBAO_DISABLE_AUTOINIT`           | `disable_autoinit`           |

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hotelbao::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `HOTELBAO_*` environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value (non-numeric
    /// timeout, unknown output format, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var("HOTELBAO_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: "HOTELBAO_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "must be a non-negative integer".into(),
                })?);
        }

        if let Ok(symbol) = env::var("HOTELBAO_CURRENCY_SYMBOL") {
            config.currency_symbol = Some(symbol);
        }

        if let Ok(pattern) = env::var("HOTELBAO_DATE_FORMAT") {
            config.date_format = Some(pattern);
        }

        if let Ok(format) = env::var("HOTELBAO_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse().map_err(|message| Error::Validation {
                field: "HOTELBAO_OUTPUT_FORMAT".into(),
                message,
            })?);
        }

        if let Ok(val) = env::var("HOTELBAO_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("HOTELBAO_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
