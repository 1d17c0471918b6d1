//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::report::is_valid_date_format;

/// Longest accepted currency symbol, in characters.
pub const MAX_CURRENCY_SYMBOL_LEN: usize = 8;

/// Longest accepted lock wait, in seconds.
pub const MAX_LOCK_WAIT_SECONDS: u64 = 3600;

/// Validates a merged or partial configuration.
///
/// # Examples
///
/// ```
/// use hotelbao::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first bad field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(seconds) = config.maximum_lock_wait_seconds {
            if seconds > MAX_LOCK_WAIT_SECONDS {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: format!("must be at most {MAX_LOCK_WAIT_SECONDS}"),
                });
            }
        }

        if let Some(ref symbol) = config.currency_symbol {
            Self::validate_currency_symbol(symbol)?;
        }

        if let Some(ref pattern) = config.date_format {
            Self::validate_date_format(pattern)?;
        }

        Ok(())
    }

    fn validate_currency_symbol(symbol: &str) -> Result<()> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: "currency_symbol".into(),
                message: "cannot be empty".into(),
            });
        }
        if trimmed.chars().count() > MAX_CURRENCY_SYMBOL_LEN {
            return Err(Error::Validation {
                field: "currency_symbol".into(),
                message: format!("must be at most {MAX_CURRENCY_SYMBOL_LEN} characters"),
            });
        }
        if trimmed.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: "currency_symbol".into(),
                message: "cannot contain control characters".into(),
            });
        }
        Ok(())
    }

    fn validate_date_format(pattern: &str) -> Result<()> {
        if pattern.trim().is_empty() {
            return Err(Error::Validation {
                field: "date_format".into(),
                message: "cannot be empty".into(),
            });
        }
        if !is_valid_date_format(pattern) {
            return Err(Error::Validation {
                field: "date_format".into(),
                message: format!("'{pattern}' is not a valid strftime pattern"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_config() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_full_config() {
        let config = Config {
            maximum_lock_wait_seconds: Some(30),
            currency_symbol: Some("US$".into()),
            date_format: Some("%Y-%m-%d".into()),
            ..Config::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_lock_wait_too_long() {
        let config = Config {
            maximum_lock_wait_seconds: Some(MAX_LOCK_WAIT_SECONDS + 1),
            ..Config::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_validate_currency_symbol() {
        for bad in ["", "   ", "EXTRA-LONG-SYMBOL", "R\u{7}$"] {
            let config = Config {
                currency_symbol: Some(bad.into()),
                ..Config::default()
            };
            let err = ConfigValidator::validate(&config).unwrap_err();
            assert!(err.to_string().contains("currency_symbol"), "{bad:?}");
        }
    }

    #[test]
    fn test_validate_date_format() {
        let config = Config {
            date_format: Some("%d/%Q".into()),
            ..Config::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }
}
