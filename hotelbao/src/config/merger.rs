//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hotelbao::config::{Config, ConfigMerger};
///
/// let low = Config { currency_symbol: Some("R$".to_string()), ..Default::default() };
/// let high = Config { currency_symbol: Some("US$".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.currency_symbol, Some("US$".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence, into one
    /// configuration.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`. Every field set in `source` replaces
    /// the one in `target`; unset fields leave `target` alone.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.currency_symbol.is_some() {
            target.currency_symbol.clone_from(&source.currency_symbol);
        }

        if source.date_format.is_some() {
            target.date_format.clone_from(&source.date_format);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}
