//! Read-only reporting over stored reservations.
//!
//! - [`summary`]: per-client total, highest and lowest value stays
//! - [`invoice`]: the fixed-layout client invoice
//! - [`listing`]: one-line text listings of every record kind
//!
//! All of them render amounts with two decimals and no locale rules.

pub mod invoice;
pub mod listing;
pub mod summary;

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::money::Money;
use crate::reservation::ReservationDetails;

pub use invoice::generate_invoice;
pub use listing::{accommodation_listing, client_listing, reservation_listing};
pub use summary::{
    highest_value_line, highest_value_reservation, lowest_value_line, lowest_value_reservation,
    total_value, total_value_line, NO_RESERVATIONS_MESSAGE,
};

/// Default currency symbol.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Default `strftime` pattern for dates in listings.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Placeholder for blank fields in listings.
pub const NOT_AVAILABLE: &str = "N/A";

/// Presentation settings shared by every report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Symbol printed before amounts.
    pub currency_symbol: String,
    /// `strftime` pattern for dates.
    pub date_format: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ReportStyle {
    /// Takes the currency symbol and date format from a resolved
    /// configuration, falling back to the defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            currency_symbol: config
                .currency_symbol
                .clone()
                .unwrap_or(defaults.currency_symbol),
            date_format: config.date_format.clone().unwrap_or(defaults.date_format),
        }
    }

    /// Formats `instant` with the configured date pattern.
    ///
    /// A pattern chrono cannot render falls back to [`DEFAULT_DATE_FORMAT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::report::ReportStyle;
    /// use hotelbao::stay::parse_instant;
    ///
    /// let style = ReportStyle::default();
    /// assert_eq!(style.format_date(parse_instant("2025-07-20").unwrap()), "20/07/2025");
    /// ```
    #[must_use]
    pub fn format_date(&self, instant: DateTime<Utc>) -> String {
        if is_valid_date_format(&self.date_format) {
            let mut out = String::new();
            if write!(out, "{}", instant.format(&self.date_format)).is_ok() {
                return out;
            }
        }
        instant.format(DEFAULT_DATE_FORMAT).to_string()
    }
}

/// Returns `true` if chrono understands every specifier in `pattern`.
#[must_use]
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Sums the accommodation values of `stays`.
pub(crate) fn sum_of_stays<'a, I>(stays: I) -> Result<Money>
where
    I: IntoIterator<Item = &'a ReservationDetails>,
{
    Money::checked_sum(stays.into_iter().map(|d| d.accommodation.value))
        .ok_or_else(|| Error::invalid_argument("total value of the stays is too large"))
}

/// Returns the trimmed value, or `N/A` when it is absent or blank.
pub(crate) fn or_na(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}
