//! Monetary amounts with a fixed two-decimal representation.
//!
//! Nightly values are stored as integer cents so that sums and the
//! `%.2f`-style rendering used by invoices stay exact. Addition is checked:
//! a total that does not fit in an `i64` of cents is reported, never wrapped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod proptests;

/// An amount of money in cents.
///
/// # Examples
///
/// ```
/// use hotelbao::Money;
///
/// let value: Money = "150.5".parse().unwrap();
/// assert_eq!(value.cents(), 15050);
/// assert_eq!(value.to_string(), "150.50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Validates that the amount can be used as a nightly value.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::Money;
    ///
    /// assert!(Money::from_cents(100).nightly_value().is_ok());
    /// assert!(Money::ZERO.nightly_value().is_err());
    /// ```
    pub fn nightly_value(self) -> Result<Self, InvalidMoneyError> {
        if self.is_positive() {
            Ok(self)
        } else {
            Err(InvalidMoneyError {
                input: self.to_string(),
                reason: "nightly value must be positive".into(),
            })
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Sums a sequence of amounts, returning `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::Money;
    ///
    /// let total = Money::checked_sum([10000, 30000, 5000].map(Money::from_cents));
    /// assert_eq!(total, Some(Money::from_cents(45000)));
    ///
    /// let huge = Money::from_cents(i64::MAX);
    /// assert_eq!(Money::checked_sum([huge, Money::from_cents(1)]), None);
    /// ```
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, Self::checked_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = InvalidMoneyError;

    /// Parses `"120"`, `"120.5"` or `"120.50"`; a comma is accepted as the
    /// decimal separator. More than two fractional digits is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| InvalidMoneyError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let normalized = digits.replace(',', ".");
        let (whole, fraction) = match normalized.split_once('.') {
            Some((w, f)) => (w, f),
            None => (normalized.as_str(), ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal separator"));
        }
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimal digits are allowed"));
        }

        let whole: i64 = whole.parse().map_err(|_| invalid("amount is too large"))?;
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => fraction.parse::<i64>().map_err(|_| invalid("bad fraction"))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

/// Error type for amounts that cannot be parsed or are not acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMoneyError {
    /// The offending input.
    pub input: String,
    /// The reason the amount is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidMoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid amount '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidMoneyError {}
