//! Stay periods and the half-open overlap rule.
//!
//! A stay occupies `[check_in, check_out)`: the check-out instant is free
//! for the next guest, so back-to-back stays never collide.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod proptests;

/// A validated stay interval with `check_in < check_out`.
///
/// # Examples
///
/// ```
/// use hotelbao::StayPeriod;
///
/// let first = StayPeriod::parse("2025-07-20", "2025-07-25").unwrap();
/// let overlapping = StayPeriod::parse("2025-07-24", "2025-07-28").unwrap();
/// let back_to_back = StayPeriod::parse("2025-07-25", "2025-07-28").unwrap();
///
/// assert!(first.overlaps(&overlapping));
/// assert!(!first.overlaps(&back_to_back));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayPeriod {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl StayPeriod {
    /// Creates a stay period. Both instants are truncated to whole seconds,
    /// the resolution the store keeps.
    ///
    /// # Errors
    ///
    /// Returns an error unless `check_in` is strictly before `check_out`.
    pub fn new(
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> Result<Self, InvalidPeriodError> {
        let check_in = check_in.trunc_subsecs(0);
        let check_out = check_out.trunc_subsecs(0);
        if check_in < check_out {
            Ok(Self {
                check_in,
                check_out,
            })
        } else {
            Err(InvalidPeriodError {
                check_in,
                check_out,
            })
        }
    }

    /// Parses both ends with [`parse_instant`] and validates the order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either instant cannot be parsed or the
    /// order is wrong.
    pub fn parse(check_in: &str, check_out: &str) -> crate::Result<Self> {
        let check_in = parse_instant(check_in)?;
        let check_out = parse_instant(check_out)?;
        Ok(Self::new(check_in, check_out)?)
    }

    /// Returns the check-in instant.
    #[must_use]
    pub const fn check_in(&self) -> DateTime<Utc> {
        self.check_in
    }

    /// Returns the check-out instant.
    #[must_use]
    pub const fn check_out(&self) -> DateTime<Utc> {
        self.check_out
    }

    /// Returns `true` if the two stays share at least one instant.
    ///
    /// This is the classic half-open test `a.start < b.end && a.end > b.start`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }

    /// Number of started nights covered by the stay.
    #[must_use]
    pub fn nights(&self) -> i64 {
        let seconds = (self.check_out - self.check_in).num_seconds();
        (seconds + 86_399) / 86_400
    }
}

impl fmt::Display for StayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.check_in.to_rfc3339(),
            self.check_out.to_rfc3339()
        )
    }
}

/// Error returned when check-out is not after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPeriodError {
    /// The requested check-in.
    pub check_in: DateTime<Utc>,
    /// The requested check-out.
    pub check_out: DateTime<Utc>,
}

impl fmt::Display for InvalidPeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "check-out ({}) must be after check-in ({})",
            self.check_out.to_rfc3339(),
            self.check_in.to_rfc3339()
        )
    }
}

impl std::error::Error for InvalidPeriodError {}

/// Parses an instant given either as an RFC 3339 timestamp or as a plain
/// `YYYY-MM-DD` date (midnight UTC).
///
/// # Errors
///
/// Returns `InvalidArgument` if the text matches neither form.
///
/// # Examples
///
/// ```
/// use hotelbao::stay::parse_instant;
///
/// let a = parse_instant("2025-07-20").unwrap();
/// let b = parse_instant("2025-07-20T00:00:00Z").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_instant(text: &str) -> crate::Result<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(crate::Error::invalid_argument(format!(
        "cannot parse '{text}' as a date (expected YYYY-MM-DD or RFC 3339)"
    )))
}
