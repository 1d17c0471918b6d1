//! Typed record identifiers.
//!
//! Each record kind gets its own newtype over the SQLite row id so that a
//! client id can never be passed where an accommodation id is expected.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw row id.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }

            /// Human readable label used in error messages.
            #[must_use]
            pub fn describe(self) -> String {
                format!("{} {}", $label, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl rusqlite::ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
                Ok(rusqlite::types::ToSqlOutput::from(self.0))
            }
        }
    };
}

record_id!(
    /// Identifier of a registered client.
    ClientId,
    "client"
);

record_id!(
    /// Identifier of an accommodation (bedroom).
    AccommodationId,
    "accommodation"
);

record_id!(
    /// Identifier of a reservation (stay).
    ReservationId,
    "reservation"
);
