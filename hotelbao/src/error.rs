//! Error types for the hotelbao library.
//!
//! This module provides the error hierarchy for all operations in the
//! library, using `thiserror` for ergonomic error handling. Errors are grouped
//! into an [`ErrorKind`] so that outer layers (CLI, HTTP adapters) can map them
//! to exit codes or status codes without matching every variant.

use std::path::PathBuf;

use rusqlite::ffi;
use thiserror::Error;

use crate::auth::{Action, Role};

/// Result type alias for operations that may fail with a hotelbao error.
///
/// # Examples
///
/// ```
/// use hotelbao::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotelbao library.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced client, accommodation or reservation does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The request collides with existing data (overlapping stay, duplicate email).
    #[error("conflict: {details}")]
    Conflict {
        /// Details about the conflict.
        details: String,
    },

    /// The request is well-formed but cannot be honoured as given.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Why the argument was rejected.
        message: String,
    },

    /// A persistence-layer constraint rejected the change.
    #[error("integrity violation: {details}")]
    IntegrityViolation {
        /// Details about the violated constraint.
        details: String,
    },

    /// The caller's role does not allow the requested action.
    #[error("permission denied: role '{role}' may not {action}")]
    PermissionDenied {
        /// The role of the caller.
        role: Role,
        /// The action that was attempted.
        action: Action,
    },

    /// A field failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database stayed locked for longer than the busy timeout.
    #[error("database lock timeout")]
    LockTimeout,

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Referenced record is absent.
    NotFound,
    /// Overlapping reservation or duplicate unique value.
    Conflict,
    /// Bad input, including failed field validation.
    InvalidArgument,
    /// Constraint failure on delete.
    IntegrityViolation,
    /// Role gate refused the action.
    PermissionDenied,
    /// Everything else (I/O, database, configuration, timeouts).
    Internal,
}

impl Error {
    /// Creates a `NotFound` error for the given resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates an `InvalidArgument` error with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns the coarse kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::{Error, ErrorKind};
    ///
    /// let err = Error::not_found("client 7");
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::InvalidArgument { .. } | Self::Validation { .. } => ErrorKind::InvalidArgument,
            Self::IntegrityViolation { .. } => ErrorKind::IntegrityViolation,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            _ => ErrorKind::Internal,
        }
    }

    /// Returns the conventional HTTP status code for this error.
    ///
    /// Integrity violations surface as a generic server failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::Error;
    ///
    /// let err = Error::Conflict { details: "room taken".into() };
    /// assert_eq!(err.status_code(), 409);
    /// ```
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InvalidArgument => 400,
            ErrorKind::PermissionDenied => 403,
            ErrorKind::IntegrityViolation | ErrorKind::Internal => 500,
        }
    }

    /// Translates a failed write into a domain error.
    ///
    /// Constraint failures become `Conflict` (unique keys, overlap trigger) or
    /// `IntegrityViolation` (foreign keys); busy/locked becomes `LockTimeout`.
    /// Anything else is kept as a plain database error.
    pub(crate) fn from_write(err: rusqlite::Error, context: &str) -> Self {
        if let rusqlite::Error::SqliteFailure(ref sqlite_err, ref message) = err {
            let detail = message.clone().unwrap_or_else(|| sqlite_err.to_string());
            match sqlite_err.extended_code {
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return Self::IntegrityViolation {
                        details: format!("{context}: foreign key constraint failed"),
                    };
                }
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_TRIGGER => {
                    return Self::Conflict {
                        details: format!("{context}: {detail}"),
                    };
                }
                _ => {}
            }
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ) {
                return Self::LockTimeout;
            }
        }
        Self::Database(err)
    }
}

impl From<crate::money::InvalidMoneyError> for Error {
    fn from(err: crate::money::InvalidMoneyError) -> Self {
        Self::Validation {
            field: "value".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::stay::InvalidPeriodError> for Error {
    fn from(err: crate::stay::InvalidPeriodError) -> Self {
        Self::InvalidArgument {
            message: err.to_string(),
        }
    }
}

impl From<crate::validation::ValidationError> for Error {
    fn from(err: crate::validation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = Error::not_found("reservation 12");
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("reservation 12"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_conflict_error() {
        let err = Error::Conflict {
            details: "accommodation 3 is already booked".to_string(),
        };
        assert!(format!("{err}").contains("already booked"));
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_invalid_argument_and_validation_share_kind() {
        let a = Error::invalid_argument("check-out must be after check-in");
        let b = Error::Validation {
            field: "email".to_string(),
            message: "must contain '@'".to_string(),
        };
        assert_eq!(a.kind(), ErrorKind::InvalidArgument);
        assert_eq!(b.kind(), ErrorKind::InvalidArgument);
        assert_eq!(a.status_code(), 400);
        assert_eq!(b.status_code(), 400);
    }

    #[test]
    fn test_integrity_violation_is_server_failure() {
        let err = Error::IntegrityViolation {
            details: "client 1 is still referenced".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::IntegrityViolation);
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_permission_denied_display() {
        let err = Error::PermissionDenied {
            role: Role::Client,
            action: Action::PurgeData,
        };
        let display = format!("{err}");
        assert!(display.contains("client"));
        assert!(display.contains("purge"));
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_from_write_keeps_unrelated_errors() {
        let err = Error::from_write(rusqlite::Error::QueryReturnedNoRows, "insert client");
        assert!(matches!(err, Error::Database(_)));
    }

    #[test]
    fn test_from_write_maps_foreign_key_failure() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE parent (id INTEGER PRIMARY KEY);
             CREATE TABLE child (id INTEGER PRIMARY KEY,
                 parent_id INTEGER NOT NULL REFERENCES parent(id) ON DELETE RESTRICT);
             INSERT INTO parent (id) VALUES (1);
             INSERT INTO child (id, parent_id) VALUES (1, 1);",
        )
        .unwrap();

        let raw = conn.execute("DELETE FROM parent WHERE id = 1", []).unwrap_err();
        let err = Error::from_write(raw, "delete parent 1");
        assert_eq!(err.kind(), ErrorKind::IntegrityViolation);
    }

    #[test]
    fn test_from_write_maps_unique_failure() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE t (email TEXT NOT NULL UNIQUE);
             INSERT INTO t (email) VALUES ('a@b.c');",
        )
        .unwrap();

        let raw = conn
            .execute("INSERT INTO t (email) VALUES ('a@b.c')", [])
            .unwrap_err();
        let err = Error::from_write(raw, "insert client");
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i64> {
            Err(Error::invalid_argument("test"))
        }

        assert!(returns_result().is_err());
    }
}
