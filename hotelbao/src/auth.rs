//! Role gates.
//!
//! Authentication happens outside this crate. Callers hand in a resolved
//! [`Principal`] and ask [`authorize`] whether it may perform an [`Action`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::id::ClientId;

/// The role of a registered client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A hotel guest. May act on their own records only.
    #[default]
    Client,
    /// Hotel staff. May act on every record.
    Admin,
}

impl Role {
    /// Returns the lowercase name stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "admin" => Ok(Self::Admin),
            other => Err(Error::invalid_argument(format!(
                "unknown role '{other}' (expected 'client' or 'admin')"
            ))),
        }
    }
}

/// Something a caller may try to do.
///
/// Actions scoped to a single client carry that client's id so the gate can
/// compare it with the principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Browse accommodations.
    ViewAccommodations,
    /// Create, update or delete accommodations.
    ManageAccommodations,
    /// Register a new client account.
    RegisterClient,
    /// List every client.
    ListClients,
    /// Read or change one client's profile.
    ManageClient(ClientId),
    /// Give an account the admin role.
    GrantAdmin,
    /// List or look up reservations of any client.
    ListReservations,
    /// Book a stay on behalf of the given client.
    CreateReservation(ClientId),
    /// Update or cancel an existing reservation.
    ModifyReservation,
    /// Invoice and value reports for the given client.
    ViewClientReport(ClientId),
    /// Delete every record.
    PurgeData,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewAccommodations => f.write_str("view accommodations"),
            Self::ManageAccommodations => f.write_str("manage accommodations"),
            Self::RegisterClient => f.write_str("register clients"),
            Self::ListClients => f.write_str("list clients"),
            Self::ManageClient(id) => write!(f, "manage client {id}"),
            Self::GrantAdmin => f.write_str("grant the admin role"),
            Self::ListReservations => f.write_str("list reservations"),
            Self::CreateReservation(id) => write!(f, "create reservations for client {id}"),
            Self::ModifyReservation => f.write_str("modify reservations"),
            Self::ViewClientReport(id) => write!(f, "view reports for client {id}"),
            Self::PurgeData => f.write_str("purge all data"),
        }
    }
}

/// An authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// The client account the caller logged in as, if any.
    pub client_id: Option<ClientId>,
    /// The caller's role.
    pub role: Role,
}

impl Principal {
    /// A staff member not tied to a client account.
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            client_id: None,
            role: Role::Admin,
        }
    }

    /// A guest logged in as the given client.
    #[must_use]
    pub const fn client(client_id: ClientId) -> Self {
        Self {
            client_id: Some(client_id),
            role: Role::Client,
        }
    }

    fn owns(&self, owner: ClientId) -> bool {
        self.client_id == Some(owner)
    }
}

/// Checks whether `principal` may perform `action`.
///
/// # Errors
///
/// Returns [`Error::PermissionDenied`] when the role gate refuses.
///
/// # Examples
///
/// ```
/// use hotelbao::auth::{authorize, Action, Principal};
/// use hotelbao::ClientId;
///
/// let guest = Principal::client(ClientId::new(1));
/// assert!(authorize(&guest, Action::CreateReservation(ClientId::new(1))).is_ok());
/// assert!(authorize(&guest, Action::CreateReservation(ClientId::new(2))).is_err());
/// assert!(authorize(&Principal::admin(), Action::PurgeData).is_ok());
/// ```
pub fn authorize(principal: &Principal, action: Action) -> Result<()> {
    let allowed = match (principal.role, action) {
        (_, Action::ViewAccommodations | Action::RegisterClient) | (Role::Admin, _) => true,
        (
            Role::Client,
            Action::ManageClient(owner)
            | Action::CreateReservation(owner)
            | Action::ViewClientReport(owner),
        ) => principal.owns(owner),
        (
            Role::Client,
            Action::ManageAccommodations
            | Action::ListClients
            | Action::GrantAdmin
            | Action::ListReservations
            | Action::ModifyReservation
            | Action::PurgeData,
        ) => false,
    };

    if allowed {
        Ok(())
    } else {
        log::debug!("denied {} to {}", action, principal.role);
        Err(Error::PermissionDenied {
            role: principal.role,
            action,
        })
    }
}
