//! Client records and the builder used to register or edit them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::Role;
use crate::id::ClientId;
use crate::validation::{trimmed, ValidationError};

/// Shortest accepted client name, in characters.
pub const MIN_NAME_LEN: usize = 3;
/// Longest accepted client name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// A registered hotel client.
///
/// The password hash is kept opaque and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    /// Store-assigned identifier.
    pub id: ClientId,
    /// Display name.
    pub name: String,
    /// Login e-mail, unique across clients.
    pub email: String,
    /// Hash produced by the external password hasher.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Street address, required for invoicing.
    pub address: Option<String>,
    /// City, required for invoicing.
    pub city: Option<String>,
    /// Authorization role.
    pub role: Role,
    /// When the client registered.
    pub created_at: DateTime<Utc>,
    /// When the profile last changed.
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Returns a builder pre-filled with this client's current profile.
    ///
    /// Used to apply partial edits before calling `update_client`.
    #[must_use]
    pub fn to_builder(&self) -> ClientDraftBuilder {
        ClientDraft::builder(&self.name, &self.email, &self.password_hash)
            .phone(self.phone.clone())
            .address(self.address.clone())
            .city(self.city.clone())
            .role(self.role)
    }
}

/// Validated profile data for inserting or replacing a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    name: String,
    email: String,
    password_hash: String,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    role: Role,
}

impl ClientDraft {
    /// Starts a new client draft.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::ClientDraft;
    ///
    /// let draft = ClientDraft::builder("Maria Silva", "maria@example.com", "$argon2id$...")
    ///     .city(Some("Formiga".to_string()))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(draft.city(), Some("Formiga"));
    ///
    /// assert!(ClientDraft::builder("Al", "al@example.com", "x").build().is_err());
    /// ```
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> ClientDraftBuilder {
        ClientDraftBuilder {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            phone: None,
            address: None,
            city: None,
            role: Role::default(),
        }
    }

    /// Returns the trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed e-mail.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the phone, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the city, if any.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// Builder for [`ClientDraft`].
#[derive(Debug, Clone)]
pub struct ClientDraftBuilder {
    name: String,
    email: String,
    password_hash: String,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    role: Role,
}

impl ClientDraftBuilder {
    /// Replaces the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the e-mail.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Replaces the password hash.
    #[must_use]
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the phone. Blank values are stored as absent.
    #[must_use]
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the address. Blank values are stored as absent.
    #[must_use]
    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// Sets the city. Blank values are stored as absent.
    #[must_use]
    pub fn city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }

    /// Sets the role.
    #[must_use]
    pub const fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Validates and builds the draft.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The trimmed name is shorter than 3 or longer than 255 characters
    /// - The e-mail lacks an `@` with text on both sides
    /// - The password hash is empty
    pub fn build(self) -> Result<ClientDraft, ValidationError> {
        let name = self.name.trim().to_string();
        let name_len = name.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name_len) {
            return Err(ValidationError::new(
                "name",
                format!("name must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters"),
            ));
        }

        let email = self.email.trim().to_string();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(ValidationError::new(
                    "email",
                    "email must look like local@domain",
                ))
            }
        }
        if email.chars().any(char::is_whitespace) {
            return Err(ValidationError::new(
                "email",
                "email must not contain whitespace",
            ));
        }

        if self.password_hash.is_empty() {
            return Err(ValidationError::new(
                "password_hash",
                "password hash must not be empty",
            ));
        }

        Ok(ClientDraft {
            name,
            email,
            password_hash: self.password_hash,
            phone: trimmed(self.phone),
            address: trimmed(self.address),
            city: trimmed(self.city),
            role: self.role,
        })
    }
}
