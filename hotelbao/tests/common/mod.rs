//! Common test utilities for integration tests.
//!
//! This module provides a throwaway hotel database and fixture builders for
//! testing the hotelbao library.

pub mod database;

use chrono::{DateTime, Utc};

use hotelbao::stay::parse_instant;
use hotelbao::store::HotelStore;
use hotelbao::{Accommodation, AccommodationDraft, Client, ClientDraft, Money};

/// Parses a `YYYY-MM-DD` date as midnight UTC.
#[allow(dead_code)]
pub fn day(text: &str) -> DateTime<Utc> {
    parse_instant(text).unwrap()
}

/// Builder for test clients with a complete, invoiceable profile.
///
/// # Examples
///
/// ```no_run
/// # use common::ClientFixture;
/// let draft = ClientFixture::new("maria@example.com")
///     .with_name("Maria Souza")
///     .without_address()
///     .build();
/// ```
#[allow(dead_code)]
pub struct ClientFixture {
    name: String,
    email: String,
    address: Option<String>,
    city: Option<String>,
}

#[allow(dead_code)]
impl ClientFixture {
    /// Defaults: name "Ana Lima", address "Rua A, 10", city "Formiga".
    pub fn new(email: &str) -> Self {
        Self {
            name: "Ana Lima".to_string(),
            email: email.to_string(),
            address: Some("Rua A, 10".to_string()),
            city: Some("Formiga".to_string()),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn without_address(mut self) -> Self {
        self.address = None;
        self
    }

    pub fn build(self) -> ClientDraft {
        ClientDraft::builder(self.name, self.email, "$2a$10$hash")
            .address(self.address)
            .city(self.city)
            .build()
            .unwrap()
    }

    /// Builds and stores the client.
    pub fn insert(self, store: &impl HotelStore) -> Client {
        store.insert_client(&self.build()).unwrap()
    }
}

/// An accommodation draft with the given description and whole-unit value.
#[allow(dead_code)]
pub fn room(description: &str, value: i64) -> AccommodationDraft {
    AccommodationDraft::builder(Money::from_cents(value * 100))
        .description(Some(description.to_string()))
        .build()
        .unwrap()
}

/// Stores an accommodation built by [`room`].
#[allow(dead_code)]
pub fn insert_room(store: &impl HotelStore, description: &str, value: i64) -> Accommodation {
    store.insert_accommodation(&room(description, value)).unwrap()
}
