//! Accommodations (bedrooms) offered by the hotel.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::id::AccommodationId;
use crate::money::Money;
use crate::validation::{trimmed, ValidationError};

/// A rentable unit with a nightly value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accommodation {
    /// Store-assigned identifier.
    pub id: AccommodationId,
    /// Free-text description shown on invoices.
    pub description: Option<String>,
    /// Nightly value.
    pub value: Money,
    /// Reference to a picture of the room.
    pub image_url: Option<String>,
    /// When the accommodation was added.
    pub created_at: DateTime<Utc>,
    /// When the accommodation last changed.
    pub updated_at: DateTime<Utc>,
}

impl Accommodation {
    /// Returns a builder pre-filled with the current fields.
    #[must_use]
    pub fn to_builder(&self) -> AccommodationDraftBuilder {
        AccommodationDraft::builder(self.value)
            .description(self.description.clone())
            .image_url(self.image_url.clone())
    }
}

/// Validated data for inserting or replacing an accommodation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccommodationDraft {
    description: Option<String>,
    value: Money,
    image_url: Option<String>,
}

impl AccommodationDraft {
    /// Starts a draft with the given nightly value.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::{AccommodationDraft, Money};
    ///
    /// let draft = AccommodationDraft::builder(Money::from_cents(30000))
    ///     .description(Some("Suite Master".to_string()))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(draft.description(), Some("Suite Master"));
    ///
    /// assert!(AccommodationDraft::builder(Money::ZERO).build().is_err());
    /// ```
    #[must_use]
    pub const fn builder(value: Money) -> AccommodationDraftBuilder {
        AccommodationDraftBuilder {
            description: None,
            value,
            image_url: None,
        }
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the nightly value.
    #[must_use]
    pub const fn value(&self) -> Money {
        self.value
    }

    /// Returns the image reference, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// Builder for [`AccommodationDraft`].
#[derive(Debug, Clone)]
pub struct AccommodationDraftBuilder {
    description: Option<String>,
    value: Money,
    image_url: Option<String>,
}

impl AccommodationDraftBuilder {
    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Replaces the nightly value.
    #[must_use]
    pub const fn value(mut self, value: Money) -> Self {
        self.value = value;
        self
    }

    /// Sets the image reference.
    #[must_use]
    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Validates and builds the draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the nightly value is not strictly positive.
    pub fn build(self) -> Result<AccommodationDraft, ValidationError> {
        let value = self
            .value
            .nightly_value()
            .map_err(|e| ValidationError::new("value", e.reason))?;

        Ok(AccommodationDraft {
            description: trimmed(self.description),
            value,
            image_url: trimmed(self.image_url),
        })
    }
}
