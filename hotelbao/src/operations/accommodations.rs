//! Accommodation catalogue management.

use crate::accommodation::{Accommodation, AccommodationDraft};
use crate::error::{Error, Result};
use crate::id::AccommodationId;
use crate::store::HotelStore;

/// Adds an accommodation to the catalogue.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn add_accommodation<S: HotelStore + ?Sized>(
    store: &S,
    draft: &AccommodationDraft,
) -> Result<Accommodation> {
    let accommodation = store.insert_accommodation(draft)?;
    log::info!(
        "added {} at {}",
        accommodation.id.describe(),
        accommodation.value
    );
    Ok(accommodation)
}

/// Returns the accommodation with the given id.
///
/// # Errors
///
/// Returns `NotFound` if it does not exist.
pub fn get_accommodation<S: HotelStore + ?Sized>(
    store: &S,
    id: AccommodationId,
) -> Result<Accommodation> {
    store
        .find_accommodation(id)?
        .ok_or_else(|| Error::not_found(id.describe()))
}

/// Replaces an accommodation's description, value and image.
///
/// Existing reservations keep pointing at the accommodation, so reports pick
/// up the new value.
///
/// # Errors
///
/// Returns `NotFound` if it does not exist.
pub fn update_accommodation<S: HotelStore + ?Sized>(
    store: &S,
    id: AccommodationId,
    draft: &AccommodationDraft,
) -> Result<Accommodation> {
    if !store.update_accommodation(id, draft)? {
        return Err(Error::not_found(id.describe()));
    }
    get_accommodation(store, id)
}

/// Removes an accommodation from the catalogue.
///
/// # Errors
///
/// Returns `NotFound` if it does not exist, or `IntegrityViolation` while a
/// reservation still references it.
pub fn delete_accommodation<S: HotelStore + ?Sized>(store: &S, id: AccommodationId) -> Result<()> {
    if !store.delete_accommodation(id)? {
        return Err(Error::not_found(id.describe()));
    }
    log::info!("deleted {}", id.describe());
    Ok(())
}
