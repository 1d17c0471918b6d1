//! Client registration and profile management.

use crate::client::{Client, ClientDraft};
use crate::error::{Error, Result};
use crate::id::ClientId;
use crate::store::HotelStore;

/// Registers a new client.
///
/// # Errors
///
/// Returns `Conflict` if the e-mail is already registered.
pub fn register_client<S: HotelStore + ?Sized>(store: &S, draft: &ClientDraft) -> Result<Client> {
    let client = store.insert_client(draft)?;
    log::info!("registered {} <{}>", client.id.describe(), client.email);
    Ok(client)
}

/// Returns the client with the given id.
///
/// # Errors
///
/// Returns `NotFound` if no such client exists.
pub fn get_client<S: HotelStore + ?Sized>(store: &S, id: ClientId) -> Result<Client> {
    store
        .find_client(id)?
        .ok_or_else(|| Error::not_found(id.describe()))
}

/// Returns the client registered under `email`, ignoring case.
///
/// # Errors
///
/// Returns `NotFound` if no client uses that e-mail.
pub fn get_client_by_email<S: HotelStore + ?Sized>(store: &S, email: &str) -> Result<Client> {
    store
        .find_client_by_email(email.trim())?
        .ok_or_else(|| Error::not_found(format!("client with e-mail {}", email.trim())))
}

/// Replaces a client's profile and returns the stored record.
///
/// # Errors
///
/// Returns `NotFound` if the client does not exist, or `Conflict` if the new
/// e-mail belongs to someone else.
pub fn update_client<S: HotelStore + ?Sized>(
    store: &S,
    id: ClientId,
    draft: &ClientDraft,
) -> Result<Client> {
    if !store.update_client(id, draft)? {
        return Err(Error::not_found(id.describe()));
    }
    get_client(store, id)
}

/// Deletes a client.
///
/// # Errors
///
/// Returns `NotFound` if the client does not exist, or `IntegrityViolation`
/// while any reservation still references it.
pub fn delete_client<S: HotelStore + ?Sized>(store: &S, id: ClientId) -> Result<()> {
    if !store.delete_client(id)? {
        return Err(Error::not_found(id.describe()));
    }
    log::info!("deleted {}", id.describe());
    Ok(())
}
