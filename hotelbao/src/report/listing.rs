//! One-line text listings.
//!
//! Every blank or missing text field is printed as `N/A`.

use crate::accommodation::Accommodation;
use crate::client::Client;
use crate::error::Result;
use crate::reservation::ReservationDetails;
use crate::store::HotelStore;

use super::{or_na, ReportStyle};

/// Formats one client.
///
/// # Examples
///
/// ```no_run
/// # use hotelbao::Client;
/// # fn show(client: &Client) {
/// use hotelbao::report::listing::client_line;
/// println!("{}", client_line(client));
/// // Client - Code: 1 - Name: Maria - Email: maria@example.com - Phone: N/A - ...
/// # }
/// ```
#[must_use]
pub fn client_line(client: &Client) -> String {
    format!(
        "Client - Code: {} - Name: {} - Email: {} - Phone: {} - Address: {} - City: {}",
        client.id,
        or_na(Some(client.name.as_str())),
        or_na(Some(client.email.as_str())),
        or_na(client.phone.as_deref()),
        or_na(client.address.as_deref()),
        or_na(client.city.as_deref()),
    )
}

/// Formats one accommodation.
#[must_use]
pub fn accommodation_line(accommodation: &Accommodation, style: &ReportStyle) -> String {
    format!(
        "Accommodation - Code: {} - Description: {} - Value: {} {} - Image: {}",
        accommodation.id,
        or_na(accommodation.description.as_deref()),
        style.currency_symbol,
        accommodation.value,
        or_na(accommodation.image_url.as_deref()),
    )
}

/// Formats one reservation with its guest's name, the room description and
/// the check-in date.
#[must_use]
pub fn reservation_line(details: &ReservationDetails, style: &ReportStyle) -> String {
    format!(
        "Stay - Code: {} - Client: {} - Room: {} - Date: {}",
        details.reservation.id,
        or_na(Some(details.client.name.as_str())),
        or_na(details.accommodation.description.as_deref()),
        style.format_date(details.reservation.period.check_in()),
    )
}

/// Lists every client.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn client_listing<S: HotelStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    Ok(store.list_clients()?.iter().map(client_line).collect())
}

/// Lists every accommodation.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn accommodation_listing<S: HotelStore + ?Sized>(
    store: &S,
    style: &ReportStyle,
) -> Result<Vec<String>> {
    Ok(store
        .list_accommodations()?
        .iter()
        .map(|a| accommodation_line(a, style))
        .collect())
}

/// Lists every reservation.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn reservation_listing<S: HotelStore + ?Sized>(
    store: &S,
    style: &ReportStyle,
) -> Result<Vec<String>> {
    Ok(store
        .all_reservation_details()?
        .iter()
        .map(|d| reservation_line(d, style))
        .collect())
}
