//! Client invoice rendering.

use crate::client::Client;
use crate::error::{Error, Result};
use crate::id::ClientId;
use crate::money::Money;
use crate::reservation::ReservationDetails;
use crate::store::{HotelStore, ValueOrder};
use crate::validation::is_blank;

use super::{sum_of_stays, ReportStyle};

const RULE: &str = "===============================";

/// Renders the invoice for `client_id`.
///
/// Only stays in an accommodation with a description and a non-zero value
/// are invoiced; the total sums those stays.
///
/// # Errors
///
/// Returns:
/// - `NotFound` if the client does not exist
/// - `InvalidArgument` if the client's name, address or city is blank
/// - `InvalidArgument` if the client has no invoiceable stay
/// - `InvalidArgument` if the invoiced total does not fit in a [`Money`]
pub fn generate_invoice<S: HotelStore + ?Sized>(
    store: &S,
    client_id: ClientId,
    style: &ReportStyle,
) -> Result<String> {
    let client = store
        .find_client(client_id)?
        .ok_or_else(|| Error::not_found(client_id.describe()))?;

    if client.name.trim().is_empty()
        || is_blank(client.address.as_deref())
        || is_blank(client.city.as_deref())
    {
        return Err(Error::invalid_argument(
            "name, address and city of the client must all be filled in",
        ));
    }

    let stays: Vec<ReservationDetails> = store
        .reservations_for_client(client_id, ValueOrder::Booked)?
        .into_iter()
        .filter(ReservationDetails::is_invoiceable)
        .collect();
    if stays.is_empty() {
        return Err(Error::invalid_argument(
            "there must be at least one stay with a description and a value",
        ));
    }

    let total = sum_of_stays(&stays)?;

    log::debug!("invoicing {} stays for {}", stays.len(), client_id.describe());
    Ok(render(&client, &stays, total, style))
}

fn render(
    client: &Client,
    stays: &[ReservationDetails],
    total: Money,
    style: &ReportStyle,
) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "            INVOICE".to_string(),
        RULE.to_string(),
        format!("Name: {}", client.name),
        format!("Address: {}", client.address.as_deref().unwrap_or_default()),
        format!("City: {}", client.city.as_deref().unwrap_or_default()),
        RULE.to_string(),
        "        ==== STAYS ====".to_string(),
    ];

    for stay in stays {
        let room = &stay.accommodation;
        lines.push(format!(
            "Room: {}    Value: {}",
            room.description.as_deref().unwrap_or_default(),
            room.value
        ));
    }

    lines.push(RULE.to_string());
    lines.push(format!("Total: {} {total}", style.currency_symbol));
    lines.push(RULE.to_string());
    lines.join("\n")
}
