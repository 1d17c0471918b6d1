//! Per-client value summaries.

use crate::error::Result;
use crate::id::ClientId;
use crate::money::Money;
use crate::reservation::ReservationDetails;
use crate::store::{HotelStore, ValueOrder};

use super::{or_na, sum_of_stays, ReportStyle};

/// Shown instead of a highest/lowest line when the client has no stays.
pub const NO_RESERVATIONS_MESSAGE: &str = "There are no reservations registered for this client.";

/// Sums the accommodation values of every reservation held by `client`.
///
/// A client without reservations, or an unknown client, totals zero.
///
/// # Errors
///
/// Returns an error if the store query fails, or `InvalidArgument` if the
/// total does not fit in a [`Money`].
pub fn total_value<S: HotelStore + ?Sized>(store: &S, client: ClientId) -> Result<Money> {
    sum_of_stays(&store.reservations_for_client(client, ValueOrder::Booked)?)
}

/// Returns the client's stay in the most expensive accommodation. Ties go to
/// the earliest booking.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn highest_value_reservation<S: HotelStore + ?Sized>(
    store: &S,
    client: ClientId,
) -> Result<Option<ReservationDetails>> {
    Ok(store
        .reservations_for_client(client, ValueOrder::Descending)?
        .into_iter()
        .next())
}

/// Returns the client's stay in the cheapest accommodation. Ties go to the
/// earliest booking.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn lowest_value_reservation<S: HotelStore + ?Sized>(
    store: &S,
    client: ClientId,
) -> Result<Option<ReservationDetails>> {
    Ok(store
        .reservations_for_client(client, ValueOrder::Ascending)?
        .into_iter()
        .next())
}

fn stay_line(label: &str, stay: Option<&ReservationDetails>, style: &ReportStyle) -> String {
    stay.map_or_else(
        || NO_RESERVATIONS_MESSAGE.to_string(),
        |d| {
            format!(
                "REPORT - {label} VALUE STAY: {} Value: {} {}",
                or_na(d.accommodation.description.as_deref()),
                style.currency_symbol,
                d.accommodation.value
            )
        },
    )
}

/// Renders the highest value report line.
///
/// # Examples
///
/// ```
/// use hotelbao::report::{summary::highest_value_line, ReportStyle};
///
/// let line = highest_value_line(None, &ReportStyle::default());
/// assert!(line.starts_with("There are no reservations"));
/// ```
#[must_use]
pub fn highest_value_line(stay: Option<&ReservationDetails>, style: &ReportStyle) -> String {
    stay_line("HIGHEST", stay, style)
}

/// Renders the lowest value report line.
#[must_use]
pub fn lowest_value_line(stay: Option<&ReservationDetails>, style: &ReportStyle) -> String {
    stay_line("LOWEST", stay, style)
}

/// Renders the total value report line.
#[must_use]
pub fn total_value_line(total: Money, style: &ReportStyle) -> String {
    format!(
        "REPORT - TOTAL VALUE OF CLIENT STAYS: {} {total}",
        style.currency_symbol
    )
}
