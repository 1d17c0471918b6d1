//! SQL for the `reservations` table, including the overlap query and the
//! joined rows used by reports.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::id::{AccommodationId, ClientId, ReservationId};
use crate::reservation::{NewReservation, Reservation, ReservationDetails};
use crate::stay::StayPeriod;
use crate::store::{PurgeCounts, ValueOrder};

use super::accommodations::row_to_accommodation;
use super::clients::row_to_client;
use super::store::{from_unix_secs, now_secs};

const RESERVATION_COLUMNS: &str =
    "id, client_id, accommodation_id, check_in, check_out, created_at, updated_at";

/// Reservation, client and accommodation columns, in the offsets expected by
/// [`row_to_details`].
const DETAIL_COLUMNS: &str = r"
    r.id, r.client_id, r.accommodation_id, r.check_in, r.check_out, r.created_at, r.updated_at,
    c.id, c.name, c.email, c.password_hash, c.phone, c.address, c.city, c.role,
    c.created_at, c.updated_at,
    a.id, a.description, a.value_cents, a.image_url, a.created_at, a.updated_at
";

const DETAIL_JOIN: &str = r"
    FROM reservations r
    JOIN clients c ON c.id = r.client_id
    JOIN accommodations a ON a.id = r.accommodation_id
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (client_id, accommodation_id, check_in, check_out, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET client_id = ?, accommodation_id = ?, check_in = ?, check_out = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

/// Half-open overlap test against every other stay in the same room.
const SELECT_OVERLAP: &str = r"
    SELECT EXISTS (
        SELECT 1 FROM reservations
        WHERE accommodation_id = ?1
          AND check_in < ?3
          AND check_out > ?2
          AND (?4 IS NULL OR id <> ?4)
    )
";

fn row_to_reservation(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    let check_in = from_unix_secs(row.get(3)?)?;
    let check_out = from_unix_secs(row.get(4)?)?;
    let period = StayPeriod::new(check_in, check_out)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Reservation {
        id: ReservationId::new(row.get(0)?),
        client_id: ClientId::new(row.get(1)?),
        accommodation_id: AccommodationId::new(row.get(2)?),
        period,
        created_at: from_unix_secs(row.get(5)?)?,
        updated_at: from_unix_secs(row.get(6)?)?,
    })
}

fn row_to_details(row: &Row<'_>) -> rusqlite::Result<ReservationDetails> {
    Ok(ReservationDetails {
        reservation: row_to_reservation(row)?,
        client: row_to_client(row, 7)?,
        accommodation: row_to_accommodation(row, 17)?,
    })
}

pub(super) fn insert(conn: &Connection, request: &NewReservation) -> Result<Reservation> {
    let now = now_secs();
    conn.execute(
        INSERT_RESERVATION,
        params![
            request.client_id,
            request.accommodation_id,
            request.period.check_in().timestamp(),
            request.period.check_out().timestamp(),
            now,
            now,
        ],
    )
    .map_err(|e| {
        Error::from_write(
            e,
            &format!("book {}", request.accommodation_id.describe()),
        )
    })?;

    let id = ReservationId::new(conn.last_insert_rowid());
    log::debug!(
        "inserted {} for {} on {}",
        id.describe(),
        request.client_id.describe(),
        request.accommodation_id.describe()
    );
    find(conn, id)?.ok_or_else(|| Error::not_found(id.describe()))
}

pub(super) fn find(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
    let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?");
    Ok(conn.query_row(&sql, [id], row_to_reservation).optional()?)
}

pub(super) fn list(conn: &Connection) -> Result<Vec<Reservation>> {
    let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let reservations = stmt
        .query_map([], row_to_reservation)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(reservations)
}

pub(super) fn update(
    conn: &Connection,
    id: ReservationId,
    request: &NewReservation,
) -> Result<bool> {
    let rows = conn
        .execute(
            UPDATE_RESERVATION,
            params![
                request.client_id,
                request.accommodation_id,
                request.period.check_in().timestamp(),
                request.period.check_out().timestamp(),
                now_secs(),
                id,
            ],
        )
        .map_err(|e| Error::from_write(e, &format!("update {}", id.describe())))?;
    Ok(rows > 0)
}

pub(super) fn delete(conn: &Connection, id: ReservationId) -> Result<bool> {
    let rows = conn
        .execute(DELETE_RESERVATION, [id])
        .map_err(|e| Error::from_write(e, &format!("delete {}", id.describe())))?;
    Ok(rows > 0)
}

pub(super) fn has_overlap(
    conn: &Connection,
    accommodation: AccommodationId,
    period: &StayPeriod,
    exclude: Option<ReservationId>,
) -> Result<bool> {
    let exists: bool = conn.query_row(
        SELECT_OVERLAP,
        params![
            accommodation,
            period.check_in().timestamp(),
            period.check_out().timestamp(),
            exclude,
        ],
        |row| row.get(0),
    )?;
    Ok(exists)
}

pub(super) fn for_client(
    conn: &Connection,
    client: ClientId,
    order: ValueOrder,
) -> Result<Vec<ReservationDetails>> {
    let order_by = match order {
        ValueOrder::Booked => "r.id",
        ValueOrder::Ascending => "a.value_cents ASC, r.id ASC",
        ValueOrder::Descending => "a.value_cents DESC, r.id ASC",
    };
    let sql = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOIN} WHERE r.client_id = ? ORDER BY {order_by}");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([client], row_to_details)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

pub(super) fn all_details(conn: &Connection) -> Result<Vec<ReservationDetails>> {
    let sql = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOIN} ORDER BY r.id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], row_to_details)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Deletes children before parents so the foreign keys never fire.
pub(super) fn purge(conn: &Connection) -> Result<PurgeCounts> {
    let reservations = conn.execute("DELETE FROM reservations", [])?;
    let clients = conn
        .execute("DELETE FROM clients", [])
        .map_err(|e| Error::from_write(e, "purge clients"))?;
    let accommodations = conn
        .execute("DELETE FROM accommodations", [])
        .map_err(|e| Error::from_write(e, "purge accommodations"))?;

    Ok(PurgeCounts {
        reservations,
        clients,
        accommodations,
    })
}

#[cfg(test)]
mod tests {
    use crate::database::test_util::{create_test_database, sample_client, sample_room};
    use crate::store::{HotelStore, ValueOrder};
    use crate::{ErrorKind, NewReservation, StayPeriod};

    fn period(a: &str, b: &str) -> StayPeriod {
        StayPeriod::parse(a, b).unwrap()
    }

    #[test]
    fn test_insert_then_find_round_trip() {
        let db = create_test_database();
        let store = db.connection();
        let client = store.insert_client(&sample_client("a@x.io")).unwrap();
        let room = store.insert_accommodation(&sample_room("Suite", 100)).unwrap();

        let request = NewReservation::new(client.id, room.id, period("2025-07-20", "2025-07-25"));
        let inserted = store.insert_reservation(&request).unwrap();
        let loaded = store.find_reservation(inserted.id).unwrap().unwrap();

        assert_eq!(loaded.request(), request);
        assert_eq!(loaded, inserted);
    }

    #[test]
    fn test_overlap_query_is_half_open() {
        let db = create_test_database();
        let store = db.connection();
        let client = store.insert_client(&sample_client("a@x.io")).unwrap();
        let room = store.insert_accommodation(&sample_room("Suite", 100)).unwrap();
        let other = store.insert_accommodation(&sample_room("Other", 100)).unwrap();
        let booked = store
            .insert_reservation(&NewReservation::new(
                client.id,
                room.id,
                period("2025-07-20", "2025-07-25"),
            ))
            .unwrap();

        let overlapping = period("2025-07-24", "2025-07-28");
        let back_to_back = period("2025-07-25", "2025-07-28");

        assert!(store
            .has_overlapping_reservation(room.id, &overlapping, None)
            .unwrap());
        assert!(!store
            .has_overlapping_reservation(room.id, &back_to_back, None)
            .unwrap());
        assert!(!store
            .has_overlapping_reservation(other.id, &overlapping, None)
            .unwrap());
        assert!(!store
            .has_overlapping_reservation(room.id, &overlapping, Some(booked.id))
            .unwrap());
    }

    #[test]
    fn test_trigger_rejects_overlap_as_conflict() {
        let db = create_test_database();
        let store = db.connection();
        let client = store.insert_client(&sample_client("a@x.io")).unwrap();
        let room = store.insert_accommodation(&sample_room("Suite", 100)).unwrap();
        store
            .insert_reservation(&NewReservation::new(
                client.id,
                room.id,
                period("2025-07-20", "2025-07-25"),
            ))
            .unwrap();

        let err = store
            .insert_reservation(&NewReservation::new(
                client.id,
                room.id,
                period("2025-07-24", "2025-07-28"),
            ))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_update_keeping_own_period_is_allowed() {
        let db = create_test_database();
        let store = db.connection();
        let client = store.insert_client(&sample_client("a@x.io")).unwrap();
        let room = store.insert_accommodation(&sample_room("Suite", 100)).unwrap();
        let booked = store
            .insert_reservation(&NewReservation::new(
                client.id,
                room.id,
                period("2025-07-20", "2025-07-25"),
            ))
            .unwrap();

        let extended = NewReservation::new(client.id, room.id, period("2025-07-20", "2025-07-26"));
        assert!(store.update_reservation(booked.id, &extended).unwrap());
        let loaded = store.find_reservation(booked.id).unwrap().unwrap();
        assert_eq!(loaded.period, extended.period);
    }

    #[test]
    fn test_missing_references_are_integrity_violations() {
        let db = create_test_database();
        let store = db.connection();
        let err = store
            .insert_reservation(&NewReservation::new(
                crate::ClientId::new(7),
                crate::AccommodationId::new(8),
                period("2025-07-20", "2025-07-25"),
            ))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityViolation);
    }

    #[test]
    fn test_referenced_records_cannot_be_deleted() {
        let db = create_test_database();
        let store = db.connection();
        let client = store.insert_client(&sample_client("a@x.io")).unwrap();
        let room = store.insert_accommodation(&sample_room("Suite", 100)).unwrap();
        store
            .insert_reservation(&NewReservation::new(
                client.id,
                room.id,
                period("2025-07-20", "2025-07-25"),
            ))
            .unwrap();

        let err = store.delete_client(client.id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityViolation);
        let err = store.delete_accommodation(room.id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityViolation);
    }

    #[test]
    fn test_reservations_for_client_ordering() {
        let db = create_test_database();
        let store = db.connection();
        let client = store.insert_client(&sample_client("a@x.io")).unwrap();
        let mid = store.insert_accommodation(&sample_room("Mid", 10000)).unwrap();
        let high = store.insert_accommodation(&sample_room("High", 30000)).unwrap();
        let low = store.insert_accommodation(&sample_room("Low", 5000)).unwrap();
        for room in [&mid, &high, &low] {
            store
                .insert_reservation(&NewReservation::new(
                    client.id,
                    room.id,
                    period("2025-07-20", "2025-07-25"),
                ))
                .unwrap();
        }

        let descriptions = |order| -> Vec<String> {
            store
                .reservations_for_client(client.id, order)
                .unwrap()
                .into_iter()
                .filter_map(|d| d.accommodation.description)
                .collect()
        };

        assert_eq!(descriptions(ValueOrder::Booked), ["Mid", "High", "Low"]);
        assert_eq!(descriptions(ValueOrder::Ascending), ["Low", "Mid", "High"]);
        assert_eq!(descriptions(ValueOrder::Descending), ["High", "Mid", "Low"]);
    }

    #[test]
    fn test_purge_removes_everything() {
        let db = create_test_database();
        let store = db.connection();
        let client = store.insert_client(&sample_client("a@x.io")).unwrap();
        let room = store.insert_accommodation(&sample_room("Suite", 100)).unwrap();
        store
            .insert_reservation(&NewReservation::new(
                client.id,
                room.id,
                period("2025-07-20", "2025-07-25"),
            ))
            .unwrap();

        let counts = store.purge().unwrap();
        assert_eq!(counts.reservations, 1);
        assert_eq!(counts.clients, 1);
        assert_eq!(counts.accommodations, 1);
        assert!(store.all_reservation_details().unwrap().is_empty());
    }
}
