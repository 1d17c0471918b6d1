//! End-to-end admission scenarios against a real SQLite file.
//!
//! These exercise the public create/update/delete functions, the error kinds
//! they report and the order in which they check things.

mod common;

use common::database::create_test_database;
use common::{day, insert_room, ClientFixture};

use hotelbao::operations::{cancel, get_client, reserve, ReserveOptions};
use hotelbao::store::HotelStore;
use hotelbao::{
    create_reservation, delete_reservation, update_reservation, AccommodationId, ClientId,
    ErrorKind, ReservationId,
};

#[test]
fn test_overlap_scenario() {
    let mut t = create_test_database();
    let guest = ClientFixture::new("guest@example.com").insert(t.db.connection());
    let other = ClientFixture::new("other@example.com").insert(t.db.connection());
    let suite = insert_room(t.db.connection(), "Suite", 300);

    let first = create_reservation(
        &mut t.db,
        guest.id,
        suite.id,
        day("2025-07-20"),
        day("2025-07-25"),
    )
    .unwrap();
    assert_eq!(first.period.nights(), 5);

    let err = create_reservation(
        &mut t.db,
        other.id,
        suite.id,
        day("2025-07-24"),
        day("2025-07-28"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.status_code(), 409);

    // Checking out on the 25th frees the room for a check-in that day
    let second = create_reservation(
        &mut t.db,
        other.id,
        suite.id,
        day("2025-07-25"),
        day("2025-07-28"),
    )
    .unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(t.db.connection().list_reservations().unwrap().len(), 2);
}

#[test]
fn test_other_rooms_are_independent() {
    let mut t = create_test_database();
    let guest = ClientFixture::new("guest@example.com").insert(t.db.connection());
    let a = insert_room(t.db.connection(), "Room A", 100);
    let b = insert_room(t.db.connection(), "Room B", 100);

    for room in [a.id, b.id] {
        create_reservation(
            &mut t.db,
            guest.id,
            room,
            day("2025-07-20"),
            day("2025-07-25"),
        )
        .unwrap();
    }
}

#[test]
fn test_inverted_period_is_invalid_argument() {
    let mut t = create_test_database();
    let err = create_reservation(
        &mut t.db,
        ClientId::new(1),
        AccommodationId::new(1),
        day("2025-07-25"),
        day("2025-07-20"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_conflict_is_reported_before_missing_client() {
    let mut t = create_test_database();
    let guest = ClientFixture::new("guest@example.com").insert(t.db.connection());
    let suite = insert_room(t.db.connection(), "Suite", 300);
    create_reservation(
        &mut t.db,
        guest.id,
        suite.id,
        day("2025-07-20"),
        day("2025-07-25"),
    )
    .unwrap();

    let err = create_reservation(
        &mut t.db,
        ClientId::new(999),
        suite.id,
        day("2025-07-21"),
        day("2025-07-22"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn test_missing_client_then_missing_room() {
    let mut t = create_test_database();
    let guest = ClientFixture::new("guest@example.com").insert(t.db.connection());
    let suite = insert_room(t.db.connection(), "Suite", 300);

    let err = create_reservation(
        &mut t.db,
        ClientId::new(999),
        AccommodationId::new(999),
        day("2025-07-20"),
        day("2025-07-25"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("client 999"));

    let err = create_reservation(
        &mut t.db,
        guest.id,
        AccommodationId::new(999),
        day("2025-07-20"),
        day("2025-07-25"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("accommodation 999"));

    // Nothing was written by the failed attempts
    assert!(t.db.connection().list_reservations().unwrap().is_empty());
    assert!(get_client(t.db.connection(), guest.id).is_ok());
    assert!(t.db.connection().find_accommodation(suite.id).unwrap().is_some());
}

#[test]
fn test_inserted_reservation_reads_back() {
    let mut t = create_test_database();
    let guest = ClientFixture::new("guest@example.com").insert(t.db.connection());
    let suite = insert_room(t.db.connection(), "Suite", 300);

    let created = create_reservation(
        &mut t.db,
        guest.id,
        suite.id,
        day("2025-07-20"),
        day("2025-07-25"),
    )
    .unwrap();
    let found = t
        .db
        .connection()
        .find_reservation(created.id)
        .unwrap()
        .unwrap();

    assert_eq!(found.request(), created.request());
    assert_eq!(found.client_id, guest.id);
    assert_eq!(found.accommodation_id, suite.id);
    assert_eq!(found.period.check_in(), day("2025-07-20"));
    assert_eq!(found.period.check_out(), day("2025-07-25"));
}

#[test]
fn test_update_moves_stay_and_respects_others() {
    let mut t = create_test_database();
    let guest = ClientFixture::new("guest@example.com").insert(t.db.connection());
    let suite = insert_room(t.db.connection(), "Suite", 300);

    let early = create_reservation(
        &mut t.db,
        guest.id,
        suite.id,
        day("2025-07-01"),
        day("2025-07-05"),
    )
    .unwrap();
    let late = create_reservation(
        &mut t.db,
        guest.id,
        suite.id,
        day("2025-07-10"),
        day("2025-07-15"),
    )
    .unwrap();

    // Extending the early stay within its own dates is not a self-conflict
    let extended = update_reservation(
        &mut t.db,
        early.id,
        ReserveOptions::new(guest.id, suite.id, day("2025-07-01"), day("2025-07-08")),
    )
    .unwrap();
    assert_eq!(extended.period.check_out(), day("2025-07-08"));

    // Running into the late stay is
    let err = update_reservation(
        &mut t.db,
        early.id,
        ReserveOptions::new(guest.id, suite.id, day("2025-07-01"), day("2025-07-11")),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let unchanged = t.db.connection().find_reservation(late.id).unwrap().unwrap();
    assert_eq!(unchanged.period.check_in(), day("2025-07-10"));
}

#[test]
fn test_update_missing_reservation() {
    let mut t = create_test_database();
    let err = update_reservation(
        &mut t.db,
        ReservationId::new(42),
        ReserveOptions::new(
            ClientId::new(1),
            AccommodationId::new(1),
            day("2025-07-01"),
            day("2025-07-02"),
        ),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_then_delete_again() {
    let mut t = create_test_database();
    let guest = ClientFixture::new("guest@example.com").insert(t.db.connection());
    let suite = insert_room(t.db.connection(), "Suite", 300);
    let stay = create_reservation(
        &mut t.db,
        guest.id,
        suite.id,
        day("2025-07-20"),
        day("2025-07-25"),
    )
    .unwrap();

    delete_reservation(&mut t.db, stay.id).unwrap();
    assert!(t.db.connection().find_reservation(stay.id).unwrap().is_none());

    let err = delete_reservation(&mut t.db, stay.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status_code(), 404);
}

#[test]
fn test_dry_runs_leave_the_database_alone() {
    let mut t = create_test_database();
    let guest = ClientFixture::new("guest@example.com").insert(t.db.connection());
    let suite = insert_room(t.db.connection(), "Suite", 300);

    let options = ReserveOptions::new(guest.id, suite.id, day("2025-07-20"), day("2025-07-25"));
    let preview = reserve(&mut t.db, options, true).unwrap();
    assert!(preview.dry_run);
    assert_eq!(preview.actions_taken.len(), 1);
    assert!(preview.reservation.is_none());
    assert!(t.db.connection().list_reservations().unwrap().is_empty());

    let booked = reserve(&mut t.db, options, false).unwrap();
    let id = booked.reservation.unwrap().id;

    let preview = cancel(&mut t.db, id, true).unwrap();
    assert!(preview.dry_run);
    assert!(t.db.connection().find_reservation(id).unwrap().is_some());
}
