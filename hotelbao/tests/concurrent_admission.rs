//! Concurrent admission tests.
//!
//! Several connections to the same database file race to book one room.
//! Admission runs check-then-insert inside an `IMMEDIATE` transaction, so at
//! most one overlapping booking may win no matter how the threads interleave.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use common::database::create_test_database;
use common::{day, insert_room, ClientFixture};

use hotelbao::database::{Database, DatabaseConfig};
use hotelbao::store::HotelStore;
use hotelbao::{create_reservation, ErrorKind};

const THREADS: usize = 8;

#[test]
fn test_only_one_overlapping_booking_wins() {
    let t = create_test_database();
    let suite = insert_room(t.db.connection(), "Suite", 300);
    let guests: Vec<_> = (0..THREADS)
        .map(|i| ClientFixture::new(&format!("guest{i}@example.com")).insert(t.db.connection()))
        .collect();

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = guests
        .into_iter()
        .enumerate()
        .map(|(i, guest)| {
            let path = t.path.clone();
            let barrier = Arc::clone(&barrier);
            let room = suite.id;
            thread::spawn(move || {
                let mut db = Database::open(
                    DatabaseConfig::new(&path).with_busy_timeout(Duration::from_secs(30)),
                )
                .unwrap();
                // Every request overlaps 2025-07-20..21
                let check_out = format!("2025-07-{:02}", 21 + i);
                barrier.wait();
                create_reservation(&mut db, guest.id, room, day("2025-07-20"), day(&check_out))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1, "{results:?}");
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_eq!(err.kind(), ErrorKind::Conflict, "{err}");
    }

    assert_eq!(t.db.connection().list_reservations().unwrap().len(), 1);
}

#[test]
fn test_disjoint_bookings_all_succeed() {
    let t = create_test_database();
    let suite = insert_room(t.db.connection(), "Suite", 300);
    let guest = ClientFixture::new("regular@example.com").insert(t.db.connection());

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let path = t.path.clone();
            let barrier = Arc::clone(&barrier);
            let (room, client) = (suite.id, guest.id);
            thread::spawn(move || {
                let mut db = Database::open(
                    DatabaseConfig::new(&path).with_busy_timeout(Duration::from_secs(30)),
                )
                .unwrap();
                // Back-to-back single nights
                let check_in = format!("2025-08-{:02}", 1 + i);
                let check_out = format!("2025-08-{:02}", 2 + i);
                barrier.wait();
                create_reservation(&mut db, client, room, day(&check_in), day(&check_out))
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(t.db.connection().list_reservations().unwrap().len(), THREADS);
}
