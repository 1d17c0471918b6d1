//! Property-based tests for the operations module.
//!
//! Random booking sequences are admitted against a real database and checked
//! against the in-memory overlap model.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use super::admission::{reserve, ReserveOptions};
use super::availability::first_conflict;
use crate::database::test_util::{create_test_database, sample_client, sample_room};
use crate::store::HotelStore;
use crate::{ErrorKind, Reservation, StayPeriod};

fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap() + Duration::days(offset)
}

// (room index, start day, nights); nights may be zero or negative to exercise
// period validation
fn booking_strategy() -> impl Strategy<Value = (usize, i64, i64)> {
    (0usize..2, 0i64..30, -1i64..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Admission accepts a booking iff the model finds no conflict, and the
    // stored bookings never overlap per accommodation
    #[test]
    fn admission_matches_overlap_model(bookings in prop::collection::vec(booking_strategy(), 1..25)) {
        let mut db = create_test_database();
        let client = db.connection().insert_client(&sample_client("a@x.io")).unwrap();
        let rooms = [
            db.connection().insert_accommodation(&sample_room("Single", 10_000)).unwrap().id,
            db.connection().insert_accommodation(&sample_room("Double", 20_000)).unwrap().id,
        ];

        let mut model: Vec<Reservation> = Vec::new();
        for (room, start, nights) in bookings {
            let options = ReserveOptions::new(client.id, rooms[room], day(start), day(start + nights));
            let outcome = reserve(&mut db, options, false);

            if nights <= 0 {
                prop_assert_eq!(outcome.unwrap_err().kind(), ErrorKind::InvalidArgument);
                continue;
            }

            let period = StayPeriod::new(day(start), day(start + nights)).unwrap();
            let expected_conflict = first_conflict(&model, rooms[room], &period, None).is_some();
            match outcome {
                Ok(result) => {
                    prop_assert!(!expected_conflict);
                    model.push(result.reservation.unwrap());
                }
                Err(err) => {
                    prop_assert!(expected_conflict);
                    prop_assert_eq!(err.kind(), ErrorKind::Conflict);
                }
            }
        }

        let stored = db.connection().list_reservations().unwrap();
        prop_assert_eq!(stored.len(), model.len());
        for (i, a) in stored.iter().enumerate() {
            for b in &stored[i + 1..] {
                prop_assert!(a.accommodation_id != b.accommodation_id || !a.period.overlaps(&b.period));
            }
        }
    }

    // A dry run plans exactly what a real run would do and writes nothing
    #[test]
    fn dry_run_never_writes(start in 0i64..30, nights in 1i64..10) {
        let mut db = create_test_database();
        let client = db.connection().insert_client(&sample_client("a@x.io")).unwrap();
        let room = db.connection().insert_accommodation(&sample_room("Suite", 10_000)).unwrap();

        let options = ReserveOptions::new(client.id, room.id, day(start), day(start + nights));
        let result = reserve(&mut db, options, true).unwrap();
        prop_assert!(result.dry_run);
        prop_assert_eq!(result.actions_taken.len(), 1);
        prop_assert!(db.connection().list_reservations().unwrap().is_empty());
    }
}
