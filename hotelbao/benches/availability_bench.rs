use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tempfile::TempDir;

use hotelbao::database::{Database, DatabaseConfig};
use hotelbao::operations::{AvailabilityChecker, PlanExecutor, ReserveOptions, ReservePlan};
use hotelbao::store::HotelStore;
use hotelbao::{AccommodationDraft, AccommodationId, ClientDraft, ClientId, Money, StayPeriod};

const BOOKED_NIGHTS: &[usize] = &[10, 100, 1000];

fn setup_database() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let db_path = temp_dir.path().join("hotelbao.db");
    let db = Database::open(DatabaseConfig::new(&db_path)).expect("failed to open database");
    (temp_dir, db)
}

fn night(offset: usize) -> StayPeriod {
    let start = Utc
        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .expect("valid start date")
        + Duration::days(i64::try_from(offset).expect("offset fits"));
    StayPeriod::new(start, start + Duration::days(1)).expect("one night is a valid stay")
}

/// Books `nights` consecutive single nights in one room and returns the ids.
fn populate(db: &Database, nights: usize) -> (ClientId, AccommodationId) {
    let store = db.connection();
    let client = store
        .insert_client(
            &ClientDraft::builder("Bench Guest", "bench@example.com", "hash")
                .build()
                .expect("valid client"),
        )
        .expect("failed to insert client");
    let room = store
        .insert_accommodation(
            &AccommodationDraft::builder(Money::from_cents(10_000))
                .description(Some("Bench Room".to_string()))
                .build()
                .expect("valid accommodation"),
        )
        .expect("failed to insert accommodation");

    for offset in 0..nights {
        let plan = ReservePlan::new(ReserveOptions::new(
            client.id,
            room.id,
            night(offset).check_in(),
            night(offset).check_out(),
        ))
        .build_plan(store)
        .expect("failed to plan reservation");
        PlanExecutor::new(store)
            .execute(&plan)
            .expect("failed to execute reservation plan");
    }

    (client.id, room.id)
}

fn bench_has_conflict(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_conflict");

    for &size in BOOKED_NIGHTS {
        let (_temp_dir, db) = setup_database();
        let (_client, room) = populate(&db, size);
        let checker = AvailabilityChecker::new(db.connection());
        let taken = night(size / 2);
        let free = night(size + 1);

        group.bench_with_input(BenchmarkId::new("taken", size), &size, |b, _| {
            b.iter(|| black_box(checker.has_conflict(room, &taken, None).expect("query failed")));
        });
        group.bench_with_input(BenchmarkId::new("free", size), &size, |b, _| {
            b.iter(|| black_box(checker.has_conflict(room, &free, None).expect("query failed")));
        });
    }

    group.finish();
}

fn bench_reserve_next_night(c: &mut Criterion) {
    let mut group = c.benchmark_group("reserve_next_night");

    for &size in BOOKED_NIGHTS {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, db) = setup_database();
                    let (client, room) = populate(&db, count);
                    (temp_dir, db, client, room)
                },
                |(temp_dir, db, client, room)| {
                    let _temp_dir = temp_dir;
                    let next = night(count);
                    let plan = ReservePlan::new(ReserveOptions::new(
                        client,
                        room,
                        next.check_in(),
                        next.check_out(),
                    ))
                    .build_plan(db.connection())
                    .expect("failed to plan reservation");
                    black_box(PlanExecutor::new(db.connection()).execute(&plan))
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_has_conflict, bench_reserve_next_night);
criterion_main!(benches);
