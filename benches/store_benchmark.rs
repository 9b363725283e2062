use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{seq::SliceRandom, thread_rng};
use std::sync::Arc;
use std::thread;

use hostel_booking::records::{
    now_iso, AccommodationRequest, RequestStatus, StayDuration,
};
use hostel_booking::store::{SessionStore, KEY_REQUESTS};
use hostel_booking::RoomKind;

fn sample_request(id: usize) -> AccommodationRequest {
    AccommodationRequest {
        id: format!("171800000{:04}", id),
        hostel_id: "1".to_string(),
        hostel_name: "Al-Hikmah Male Hostel A".to_string(),
        room_id: format!("A{}", 100 + id),
        room_type: RoomKind::TwoPerson,
        duration: StayDuration::FullYear,
        price: 80000,
        status: RequestStatus::Pending,
        created_at: now_iso(),
        payment_id: None,
    }
}

// Benchmark the session store under the dashboard's read-heavy access mix,
// with request blobs of realistic size.
pub fn store_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_store");

    for threads_count in [1usize, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads_count),
            threads_count,
            |b, &threads_count| {
                b.iter(|| {
                    let store = Arc::new(SessionStore::new());

                    // Pre-populate with a typical request list
                    let seed: Vec<AccommodationRequest> =
                        (0..20).map(sample_request).collect();
                    store.set_json(KEY_REQUESTS, &seed).unwrap();

                    let mut handles = vec![];
                    for _ in 0..threads_count {
                        let store = Arc::clone(&store);
                        let handle = thread::spawn(move || {
                            let mut rng = thread_rng();
                            let ops = ["read", "read", "read", "read", "write"];

                            for i in 0..200 {
                                match *ops.choose(&mut rng).unwrap() {
                                    "write" => {
                                        let mut requests: Vec<AccommodationRequest> =
                                            store.get_json(KEY_REQUESTS);
                                        requests.push(sample_request(1000 + i));
                                        store.set_json(KEY_REQUESTS, &requests).unwrap();
                                    }
                                    _ => {
                                        let requests: Vec<AccommodationRequest> =
                                            store.get_json(KEY_REQUESTS);
                                        assert!(!requests.is_empty());
                                    }
                                }
                            }
                        });
                        handles.push(handle);
                    }

                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, store_benchmark);
criterion_main!(benches);
