//! Performance benchmarks for the roster engine.
//!
//! The roster pipeline runs on every page view, so index building,
//! resolution, and ordering should stay comfortably sub-millisecond for
//! realistic roster sizes (tens of providers).
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use roster_engine::models::{Provider, RosterShift};
use roster_engine::roster::{
    ProviderIndex, SessionOrderCache, build_roster_entry, classify_shift, order_roster,
};

fn make_providers(count: usize) -> Vec<Provider> {
    let records: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": i as i64 + 1,
                "slug": format!("model-{i}"),
                "provider_name": format!("Model {i}"),
                "country": if i % 2 == 0 { "Japanese" } else { "Thai" },
                "service_bbbj": i % 3 == 0,
                "total_60": 250 + (i as i64 % 5) * 10,
                "images": [{ "image": format!("model-{i}.jpg"), "profile": true }]
            })
        })
        .collect();
    serde_json::from_value(serde_json::Value::Array(records)).unwrap()
}

fn make_shifts(count: usize) -> Vec<RosterShift> {
    (0..count)
        .map(|i| RosterShift {
            provider_id: i as i64 + 1,
            provider_name: format!("Model {i}"),
            start_time: format!("{:02}:00:00", 10 + i % 12),
            end_time: format!("{:02}:00:00", (18 + i % 9) % 24),
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for size in [25, 100, 500] {
        let providers = make_providers(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &providers, |b, providers| {
            b.iter(|| ProviderIndex::build(black_box(providers)));
        });
    }
    group.finish();
}

fn bench_resolve_roster(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_roster");
    for size in [25, 100, 500] {
        let providers = make_providers(size);
        let shifts = make_shifts(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &shifts, |b, shifts| {
            b.iter(|| {
                let index = ProviderIndex::build(&providers);
                let entries: Vec<_> = shifts
                    .iter()
                    .filter_map(|shift| build_roster_entry(black_box(shift), &index))
                    .collect();
                entries
            });
        });
    }
    group.finish();
}

fn bench_order_roster(c: &mut Criterion) {
    let providers = make_providers(100);
    let shifts = make_shifts(100);
    let index = ProviderIndex::build(&providers);
    let entries: Vec<_> = shifts
        .iter()
        .filter_map(|shift| build_roster_entry(shift, &index))
        .collect();

    c.bench_function("order_roster_cold_100", |b| {
        b.iter(|| {
            // fresh cache per iteration measures the shuffle-and-store path
            let cache = SessionOrderCache::new();
            let mut rng = StdRng::seed_from_u64(7);
            order_roster(black_box(entries.clone()), "bench", &cache, &mut rng)
        });
    });

    c.bench_function("order_roster_cached_100", |b| {
        let cache = SessionOrderCache::new();
        let mut rng = StdRng::seed_from_u64(7);
        let _ = order_roster(entries.clone(), "bench", &cache, &mut rng);
        b.iter(|| order_roster(black_box(entries.clone()), "bench", &cache, &mut rng));
    });
}

fn bench_classify_shift(c: &mut Criterion) {
    let day = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let now = day.and_hms_opt(23, 30, 0).unwrap();

    c.bench_function("classify_shift_overnight", |b| {
        b.iter(|| {
            classify_shift(
                black_box("22:00:00"),
                black_box("03:00:00"),
                black_box(day),
                black_box(now),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_index_build,
    bench_resolve_roster,
    bench_order_roster,
    bench_classify_shift
);
criterion_main!(benches);
