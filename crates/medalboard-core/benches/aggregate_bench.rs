//! Aggregator benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use medalboard_core::{AggregateStats, CountryRecord, ParticipationRecord, country_medal_totals};
use std::hint::black_box;

fn dataset(countries: i64, editions: i32) -> Vec<CountryRecord> {
    (1..=countries)
        .map(|id| {
            let participations = (0..editions)
                .map(|e| ParticipationRecord::new(1896 + e * 4, (id as u64) % 50, 100 + e as u64))
                .collect();
            CountryRecord::new(id, format!("Country {id}"), participations)
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let data = dataset(200, 30);

    c.bench_function("aggregate_stats_200x30", |b| {
        b.iter(|| AggregateStats::compute(black_box(&data)));
    });

    c.bench_function("country_medal_totals_200x30", |b| {
        b.iter(|| country_medal_totals(black_box(&data)));
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
