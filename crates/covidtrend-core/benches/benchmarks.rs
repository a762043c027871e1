use covidtrend_core::prelude::*;
use covidtrend_core::window::find_window_start;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn engine() -> TrendEngine {
    let dataset = Dataset::read_dir(Dataset::default_data_dir()).expect("bundled dataset");
    TrendEngine::new(dataset, EngineConfig::default()).expect("valid tables")
}

fn bench_trends(c: &mut Criterion) {
    let e = engine();
    c.bench_function("find_window_start(7)", |b| {
        b.iter(|| find_window_start(black_box(&e.dataset().counties), black_box(7)))
    });
    c.bench_function("trending_counties(7)", |b| {
        b.iter(|| e.trending_counties(black_box(7)))
    });
    c.bench_function("trending_states(30)", |b| {
        b.iter(|| e.trending_states(black_box(30)))
    });
}

fn bench_suggestions(c: &mut Criterion) {
    let e = engine();
    c.bench_function("county_suggestions_by_name", |b| {
        b.iter(|| e.county_suggestions_by_name(black_box("al")))
    });
    c.bench_function("county_by_fips (merged)", |b| {
        b.iter(|| e.county_by_fips(black_box("36061")))
    });
}

criterion_group!(benches, bench_trends, bench_suggestions);
criterion_main!(benches);
