use criterion::{Criterion, criterion_group, criterion_main};
use invalid_ids_engine::config::Config;
use invalid_ids_engine::{IdRange, Rule, invalids_in_range, run};
use std::hint::black_box;

fn benchmark_scan_range(c: &mut Criterion) {
    let range = IdRange::new(1_000_000, 1_100_000);
    c.bench_function("scan_range_halves", |b| {
        b.iter(|| black_box(invalids_in_range(black_box(range), Rule::Halves)));
    });
    c.bench_function("scan_range_repeated", |b| {
        b.iter(|| black_box(invalids_in_range(black_box(range), Rule::Repeated)));
    });
}

fn benchmark_sample_run(c: &mut Criterion) {
    let config = Config::default();
    c.bench_function("run_sample_input", |b| {
        b.iter(|| black_box(run(black_box(&config)).unwrap()));
    });
}

criterion_group!(benches, benchmark_scan_range, benchmark_sample_run);
criterion_main!(benches);
