//! Benchmarks comparing the sequential baseline against the nested
//! parallel variants.
//!
//! Run with: `cargo bench --bench race_benchmarks`
//!
//! The fixed 3-racer/7-cell scenario is far too small for per-cell
//! parallelism to pay off; the long-track cases show where the reduction
//! starts to matter.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crawlrace::{
    crossing_time, crossing_time_parallel, run_repetitions, run_repetitions_parallel,
    select_winner, select_winner_parallel, NoopObserver, Racer, Scenario, Track,
};

fn long_track(cells: usize) -> Track {
    Track::new((0..cells).map(|i| i % 7 == 3).collect())
}

fn bench_crossing_time(c: &mut Criterion) {
    let racer = Racer::new("Luis", 0.7, 1.0);
    let mut group = c.benchmark_group("crossing_time");

    for cells in [7usize, 1_000, 100_000] {
        let track = long_track(cells);

        group.bench_with_input(BenchmarkId::new("sequential", cells), &track, |b, t| {
            b.iter(|| crossing_time(&racer, t));
        });
        group.bench_with_input(BenchmarkId::new("parallel", cells), &track, |b, t| {
            b.iter(|| crossing_time_parallel(&racer, t));
        });
    }

    group.finish();
}

fn bench_select_winner(c: &mut Criterion) {
    let scenario = Scenario::default();
    let mut group = c.benchmark_group("select_winner");

    group.bench_function("sequential", |b| {
        b.iter(|| select_winner(&scenario.racers, &scenario.track));
    });
    group.bench_function("parallel", |b| {
        b.iter(|| select_winner_parallel(&scenario.racers, &scenario.track));
    });

    group.finish();
}

fn bench_harness(c: &mut Criterion) {
    let scenario = Scenario::default();
    let mut group = c.benchmark_group("harness_1000_reps");
    group.sample_size(10);

    group.bench_function("sequential", |b| {
        b.iter(|| run_repetitions(&scenario, 1_000, &NoopObserver));
    });
    group.bench_function("parallel", |b| {
        b.iter(|| run_repetitions_parallel(&scenario, 1_000, &NoopObserver));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_crossing_time,
    bench_select_winner,
    bench_harness
);
criterion_main!(benches);
