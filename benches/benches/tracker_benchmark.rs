//! Tracker benchmarks: accept throughput and statistic queries.
//!
//! Run with: `cargo bench --package lapse-bench`

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lapse_bench::{finished_ops, run_contention};
use lapse_lib::{BoundedOperationTracker, OperationSet};
use std::hint::black_box;

fn accept_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("accept");

    for capacity in [16, 256, 4_096] {
        let ops = finished_ops(10_000);
        group.throughput(Throughput::Elements(ops.len() as u64));
        group.bench_with_input(BenchmarkId::new("capacity", capacity), &capacity, |b, &cap| {
            b.iter_batched(
                || {
                    let tracker = BoundedOperationTracker::new("bench", cap, ops.len()).unwrap();
                    (tracker, ops.clone())
                },
                |(tracker, ops)| {
                    for op in ops {
                        tracker.accept(op).unwrap();
                    }
                    tracker
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn contention_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");
    group.sample_size(20);

    for threads in [1, 4, 8] {
        group.throughput(Throughput::Elements((threads * 5_000) as u64));
        group.bench_with_input(BenchmarkId::new("threads", threads), &threads, |b, &t| {
            b.iter(|| run_contention(t, 5_000, 256));
        });
    }

    group.finish();
}

fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [16, 256, 4_096] {
        let set = OperationSet::from(finished_ops(size));
        group.bench_with_input(BenchmarkId::new("stats", size), &set, |b, set| {
            b.iter(|| black_box(set.stats()));
        });

        let tracker = BoundedOperationTracker::new("query", size, size * 2).unwrap();
        for op in finished_ops(size) {
            tracker.accept(op).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("eta", size), &tracker, |b, tracker| {
            b.iter(|| black_box(tracker.estimated_time_remaining()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    accept_benchmark,
    contention_benchmark,
    query_benchmark
);
criterion_main!(benches);
