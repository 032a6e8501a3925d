//! Benchmarks for the metric pipeline.
//!
//! The distance-matrix build dominates at O(n²·d); the neighbor/ranking pass
//! adds O(n²·log n). Sizes straddle `PARALLEL_MIN_POINTS` so both the serial
//! and the rayon paths show up.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use tnc::{tnc, trustworthiness, DistanceMatrix};

fn random_dataset(n: usize, dim: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}

fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");

    for n in [64, 128, 256, 512] {
        let points = random_dataset(n, 32, 42);

        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::new("from_points", n), &n, |bench, _| {
            bench.iter(|| DistanceMatrix::from_points(black_box(&points)))
        });
    }

    group.finish();
}

fn bench_trustworthiness(c: &mut Criterion) {
    let mut group = c.benchmark_group("trustworthiness");

    for n in [64, 256] {
        let high = random_dataset(n, 32, 42);
        let low = random_dataset(n, 2, 43);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("k10", n), &n, |bench, _| {
            bench.iter(|| trustworthiness(black_box(&high), black_box(&low), 10).unwrap())
        });
    }

    group.finish();
}

fn bench_tnc(c: &mut Criterion) {
    let mut group = c.benchmark_group("tnc");

    for n in [64, 256] {
        let high = random_dataset(n, 32, 42);
        let low = random_dataset(n, 2, 43);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("k10", n), &n, |bench, _| {
            bench.iter(|| tnc(black_box(&high), black_box(&low), 10).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance_matrix, bench_trustworthiness, bench_tnc);
criterion_main!(benches);
