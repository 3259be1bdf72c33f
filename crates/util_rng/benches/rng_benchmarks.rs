//! Criterion benchmarks for util_rng generators.
//!
//! Measures raw draws, bounded uniform sampling, batch fills and weighted
//! index sampling across table sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use util_rng::{UniformGenerator, WeightedIndexGenerator, Xoshiro128StarStar};

/// Benchmark single draws from the uniform generator.
fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");

    let mut rng: UniformGenerator = UniformGenerator::from_seed_u64(42);
    group.bench_function("next_raw", |b| b.iter(|| black_box(rng.next_raw())));
    group.bench_function("generate_unit", |b| {
        b.iter(|| black_box(rng.generate_unit()))
    });
    group.bench_function("generate_i64", |b| {
        b.iter(|| black_box(rng.generate(black_box(-1_000_i64), black_box(1_000))))
    });
    group.bench_function("generate_f64", |b| {
        b.iter(|| black_box(rng.generate(black_box(0.0_f64), black_box(100.0))))
    });

    let mut narrow = UniformGenerator::<Xoshiro128StarStar>::from_seed_u64(42);
    group.bench_function("next_raw_xoshiro128", |b| {
        b.iter(|| black_box(narrow.next_raw()))
    });

    group.finish();
}

/// Benchmark batch fills into a pre-allocated buffer.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for size in [1_000, 100_000] {
        let mut rng: UniformGenerator = UniformGenerator::from_seed_u64(42);
        let mut buffer = vec![0.0_f64; size];
        group.bench_with_input(BenchmarkId::new("f64", size), &size, |b, _| {
            b.iter(|| rng.fill(black_box(&mut buffer), 0.0, 1.0))
        });
    }

    group.finish();
}

/// Benchmark weighted index construction and sampling.
fn bench_weighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted");

    for size in [4, 64, 4096] {
        let weights: Vec<f64> = (0..size).map(|i| 1.0 + (i % 7) as f64).collect();

        group.bench_with_input(
            BenchmarkId::new("construction", size),
            &weights,
            |b, weights| {
                b.iter(|| {
                    WeightedIndexGenerator::<f64>::from_seed_u64(42, black_box(weights))
                        .unwrap()
                })
            },
        );

        let mut picker: WeightedIndexGenerator<f64> =
            WeightedIndexGenerator::from_seed_u64(42, &weights).unwrap();
        group.bench_function(BenchmarkId::new("generate", size), |b| {
            b.iter(|| black_box(picker.generate()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uniform, bench_fill, bench_weighted);
criterion_main!(benches);
