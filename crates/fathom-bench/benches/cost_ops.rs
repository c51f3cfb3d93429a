//! Criterion micro-benchmarks for normalization, smoothing, and aggregation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fathom_cost::{
    gaussian_smooth, normalize_channel, ClipPercentiles, CostAggregator,
};
use fathom_test_utils::seeded_stack;

/// Benchmark: percentile-normalize one 100x100 channel.
fn bench_normalize_10k(c: &mut Criterion) {
    let stack = seeded_stack(1, 100, 100, 5.0, 1);
    let channel = stack.channel(0).unwrap();

    c.bench_function("normalize_channel_10k", |b| {
        b.iter(|| {
            let n = normalize_channel(black_box(channel), Some(ClipPercentiles::DEFAULT));
            black_box(n);
        });
    });
}

/// Benchmark: separable Gaussian smoothing, sigma 1 and 3, on 100x100.
fn bench_smooth_10k(c: &mut Criterion) {
    let stack = seeded_stack(1, 100, 100, 1.0, 2);
    let channel = stack.channel(0).unwrap();

    for sigma in [1.0, 3.0] {
        c.bench_function(&format!("gaussian_smooth_10k_sigma{sigma}"), |b| {
            b.iter(|| black_box(gaussian_smooth(black_box(channel), sigma)));
        });
    }
}

/// Benchmark: full 4-channel aggregation on 100x100, with and without smoothing.
fn bench_aggregate_4x10k(c: &mut Criterion) {
    let stack = seeded_stack(4, 100, 100, 5.0, 3);
    let plain = CostAggregator::builder()
        .weights([1.0, 0.8, 0.3, 0.5])
        .build()
        .unwrap();
    let smoothed = CostAggregator::builder()
        .weights([1.0, 0.8, 0.3, 0.5])
        .smooth_sigma(1.0)
        .build()
        .unwrap();

    c.bench_function("aggregate_4x10k", |b| {
        b.iter(|| black_box(plain.aggregate(black_box(&stack)).unwrap()));
    });
    c.bench_function("aggregate_4x10k_sigma1", |b| {
        b.iter(|| black_box(smoothed.aggregate(black_box(&stack)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_normalize_10k,
    bench_smooth_10k,
    bench_aggregate_4x10k
);
criterion_main!(benches);
