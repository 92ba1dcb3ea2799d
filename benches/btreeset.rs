//! Benchmarks for the Standard Library's [`BTreeSet`].

use std::collections::BTreeSet;

use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};
use rand::prelude::*;

/// Benchmarking sizes
const SIZES: [usize; 6] = [1, 10, 100, 1000, 10_000, 100_000];

/// Benchmarking insertion
pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("BTreeSet Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = SmallRng::seed_from_u64(0x1234_abcd);
            let mut set: BTreeSet<usize> =
                std::iter::repeat_with(|| rng.random()).take(size).collect();

            b.iter(|| {
                black_box(set.insert(rng.random()));
            });
        });
    }
}

/// Benchmarking membership tests
pub fn contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("BTreeSet Contains");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let set: BTreeSet<usize> = (0..size).collect();
            let mut rng = SmallRng::seed_from_u64(0x1234_abcd);

            b.iter(|| {
                black_box(set.contains(&rng.random_range(0..size)));
            });
        });
    }
}
