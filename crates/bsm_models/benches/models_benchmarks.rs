//! Criterion benchmarks for closed-form valuation and strategy reduction.
//!
//! Measures single-option Greeks, the weighted-leg reduction and parallel
//! spot-ladder profiles across ladder sizes.

use bsm_core::math::distributions::{inverse_norm_cdf, norm_cdf};
use bsm_models::instruments::{DigitalOption, VanillaOption};
use bsm_models::profile::{evaluate_profile, spot_ladder};
use bsm_models::strategies::Strategy;
use bsm_models::traits::Valuation;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark the normal distribution primitives.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");

    group.bench_function("norm_cdf", |b| b.iter(|| norm_cdf(black_box(0.3_f64))));

    // One probability per quantile region
    for p in [0.5_f64, 0.01, 1e-20] {
        group.bench_with_input(BenchmarkId::new("inverse_norm_cdf", p), &p, |b, &p| {
            b.iter(|| inverse_norm_cdf(black_box(p)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark single-option valuation.
fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");
    let vanilla = VanillaOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap();
    let digital = DigitalOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap();

    group.bench_function("vanilla_price", |b| b.iter(|| vanilla.price(black_box(100.0))));
    group.bench_function("vanilla_greeks", |b| b.iter(|| vanilla.greeks(black_box(100.0))));
    group.bench_function("digital_greeks", |b| b.iter(|| digital.greeks(black_box(100.0))));

    group.finish();
}

/// Benchmark the strategy reduction.
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let straddle = Strategy::straddle(0.8_f64, 0.1, 0.5, 100.0).unwrap();
    let butterfly = Strategy::butterfly([0.8_f64; 3], 0.1, 0.5, [90.0, 100.0, 110.0], true).unwrap();

    group.bench_function("straddle_greeks", |b| b.iter(|| straddle.greeks(black_box(100.0))));
    group.bench_function("butterfly_greeks", |b| {
        b.iter(|| butterfly.greeks(black_box(100.0)))
    });

    group.finish();
}

/// Benchmark parallel profiles across ladder sizes.
fn bench_profiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("profiles");
    let butterfly = Strategy::butterfly([0.8_f64; 3], 0.1, 0.5, [90.0, 100.0, 110.0], true).unwrap();

    for steps in [11, 101, 1001] {
        let spots = spot_ladder(100.0, 50.0, steps).unwrap();
        group.bench_with_input(BenchmarkId::new("butterfly", steps), &spots, |b, spots| {
            b.iter(|| evaluate_profile(&butterfly, black_box(spots)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_distributions,
    bench_options,
    bench_strategies,
    bench_profiles
);
criterion_main!(benches);
