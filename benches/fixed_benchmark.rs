// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Core Arithmetic - Wide multiply and restoring division against i128/f64
// 2. Transcendentals - sqrt, log/exp ladders
// 3. CORDIC - Rotation (sin_cos) and vectoring (to_polar) modes
// 4. Batch - A simple fixed-step integration loop
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deterministic_fixed::prelude::*;
use std::hint::black_box;

fn sample_values(count: usize) -> Vec<Fixed> {
    (0..count)
        .map(|i| Fixed::from(1.0 + i as f64 * 0.731))
        .collect()
}

// ============================================================================
// Core Arithmetic Benchmarks
// ============================================================================

fn benchmark_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    let a = Fixed::from(1234.5678);
    let b = Fixed::from(-0.0421);

    group.bench_function("fixed", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });

    // Reference: the same product through a 128-bit intermediate
    group.bench_function("i128_reference", |bench| {
        bench.iter(|| {
            let product = i128::from(black_box(a).raw()) * i128::from(black_box(b).raw());
            (product >> FRACTIONAL_BITS) as i64
        });
    });

    group.bench_function("f64_reference", |bench| {
        let (x, y) = (a.to_f64(), b.to_f64());
        bench.iter(|| black_box(x) * black_box(y));
    });

    group.finish();
}

fn benchmark_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");

    for (name, a, b) in [
        ("small_quotient", Fixed::from(3), Fixed::from(7)),
        ("large_quotient", Fixed::from(1_000_000), Fixed::from(0.003)),
        ("integer_divisor", Fixed::from(1234.5), Fixed::from(16)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(a, b), |bench, &(a, b)| {
            bench.iter(|| black_box(a) / black_box(b));
        });
    }

    group.bench_function("checked", |bench| {
        let (a, b) = (Fixed::from(3), Fixed::from(7));
        bench.iter(|| black_box(a).checked_div(black_box(b)));
    });

    group.finish();
}

// ============================================================================
// Transcendental Benchmarks
// ============================================================================

fn benchmark_transcendentals(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcendentals");
    let x = Fixed::from(12.345);

    group.bench_function("sqrt", |bench| bench.iter(|| black_box(x).sqrt()));
    group.bench_function("log", |bench| bench.iter(|| black_box(x).log()));
    group.bench_function("exp", |bench| bench.iter(|| black_box(x).exp()));

    group.finish();
}

// ============================================================================
// CORDIC Benchmarks
// ============================================================================

fn benchmark_cordic(c: &mut Criterion) {
    let mut group = c.benchmark_group("cordic");

    for theta in [0.3, 2.0, -5.0, 1000.0] {
        let angle = Fixed::from(theta);
        group.bench_with_input(BenchmarkId::new("sin_cos", theta), &angle, |bench, &angle| {
            bench.iter(|| black_box(angle).sin_cos());
        });
    }

    let (x, y) = (Fixed::from(-3.5), Fixed::from(12.25));
    group.bench_function("to_polar", |bench| {
        bench.iter(|| Fixed::to_polar(black_box(x), black_box(y)));
    });
    group.bench_function("atan2", |bench| {
        bench.iter(|| black_box(y).atan2(black_box(x)));
    });

    group.finish();
}

// ============================================================================
// Batch Benchmarks
// ============================================================================

fn benchmark_integration_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("integration_step");

    for count in [16, 256, 4096] {
        let speeds = sample_values(count);
        let dt = Fixed::from(1) / 60i32;

        group.bench_with_input(BenchmarkId::from_parameter(count), &speeds, |bench, speeds| {
            bench.iter(|| {
                let mut position = FixedComplex::ZERO;
                for (i, &speed) in speeds.iter().enumerate() {
                    let heading = Fixed::from(i as i64) * dt;
                    position = position + FixedComplex::from_polar(speed * dt, heading);
                }
                black_box(position)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_mul,
    benchmark_div,
    benchmark_transcendentals,
    benchmark_cordic,
    benchmark_integration_step,
);
criterion_main!(benches);
