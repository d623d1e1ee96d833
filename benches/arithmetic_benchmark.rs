// ============================================================================
// BigInt Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Multiplication - Schoolbook product at growing operand sizes
// 2. Division - Single-limb pass vs. multi-limb long division
// 3. Decimal Codec - Parsing and formatting
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_bigint::BigInt;
use std::hint::black_box;

/// Deterministic operand with `digits` decimal digits.
fn operand(digits: usize, seed: u8) -> BigInt {
    let text: String = (0..digits)
        .map(|i| char::from(b'1' + ((i as u8).wrapping_mul(7).wrapping_add(seed) % 9)))
        .collect();
    text.parse().expect("generated digits are valid")
}

// ============================================================================
// Multiplication
// ============================================================================

fn benchmark_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for digits in [9usize, 90, 900, 4500].iter() {
        let a = operand(*digits, 1);
        let b = operand(*digits, 5);
        group.bench_with_input(BenchmarkId::new("schoolbook", digits), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a * b));
        });
    }

    group.finish();
}

// ============================================================================
// Division
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide");

    for digits in [90usize, 900, 4500].iter() {
        let dividend = operand(*digits, 3);

        let single = BigInt::from(999_999_937);
        group.bench_with_input(
            BenchmarkId::new("single_limb", digits),
            &(&dividend, &single),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.div_rem_trunc(b)));
            },
        );

        let wide = operand(digits / 2, 7);
        group.bench_with_input(
            BenchmarkId::new("multi_limb", digits),
            &(&dividend, &wide),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.div_rem_trunc(b)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("floor_negative", digits),
            &(-&dividend, &wide),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.div_rem_floor(b)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Decimal Codec
// ============================================================================

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for digits in [90usize, 900, 9000].iter() {
        let value = operand(*digits, 2);
        let text = value.to_string();

        group.bench_with_input(BenchmarkId::new("parse", digits), &text, |bench, text| {
            bench.iter(|| black_box(text.parse::<BigInt>()));
        });

        group.bench_with_input(BenchmarkId::new("format", digits), &value, |bench, value| {
            bench.iter(|| black_box(value.to_string()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_multiplication,
    benchmark_division,
    benchmark_codec,
);
criterion_main!(benches);
