//! Benchmarks for combinator validators
//!
//! Tests performance of:
//! - Basic combinators (And, Or)
//! - Cached combinator vs. uncached on a repeated input
//! - Nested compositions

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nebula_validator::core::{Validate, ValidateExt};
use nebula_validator::validators::string::{any_of, max_length, min_length};

fn bench_and_combinator(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_combinator");

    let validator = min_length(5).and(max_length(20));
    group.bench_function("two_validators_success", |b| {
        b.iter(|| validator.validate(black_box("hello")))
    });
    group.bench_function("two_validators_fail_first", |b| {
        b.iter(|| validator.validate(black_box("hi")))
    });

    let validator3 = min_length(5).and(max_length(20)).and(any_of(["hello", "world"]));
    group.bench_function("three_validators_success", |b| {
        b.iter(|| validator3.validate(black_box("hello")))
    });

    group.finish();
}

fn bench_or_combinator(c: &mut Criterion) {
    let mut group = c.benchmark_group("or_combinator");

    let validator = any_of(["admin"]).or(any_of(["customer"]));
    group.bench_function("success_first", |b| {
        b.iter(|| validator.validate(black_box("admin")))
    });
    group.bench_function("both_fail", |b| {
        b.iter(|| validator.validate(black_box("root")))
    });

    group.finish();
}

fn bench_cached_combinator(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_combinator");

    let uncached = min_length(5);
    group.bench_function("uncached_repeated_input", |b| {
        b.iter(|| uncached.validate(black_box("hello world")))
    });

    let cached = min_length(5).cached();
    group.bench_function("cached_repeated_input", |b| {
        b.iter(|| cached.validate(black_box("hello world")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_and_combinator,
    bench_or_combinator,
    bench_cached_combinator
);
criterion_main!(benches);
