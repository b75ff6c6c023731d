// Aggregator benchmarks
// Run with: cargo bench -p keel-validator

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use keel_validator::prelude::*;

fn numbers(len: usize) -> Value {
    Value::from((0..len).map(Value::from).collect::<Vec<_>>())
}

/// Checks only: the input array is returned as is, nothing is allocated.
fn bench_items_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("items_check");
    let validator = items(number().and(min(0.0)));
    for len in [10, 100, 1_000] {
        let input = numbers(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| black_box(validator.validate(black_box(input.clone()))));
        });
    }
    group.finish();
}

/// Every element transformed: one output array per call.
fn bench_items_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("items_transform");
    let validator = items(parse_number());
    for len in [10, 100, 1_000] {
        let input = Value::from((0..len).map(|n| Value::from(n.to_string())).collect::<Vec<_>>());
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| black_box(validator.validate(black_box(input.clone()))));
        });
    }
    group.finish();
}

/// Every element rejected: worst case for reason collection.
fn bench_items_reject(c: &mut Criterion) {
    let validator = items(string());
    let input = numbers(100);
    c.bench_function("items_reject_100", |b| {
        b.iter(|| black_box(validator.validate(black_box(input.clone()))));
    });
}

fn bench_keys(c: &mut Criterion) {
    let validator = keys([
        ("id", required().and(string())),
        ("email", required().and(string()).and(trim()).and(lowercase())),
        ("age", required().and(integer()).and(in_range(0.0, 150.0))),
        ("tags", items(string()).into()),
    ])
    .missing(["tags"]);

    let valid = Value::object([
        ("id", Value::from("u-1")),
        ("email", Value::from(" Ada@Example.com")),
        ("age", Value::from(36)),
        ("tags", Value::array(["a", "b", "c"])),
    ]);
    let invalid = Value::object([("email", Value::from(1)), ("age", Value::from(-1))]);

    c.bench_function("keys_valid", |b| {
        b.iter(|| black_box(validator.validate(black_box(valid.clone()))));
    });
    c.bench_function("keys_invalid", |b| {
        b.iter(|| black_box(validator.validate(black_box(invalid.clone()))));
    });
}

criterion_group!(
    benches,
    bench_items_check,
    bench_items_transform,
    bench_items_reject,
    bench_keys
);
criterion_main!(benches);
