//! Benchmark for container pipelines: Identity, Reader, Writer, Pred.
//!
//! Measures the cost of building and evaluating short chains of each
//! container against the equivalent direct computation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use algebrars::effect::{Reader, Writer};
use algebrars::logic::Pred;
use algebrars::typeclass::{Identity, Sum, mconcat};
use std::hint::black_box;

// =============================================================================
// Identity Benchmarks
// =============================================================================

fn benchmark_identity(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("identity");

    group.bench_function("direct", |bencher| {
        bencher.iter(|| {
            let value = black_box(1);
            black_box(((value + 1) * 2 + 3) * 4)
        });
    });

    group.bench_function("map_chain_4", |bencher| {
        bencher.iter(|| {
            let result = Identity::new(black_box(1))
                .map(|x| x + 1)
                .chain(|x| Identity::new(x * 2))
                .map(|x| x + 3)
                .chain(|x| Identity::new(x * 4));
            black_box(result.into_value())
        });
    });

    group.finish();
}

// =============================================================================
// Reader Benchmarks
// =============================================================================

fn benchmark_reader(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reader");

    group.bench_function("build_and_run", |bencher| {
        bencher.iter(|| {
            let reader = Reader::asks(|environment: i32| environment + 1)
                .map(|x| x * 2)
                .chain(|x| Reader::asks(move |environment: i32| x + environment));
            black_box(reader.run_with(black_box(10)))
        });
    });

    let prebuilt = Reader::asks(|environment: i32| environment + 1)
        .map(|x| x * 2)
        .chain(|x| Reader::asks(move |environment: i32| x + environment));

    group.bench_function("run_prebuilt", |bencher| {
        bencher.iter(|| black_box(prebuilt.run_with(black_box(10))));
    });

    group.finish();
}

// =============================================================================
// Writer Benchmarks
// =============================================================================

fn benchmark_writer(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("writer");

    for steps in [10, 100] {
        group.bench_with_input(BenchmarkId::new("sum_log", steps), &steps, |bencher, &steps| {
            bencher.iter(|| {
                let writer = (0..steps).fold(Writer::<Sum<i64>, i64>::of(0), |writer, step| {
                    writer.chain(|value| Writer::new(1, value + step))
                });
                black_box(writer.into_read())
            });
        });

        group.bench_with_input(BenchmarkId::new("string_log", steps), &steps, |bencher, &steps| {
            bencher.iter(|| {
                let writer = (0..steps).fold(Writer::<String, i64>::of(0), |writer, step| {
                    writer.chain(|value| Writer::new("x".to_string(), value + step))
                });
                black_box(writer.into_read())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Pred Benchmarks
// =============================================================================

fn benchmark_pred(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pred");

    let rules: Vec<Pred<i64>> = (0..16).map(|bound| Pred::new(move |x: &i64| *x > bound)).collect();
    let combined = mconcat(rules.iter().cloned());
    let contramapped = combined.clone().contramap(|text: &String| text.len() as i64);

    group.bench_function("mconcat_16", |bencher| {
        bencher.iter(|| black_box(combined.run_with(black_box(&100))));
    });

    group.bench_function("contramap", |bencher| {
        let input = "x".repeat(64);
        bencher.iter(|| black_box(contramapped.run_with(black_box(&input))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_identity,
    benchmark_reader,
    benchmark_writer,
    benchmark_pred
);

criterion_main!(benches);
