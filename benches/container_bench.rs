//! Benchmark for container chains, curried calls and memoization.
//!
//! Every container operation allocates a new container; these measure the
//! cost of that model for typical chain lengths.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use algebrars::collection::memoize;
use algebrars::compose::curry3;
use algebrars::container::{Optional, Outcome};
use algebrars::dynamic::{Value, get};
use algebrars::effect::Effect;
use algebrars::typeclass::Callable;
use std::hint::black_box;

// =============================================================================
// Optional / Outcome
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    for length in [1_usize, 10, 100] {
        group.bench_with_input(BenchmarkId::new("present", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut optional = Optional::some(black_box(1_i64));
                for _ in 0..length {
                    optional = optional.map(|n| n.wrapping_mul(3)).bind(Optional::some);
                }
                black_box(optional)
            });
        });

        group.bench_with_input(BenchmarkId::new("absent", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut optional: Optional<i64> = Optional::none();
                for _ in 0..length {
                    optional = optional.map(|n| n.wrapping_mul(3)).bind(Optional::some);
                }
                black_box(optional)
            });
        });
    }

    group.finish();
}

fn benchmark_outcome_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_concat");

    group.bench_function("strings", |bencher| {
        bencher.iter(|| {
            let mut outcome: Outcome<String, ()> = Outcome::success(String::new());
            for word in ["alpha", "beta", "gamma", "delta"] {
                outcome = outcome.concat(black_box(word).to_string());
            }
            black_box(outcome)
        });
    });

    group.finish();
}

// =============================================================================
// Functions
// =============================================================================

fn benchmark_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry");
    let add = curry3(|a: i64, b: i64, c: i64| a + b + c);

    group.bench_function("all_at_once", |bencher| {
        bencher.iter(|| black_box(add.call((black_box(1), 2, 3))));
    });

    group.bench_function("one_by_one", |bencher| {
        bencher.iter(|| black_box(add.call((black_box(1),)).call((2,)).call((3,))));
    });

    group.finish();
}

fn benchmark_effect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("effect");
    let pipeline = Effect::sync(|n: i64| n + 1)
        .map(|n| n * 2)
        .map(|n| n - 3);

    group.bench_function("sync_call", |bencher| {
        bencher.iter(|| black_box(pipeline.call(black_box(20)).into_ready().ok()));
    });

    group.finish();
}

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");
    let fibonacci = memoize(|n: u32| (1..=n).fold((0_u64, 1_u64), |(a, b), _| (b, a + b)).0);

    group.bench_function("hit", |bencher| {
        let _ = fibonacci.call(40);
        bencher.iter(|| black_box(fibonacci.call(black_box(40))));
    });

    group.finish();
}

fn benchmark_path_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("path_lookup");
    let document = Value::object([(
        "a",
        Value::object([("b", Value::array([Value::object([("c", 1)])]))]),
    )]);

    group.bench_function("depth_4", |bencher| {
        bencher.iter(|| black_box(get(&document, black_box("a.b.0.c"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_optional_chain,
    benchmark_outcome_concat,
    benchmark_curry,
    benchmark_effect,
    benchmark_memoize,
    benchmark_path_lookup
);

criterion_main!(benches);
