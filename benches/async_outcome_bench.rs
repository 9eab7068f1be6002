//! Benchmark for memoized asynchronous outcomes.
//!
//! Measures the cost of building and resolving derived chains, and of
//! repeated queries against an already resolved instance.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use outcome::asynchronous::AsyncOutcome;
use outcome::outcome::Outcome;
use std::hint::black_box;

// =============================================================================
// Chain Benchmarks
// =============================================================================

fn benchmark_chain(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("async_outcome_chain");

    group.bench_function("resolved_await", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let outcome = AsyncOutcome::<i32, String>::value(black_box(42));
            black_box(outcome.await)
        });
    });

    for depth in [1_usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("map_depth", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut outcome = AsyncOutcome::new(async { Outcome::<i64, String>::value(1) });
                for _ in 0..depth {
                    outcome = outcome.map(|x| x + 1);
                }
                black_box(outcome.await)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Query Benchmarks
// =============================================================================

fn benchmark_queries(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("async_outcome_queries");

    let resolved = AsyncOutcome::<i32, String>::value(7);
    let resolved = &resolved;

    group.bench_function("has_value_after_resolution", |bencher| {
        bencher
            .to_async(&runtime)
            .iter(|| async move { black_box(resolved.has_value().await) });
    });

    group.bench_function("sync_read_after_resolution", |bencher| {
        bencher.iter(|| black_box(resolved.as_value()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_chain, benchmark_queries);

criterion_main!(benches);
