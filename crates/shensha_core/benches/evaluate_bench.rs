//! Benchmarks for the shensha evaluator.
//!
//! Run with: `cargo bench -p shensha_core`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shensha_core::{standard_catalog, BatchConfig, ChartGenerator, Evaluator};

/// Single-chart evaluation over the full catalog.
fn benchmark_evaluate_all(c: &mut Criterion) {
    let evaluator = Evaluator::new(standard_catalog());
    let charts = ChartGenerator::new(42).generate(64);

    c.bench_function("evaluate_all", |b| {
        b.iter(|| {
            for chart in &charts {
                black_box(evaluator.evaluate_all(black_box(chart)));
            }
        });
    });
}

/// Batch evaluation, sequential vs rayon.
fn benchmark_batch(c: &mut Criterion) {
    let catalog = standard_catalog();
    let mut group = c.benchmark_group("Batch");

    for size in [100usize, 1_000, 10_000] {
        let charts = ChartGenerator::new(7).generate(size);
        for parallel in [false, true] {
            let evaluator = Evaluator::with_batch_config(
                catalog,
                BatchConfig { parallel, min_parallel_batch: 1 },
            );
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, size), &charts, |b, charts| {
                b.iter(|| black_box(evaluator.evaluate_batch(black_box(charts))));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_evaluate_all, benchmark_batch);
criterion_main!(benches);
