//! Criterion benchmarks for the tour strategies.
//!
//! Compares the greedy and exact strategies across instance sizes to track
//! how hard the MST-guided search prunes relative to plain uniform cost.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package cointour-solvers
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use cointour_core::TourSolver;
use cointour_core::test_support::scrambled;
use cointour_solvers::{
    AStarSolver, ExhaustiveSolver, NearestNeighbourSolver, UniformCostSolver,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Instance sizes (node counts, depot included) to benchmark.
const PROBLEM_SIZES: &[usize] = &[6, 8, 10];

/// Deterministic seed so every run benches the same instances.
const BENCHMARK_SEED: u64 = 0xC01;

fn bench_solver(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    solver: &dyn TourSolver,
    size: usize,
) {
    let matrix = scrambled(size, BENCHMARK_SEED);
    group.bench_with_input(BenchmarkId::new(name, size), &matrix, |b, m| {
        b.iter(|| {
            #[expect(
                clippy::let_underscore_must_use,
                reason = "Benchmarking solve performance, result is intentionally discarded"
            )]
            let _ = solver.solve(m);
        });
    });
}

fn bench_solve_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_time");

    for &size in PROBLEM_SIZES {
        bench_solver(&mut group, "nearest-neighbour", &NearestNeighbourSolver::new(), size);
        bench_solver(&mut group, "uniform-cost", &UniformCostSolver::new(), size);
        bench_solver(&mut group, "a-star", &AStarSolver::new(), size);
        // Factorial blow-up keeps the brute-force reference to small sizes.
        if size <= 8 {
            bench_solver(&mut group, "exhaustive", &ExhaustiveSolver::new(), size);
        }
    }

    group.finish();
}

criterion_group!(benches, bench_solve_times);
criterion_main!(benches);
