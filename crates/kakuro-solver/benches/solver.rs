//! Benchmarks for table construction and whole-puzzle solves.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kakuro_core::Grid;
use kakuro_solver::{CombinationTable, Solver};

fn micro_grid() -> Grid {
    "X    4\\X  11\\X\nX\\3  .    .\nX\\12 .    ."
        .parse()
        .expect("bench grid parses")
}

/// A fully open 3x3 block whose runs all sum to 15; many solutions, so the
/// search explores a wide tree.
fn open_block_grid() -> Grid {
    "X     15\\X  15\\X  15\\X\n\
     X\\15  .     .     .\n\
     X\\15  .     .     .\n\
     X\\15  .     .     ."
        .parse()
        .expect("bench grid parses")
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("combination_table_build", |b| {
        b.iter(|| hint::black_box(CombinationTable::new()));
    });
}

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new();
    let puzzles = [
        ("micro", micro_grid()),
        ("open_block", open_block_grid()),
    ];

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter(|| hint::black_box(solver.solve(grid)));
        });
    }
}

criterion_group!(benches, bench_table_build, bench_solve);
criterion_main!(benches);
