//! Solver benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use gridoku_core::Board;
use gridoku_solver::BacktrackingSolver;

const PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn bench_solve_empty(c: &mut Criterion) {
    let mut solver = BacktrackingSolver::with_seed(0x5eed);
    c.bench_function("solve_empty_board", |b| {
        b.iter(|| {
            let mut board = Board::new();
            assert!(solver.solve(black_box(&mut board)));
            board
        });
    });
}

fn bench_solve_puzzle(c: &mut Criterion) {
    let puzzle: Board = PUZZLE.parse().unwrap();
    let mut solver = BacktrackingSolver::with_seed(0x5eed);
    c.bench_function("solve_known_puzzle", |b| {
        b.iter(|| {
            let mut board = puzzle.clone();
            assert!(solver.solve(black_box(&mut board)));
            board
        });
    });
}

criterion_group!(benches, bench_solve_empty, bench_solve_puzzle);
criterion_main!(benches);
