//! Solve a Sudoku grid from the command line.
//!
//! This drives the controller exactly as a graphical front end would:
//! parse the entered grid, ask the controller to solve it, and render the
//! resulting board.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_grid -- \
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Pin the solver's search order (chooses among multiple solutions
//! deterministically):
//!
//! ```sh
//! cargo run --example solve_grid -- --seed 42 "$(printf '.%.0s' {1..81})"
//! ```

use std::process;

use clap::Parser;
use gridoku_core::Board;
use gridoku_game::{Game, SolveOutcome};
use gridoku_solver::BacktrackingSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The 81 cells in row-major order: digits 1-9 fill cells; `.`, `_`,
    /// or `0` leave them open; whitespace is ignored.
    grid: String,

    /// Fix the solver's candidate order for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let board: Board = match args.grid.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid grid: {err}");
            process::exit(2);
        }
    };

    let solver = match args.seed {
        Some(seed) => BacktrackingSolver::with_seed(seed),
        None => BacktrackingSolver::new(),
    };
    let mut game = Game::with_solver(board, solver);

    match game.solve() {
        SolveOutcome::Solved => print_board(game.board()),
        SolveOutcome::AlreadyFull => {
            eprintln!("There are no open cells to start from.");
            process::exit(1);
        }
        SolveOutcome::InvalidStart => {
            eprintln!("This is not a valid Sudoku to start.");
            process::exit(1);
        }
        SolveOutcome::Unsolvable => {
            eprintln!("Unable to solve.");
            process::exit(1);
        }
    }
}

fn print_board(board: &Board) {
    let text = board.to_string();
    for row in text.as_bytes().chunks(9) {
        println!("{}", std::str::from_utf8(row).unwrap());
    }
}
