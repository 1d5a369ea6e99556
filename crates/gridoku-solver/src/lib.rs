//! Backtracking search that fills the empty cells of a Gridoku board.
//!
//! [`BacktrackingSolver`] walks the board in row-major order, tries the nine
//! digits in a freshly shuffled order at each empty cell, and unwinds on
//! dead ends. The shuffle makes the solver land on different solutions when
//! several exist; it never changes whether a solution is found.
//!
//! The generator is seedable so tests can pin the search order:
//!
//! ```
//! use gridoku_core::Board;
//! use gridoku_solver::BacktrackingSolver;
//!
//! let mut board = Board::new();
//! let mut solver = BacktrackingSolver::with_seed(42);
//!
//! assert!(solver.solve(&mut board));
//! assert!(board.is_complete());
//! ```

use gridoku_core::{Board, Digit, Position};
use log::debug;
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

/// Depth-first backtracking solver with randomized candidate order.
///
/// The solver owns its PRNG; solving the same board twice with one solver
/// advances the stream and may find different solutions, while two solvers
/// built from the same seed behave identically.
#[derive(Debug, Clone)]
pub struct BacktrackingSolver {
    rng: Pcg64Mcg,
}

impl BacktrackingSolver {
    /// Creates a solver seeded from thread-local entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a solver with a fixed seed, for reproducible searches.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Attempts to fill every empty cell so the board satisfies
    /// [`Board::is_complete`], mutating the board in place.
    ///
    /// Returns `false` when no completion exists from the current state;
    /// that is an ordinary outcome, not an error, and every digit the
    /// search placed has been unwound by the time it returns. Cells that
    /// already hold a digit - givens or otherwise - are never touched, and
    /// the solver does not re-validate them: callers gate on
    /// [`Board::is_valid_start`] first.
    pub fn solve(&mut self, board: &mut Board) -> bool {
        let open = Position::ALL
            .iter()
            .filter(|&&pos| board.cell(pos).is_empty())
            .count();
        let solved = self.solve_from(board, 0);
        debug!("backtracking over {open} open cells: {}", if solved { "solved" } else { "exhausted" });
        solved
    }

    fn solve_from(&mut self, board: &mut Board, index: usize) -> bool {
        // Past the last cell: every cell before it was satisfied.
        let Some(&pos) = Position::ALL.get(index) else {
            return true;
        };

        if !board.cell(pos).is_empty() {
            return self.solve_from(board, index + 1);
        }

        let mut candidates = Digit::ALL;
        candidates.shuffle(&mut self.rng);
        for digit in candidates {
            if board.is_placement_safe(pos, digit) {
                board.fill(pos, digit);
                if self.solve_from(board, index + 1) {
                    return true;
                }
                board.clear_cell(pos);
            }
        }
        false
    }
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    // The puzzle above has exactly one completion.
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn puzzle_board() -> Board {
        PUZZLE.parse().expect("valid puzzle grid")
    }

    #[test]
    fn test_solves_empty_board() {
        let mut board = Board::new();
        assert!(BacktrackingSolver::with_seed(1).solve(&mut board));
        assert!(board.is_complete());
    }

    #[test]
    fn test_same_seed_same_solution() {
        let mut first = Board::new();
        let mut second = Board::new();
        assert!(BacktrackingSolver::with_seed(7).solve(&mut first));
        assert!(BacktrackingSolver::with_seed(7).solve(&mut second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unique_puzzle_reaches_the_known_solution() {
        let mut board = puzzle_board();
        assert!(BacktrackingSolver::with_seed(99).solve(&mut board));
        assert_eq!(board.to_string(), SOLUTION);
    }

    #[test]
    fn test_givens_are_never_touched() {
        let mut board = puzzle_board();
        let givens: Vec<_> = Position::ALL
            .iter()
            .filter(|&&pos| !board.cell(pos).is_empty())
            .copied()
            .collect();
        for &pos in &givens {
            board.mark_given(pos);
        }
        let before: Vec<_> = givens.iter().map(|&pos| board.cell(pos)).collect();

        assert!(BacktrackingSolver::with_seed(3).solve(&mut board));

        let after: Vec<_> = givens.iter().map(|&pos| board.cell(pos)).collect();
        assert_eq!(before, after);
        assert!(board.is_complete());
    }

    #[test]
    fn test_unsolvable_board_is_left_unchanged() {
        // Row 0 forces a 9 into its last cell, but column 8 already has one.
        // Locally consistent, globally unsatisfiable.
        let mut board: Board = "
            12345678_
            ________9
            _________
            _________
            _________
            _________
            _________
            _________
            _________
        "
        .parse()
        .unwrap();
        assert!(board.is_valid_start());

        let snapshot = board.clone();
        assert!(!BacktrackingSolver::with_seed(5).solve(&mut board));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_full_board_trivially_succeeds() {
        let mut board: Board = SOLUTION.parse().unwrap();
        let snapshot = board.clone();
        assert!(BacktrackingSolver::with_seed(11).solve(&mut board));
        assert_eq!(board, snapshot);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn any_seed_fills_an_empty_board(seed in any::<u64>()) {
            let mut board = Board::new();
            prop_assert!(BacktrackingSolver::with_seed(seed).solve(&mut board));
            prop_assert!(board.is_complete());
        }

        #[test]
        fn any_seed_finds_the_unique_solution(seed in any::<u64>()) {
            let mut board = puzzle_board();
            prop_assert!(BacktrackingSolver::with_seed(seed).solve(&mut board));
            prop_assert_eq!(board.to_string(), SOLUTION);
        }
    }
}
