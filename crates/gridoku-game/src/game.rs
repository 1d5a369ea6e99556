use gridoku_core::{Board, CellState, Digit, Position};
use gridoku_solver::BacktrackingSolver;

use crate::{GameError, PresetOutcome, SolveOutcome, SubmitOutcome};

/// A puzzle-pad session: one board plus the solver that fills it.
///
/// The board is the single source of truth. A front end forwards each user
/// edit through [`Game::set_digit`]/[`Game::clear_cell`], invokes one of the
/// five operations, and re-renders from [`Game::board`]; it never keeps cell
/// state of its own.
///
/// # Example
///
/// ```
/// use gridoku_core::{Digit, Position};
/// use gridoku_game::Game;
///
/// let mut game = Game::new();
/// let pos = Position::new(4, 0);
///
/// game.set_digit(pos, Digit::D5).unwrap();
/// assert_eq!(game.cell(pos).as_digit(), Some(Digit::D5));
///
/// // Lock it in; the cell now rejects edits
/// game.mark_presets();
/// assert!(game.set_digit(pos, Digit::D6).is_err());
/// assert!(game.cell(pos).is_given());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    solver: BacktrackingSolver,
}

impl Game {
    /// Creates a session with an empty board and an entropy-seeded solver.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Creates a session over an existing board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self::with_solver(board, BacktrackingSolver::new())
    }

    /// Creates a session over an existing board with a caller-provided
    /// solver, typically [`BacktrackingSolver::with_seed`] for
    /// reproducible solves.
    #[must_use]
    pub fn with_solver(board: Board, solver: BacktrackingSolver) -> Self {
        Self { board, solver }
    }

    /// Returns the board for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.board.cell(pos)
    }

    /// Enters a digit at `pos`, replacing any previous player digit there.
    ///
    /// Digits that conflict with the rest of the board are accepted; the
    /// conflict surfaces later through [`Game::submit`], [`Game::solve`], or
    /// [`Game::mark_presets`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellLocked`] if the cell is a given.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.board[pos].is_given() {
            return Err(GameError::CellLocked { position: pos });
        }
        self.board.fill(pos, digit);
        Ok(())
    }

    /// Empties the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellLocked`] if the cell is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.board[pos].is_given() {
            return Err(GameError::CellLocked { position: pos });
        }
        self.board.clear_cell(pos);
        Ok(())
    }

    /// Validates the board as a finished Sudoku. Never mutates.
    #[must_use]
    pub fn submit(&self) -> SubmitOutcome {
        if self.board.is_complete() {
            SubmitOutcome::Complete
        } else {
            SubmitOutcome::Incomplete
        }
    }

    /// Locks the entered digits in place and searches for a completion.
    ///
    /// A full board is reported as [`SolveOutcome::AlreadyFull`] without
    /// invoking the solver, and a board that already violates a constraint
    /// as [`SolveOutcome::InvalidStart`] without mutation. Otherwise the
    /// entered digits are locked exactly as by [`Game::mark_presets`] and
    /// the solver runs; see [`SolveOutcome::Unsolvable`] for the failure
    /// state.
    pub fn solve(&mut self) -> SolveOutcome {
        if self.board.is_full() {
            return SolveOutcome::AlreadyFull;
        }
        if !self.board.is_valid_start() {
            return SolveOutcome::InvalidStart;
        }
        self.lock_consistent_cells();
        if self.solver.solve(&mut self.board) {
            SolveOutcome::Solved
        } else {
            SolveOutcome::Unsolvable
        }
    }

    /// Locks every entered digit that does not conflict with its row,
    /// column, or box.
    ///
    /// A board that already violates a constraint is reported as
    /// [`PresetOutcome::InvalidStart`] and left untouched. Otherwise each
    /// non-empty cell is locked only if its value is conflict-free at that
    /// moment; conflicting cells stay editable rather than failing the
    /// whole operation. Calling this twice without intervening edits locks
    /// nothing new.
    pub fn mark_presets(&mut self) -> PresetOutcome {
        if !self.board.is_valid_start() {
            return PresetOutcome::InvalidStart;
        }
        self.lock_consistent_cells();
        PresetOutcome::Marked
    }

    fn lock_consistent_cells(&mut self) {
        for pos in Position::ALL {
            if let Some(digit) = self.board[pos].as_digit()
                && !self.board.conflicts_in_box(pos, digit)
                && !self.board.conflicts_in_line(pos, digit)
            {
                self.board.mark_given(pos);
            }
        }
    }

    /// Empties every editable cell. Givens are untouched.
    pub fn erase(&mut self) {
        self.board.clear_filled();
    }

    /// Empties every cell and unlocks every given.
    pub fn erase_all(&mut self) {
        self.board.clear_all();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
