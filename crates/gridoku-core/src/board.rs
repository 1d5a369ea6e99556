//! The 9×9 board.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};

use crate::{CellState, Digit, Position};

/// The 9×9 cell matrix shared by the rule checker, the solver, and the
/// controller.
///
/// `Board` is deliberately a dumb container: it stores [`CellState`]s and
/// offers raw transitions between them. Policy (which edits a user is
/// allowed to make, when cells get locked) lives in the controller crate;
/// board-level misuse (overwriting a given, locking an empty cell) is a
/// caller bug and panics.
///
/// # Text form
///
/// Boards round-trip through an 81-character text form, one character per
/// cell in row-major order: `1`-`9` for a digit, `.` for an empty cell
/// (`_` and `0` are also accepted on input, and all whitespace is ignored,
/// so grids can be laid out in readable rows). Parsed digits come in as
/// editable [`CellState::Filled`] cells; locking is a controller decision.
///
/// # Examples
///
/// ```
/// use gridoku_core::Board;
///
/// let board: Board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert!(board.is_valid_start());
/// assert!(!board.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; 81],
}

impl Board {
    /// Creates a board with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [CellState::Empty; 81],
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Writes a player digit into the cell at `pos`, replacing any previous
    /// player digit.
    ///
    /// # Panics
    ///
    /// Panics if the cell is a given. Callers gate edits on
    /// [`CellState::is_given`]; reaching a given here is a bug.
    pub fn fill(&mut self, pos: Position, digit: Digit) {
        let cell = &mut self.cells[pos.index()];
        assert!(!cell.is_given(), "cannot overwrite the given at {pos}");
        *cell = CellState::Filled(digit);
    }

    /// Empties the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is a given, as for [`Board::fill`].
    pub fn clear_cell(&mut self, pos: Position) {
        let cell = &mut self.cells[pos.index()];
        assert!(!cell.is_given(), "cannot clear the given at {pos}");
        *cell = CellState::Empty;
    }

    /// Locks the player digit at `pos` in place as a given.
    ///
    /// Locking is one-way; only [`Board::clear_all`] reverts it.
    ///
    /// # Panics
    ///
    /// Panics if the cell is empty: a given always carries a digit.
    pub fn mark_given(&mut self, pos: Position) {
        let cell = &mut self.cells[pos.index()];
        match *cell {
            CellState::Empty => panic!("cannot lock the empty cell at {pos}"),
            CellState::Filled(digit) => *cell = CellState::Given(digit),
            CellState::Given(_) => {}
        }
    }

    /// Empties every editable (non-given) cell. Givens are untouched.
    pub fn clear_filled(&mut self) {
        for cell in &mut self.cells {
            if cell.is_filled() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Empties every cell and drops every given lock.
    pub fn clear_all(&mut self) {
        self.cells = [CellState::Empty; 81];
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = CellState;

    fn index(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseBoardError {
    /// A character that is neither a digit, an empty-cell marker, nor
    /// whitespace.
    #[display("unexpected character {found:?} in board text")]
    UnexpectedChar {
        /// The offending character.
        found: char,
    },
    /// The text did not describe exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// How many cells the text described.
        found: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let state = match c {
                '.' | '_' | '0' => CellState::Empty,
                _ => {
                    let digit = c
                        .to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::try_from_value)
                        .ok_or(ParseBoardError::UnexpectedChar { found: c })?;
                    CellState::Filled(digit)
                }
            };
            if count < 81 {
                board.cells[count] = state;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::WrongCellCount { found: count });
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell.as_digit() {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
