//! Sudoku rule checks over a [`Board`].
//!
//! These are pure reads; nothing here mutates the board. The conflict
//! checks deliberately exclude the inspected cell itself, so they can
//! vet both a proposed placement and a digit that is already on the board.

use crate::{Board, Digit, DigitSet, House, Position};

impl Board {
    /// Returns whether another cell in `pos`'s 3×3 box holds `digit`.
    ///
    /// The cell at `pos` itself is never counted, so a placed digit does
    /// not conflict with itself.
    #[must_use]
    pub fn conflicts_in_box(&self, pos: Position, digit: Digit) -> bool {
        pos.box_peers().any(|peer| self[peer].as_digit() == Some(digit))
    }

    /// Returns whether another cell in `pos`'s row or column holds `digit`.
    #[must_use]
    pub fn conflicts_in_line(&self, pos: Position, digit: Digit) -> bool {
        pos.row_peers()
            .chain(pos.column_peers())
            .any(|peer| self[peer].as_digit() == Some(digit))
    }

    /// Returns whether `digit` can go at `pos` without duplicating a digit
    /// in the cell's row, column, or box.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, Digit, Position};
    ///
    /// let mut board = Board::new();
    /// board.fill(Position::new(0, 0), Digit::D5);
    ///
    /// assert!(!board.is_placement_safe(Position::new(1, 1), Digit::D5)); // same box
    /// assert!(board.is_placement_safe(Position::new(1, 1), Digit::D6));
    /// ```
    #[must_use]
    pub fn is_placement_safe(&self, pos: Position, digit: Digit) -> bool {
        !self.conflicts_in_box(pos, digit) && !self.conflicts_in_line(pos, digit)
    }

    /// Returns whether the board, as it stands, is a legal starting point:
    /// no digit appears twice in any row, column, or box.
    ///
    /// Empty cells are ignored, so a completely empty board is a valid
    /// start.
    #[must_use]
    pub fn is_valid_start(&self) -> bool {
        Position::ALL.iter().all(|&pos| match self[pos].as_digit() {
            Some(digit) => {
                !self.conflicts_in_box(pos, digit) && !self.conflicts_in_line(pos, digit)
            }
            None => true,
        })
    }

    /// Returns whether the board is a correctly solved Sudoku: every cell
    /// holds a digit, and every row, column, and box contains each digit
    /// exactly once.
    ///
    /// Any empty cell makes this false.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        House::ALL.iter().all(|house| {
            house
                .positions()
                .filter_map(|pos| self[pos].as_digit())
                .collect::<DigitSet>()
                .is_full()
        })
    }
}
