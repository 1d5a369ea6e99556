//! Core data structures and rule checks for the Gridoku puzzle pad.
//!
//! This crate is the leaf of the Gridoku workspace: it defines the board a
//! user fills in and the pure rule checks every other component builds on.
//!
//! # Overview
//!
//! 1. **Cell vocabulary** - [`Digit`], [`DigitSet`], [`Position`], and
//!    [`House`] describe what a cell can hold and how cells group into
//!    rows, columns, and 3×3 boxes.
//! 2. **Board state** - [`CellState`] and [`Board`] hold the 81 cells. A
//!    cell is either empty, filled by the player, or a locked-in given;
//!    givens always carry a digit, so a locked-but-empty cell cannot be
//!    represented.
//! 3. **Rules** - the [`rules`] module adds conflict and completeness
//!    checks to [`Board`]: placement safety against row/column/box peers,
//!    whether a partially filled board is a valid starting point, and
//!    whether a full board is a correctly solved Sudoku.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.fill(Position::new(0, 0), Digit::D5);
//!
//! // 5 can no longer go anywhere else in row 0, column 0, or the top-left box
//! assert!(!board.is_placement_safe(Position::new(8, 0), Digit::D5));
//! assert!(board.is_placement_safe(Position::new(8, 8), Digit::D5));
//! assert!(board.is_valid_start());
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;
pub mod rules;

pub use self::{
    board::{Board, ParseBoardError},
    cell::CellState,
    digit::Digit,
    digit_set::DigitSet,
    house::House,
    position::Position,
};
