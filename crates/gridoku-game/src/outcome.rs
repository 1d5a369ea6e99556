//! Outcomes of the user-visible operations.
//!
//! A front end maps these to its dialogs; none of them is an error in the
//! programmatic sense.

use derive_more::IsVariant;

/// Outcome of submitting the board for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SubmitOutcome {
    /// Every cell is filled and every row, column, and box holds each digit
    /// exactly once.
    Complete,
    /// The board has empty cells or a rule violation.
    Incomplete,
}

/// Outcome of asking the controller to solve the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SolveOutcome {
    /// Every cell is already filled; the solver was not invoked.
    AlreadyFull,
    /// The filled cells already violate a row, column, or box constraint;
    /// nothing was changed.
    InvalidStart,
    /// The search filled every empty cell; the board is now complete.
    Solved,
    /// The search exhausted every branch without finding a completion. The
    /// digits are as they were before solving, but cells locked by the
    /// pre-solve preset pass stay locked.
    Unsolvable,
}

/// Outcome of locking the entered digits as presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum PresetOutcome {
    /// The filled cells already violate a constraint; nothing was locked.
    InvalidStart,
    /// Conflict-free entered digits are now locked as givens.
    Marked,
}
