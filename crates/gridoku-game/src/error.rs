//! Controller errors.

use derive_more::{Display, Error};
use gridoku_core::Position;

/// Error returned when a cell edit is rejected.
///
/// These are recoverable, user-facing conditions and are reported as values;
/// only caller bugs (out-of-range coordinates) panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is locked as a given and cannot be edited until
    /// the board is fully reset.
    #[display("cell at {position} is locked as a given")]
    CellLocked {
        /// The cell the rejected edit targeted.
        position: Position,
    },
}
