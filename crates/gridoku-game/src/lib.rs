//! The controller a Gridoku front end talks to.
//!
//! [`Game`] owns the board and the solver and exposes the five user-visible
//! operations - submit, solve, mark-as-preset, erase, erase-all - plus the
//! per-cell edits a front end forwards from user input. Every abnormal
//! situation is an enumerated outcome ([`SubmitOutcome`], [`SolveOutcome`],
//! [`PresetOutcome`]) or a typed error ([`GameError`]); the controller never
//! panics on user-reachable states.
//!
//! The front end itself (widgets, focus, dialogs) is not part of this
//! workspace: it is expected to forward edits here and re-render from
//! [`Game::board`] after each operation. `examples/solve_grid.rs` drives the
//! controller from the command line in exactly that fashion.
//!
//! # Example
//!
//! ```
//! use gridoku_core::Board;
//! use gridoku_game::Game;
//! use gridoku_solver::BacktrackingSolver;
//!
//! let board: Board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let mut game = Game::with_solver(board, BacktrackingSolver::with_seed(42));
//! assert!(game.solve().is_solved());
//! assert!(game.board().is_complete());
//! ```

mod error;
mod game;
mod outcome;

pub use self::{
    error::GameError,
    game::Game,
    outcome::{PresetOutcome, SolveOutcome, SubmitOutcome},
};
