//! Depth-first backtracking solver for the gridlock sudoku engine.
//!
//! The entry point is [`BacktrackingSolver`]: it takes ownership of a
//! [`Board`](gridlock_core::Board), checks the givens for conflicts, then
//! searches for the first completion, returning it or a [`SolveError`].
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Board;
//! use gridlock_solver::BacktrackingSolver;
//!
//! let board: Board =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()
//!         .unwrap();
//! let solution = BacktrackingSolver::new().solve(board)?;
//! assert!(solution.is_valid_complete());
//! # Ok::<(), gridlock_solver::SolveError>(())
//! ```

pub use self::{
    error::SolveError,
    solver::{BacktrackingSolver, SolveStats},
};

mod error;
mod solver;
