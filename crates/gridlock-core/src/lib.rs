//! Core data structures for the gridlock sudoku engine.
//!
//! This crate provides the board model shared by the solver, generator, and
//! command-line tool:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`cell`]: a cell, empty or filled
//! - [`position`]: `(row, col)` positions and block indices
//! - [`digit_set`]: candidate sets of digits with fast bit operations
//! - [`board`]: the 9×9 board, region accessors, candidate evaluation,
//!   completed-solution and given-consistency checks, and the flat
//!   81-character text format
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, Position};
//!
//! let board: Board =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()?;
//!
//! // Legal digits for the first empty cell
//! let candidates = board.candidates(Position::new(0, 2));
//! assert_eq!(candidates.len(), 3);
//!
//! // The puzzle is consistent but far from solved
//! assert!(board.is_consistent());
//! assert!(!board.is_valid_complete());
//! # Ok::<(), gridlock_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod position;
mod validate;

pub use self::{
    board::{Board, ParseBoardError},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
