use derive_more::{Display, Error};
use gridlock_core::Position;

/// Failure modes of the backtracking solver.
///
/// All of these are returned as values, never panicked. A caller that only
/// cares about solvability can treat every variant as "no solution here";
/// the variants exist so that broken input is distinguishable from a
/// legitimately unsolvable puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// The search exhausted every candidate at the top of the recursion:
    /// the board as given admits no completion.
    #[display("board admits no completion")]
    NoSolution,
    /// The given digits already violate row/column/block uniqueness before
    /// the search starts. Detected by an upfront scan so it is never
    /// conflated with [`NoSolution`](SolveError::NoSolution).
    #[display("given digits conflict at {pos}")]
    InconsistentGivens {
        /// The first filled cell that duplicates an earlier digit in its
        /// row, column, or block.
        pos: Position,
    },
    /// The cooperative step budget ran out before the search finished.
    #[display("search exceeded the step limit of {limit}")]
    StepLimitExceeded {
        /// The configured limit on search nodes.
        limit: u64,
    },
}
