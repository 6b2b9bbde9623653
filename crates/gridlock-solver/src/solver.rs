use gridlock_core::{Board, Cell};

use crate::SolveError;

/// Statistics collected during a backtracking search.
///
/// # Examples
///
/// ```
/// use gridlock_core::Board;
/// use gridlock_solver::BacktrackingSolver;
///
/// let board: Board =
///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///         .parse()
///         .unwrap();
/// let solver = BacktrackingSolver::new();
/// let (_solution, stats) = solver.solve_with_stats(board)?;
/// assert!(stats.nodes() >= 51); // one node per cell filled, plus backtracking
/// # Ok::<(), gridlock_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    nodes: u64,
    backtracks: u64,
}

impl SolveStats {
    /// Returns the number of search nodes visited (empty positions for
    /// which candidates were evaluated).
    #[must_use]
    pub const fn nodes(self) -> u64 {
        self.nodes
    }

    /// Returns how many tentative assignments were undone.
    #[must_use]
    pub const fn backtracks(self) -> u64 {
        self.backtracks
    }
}

/// Depth-first backtracking solver for 9×9 sudoku boards.
///
/// The solver fills the first empty position found in row-major scan order,
/// trying candidates in ascending digit order, and undoes the assignment
/// when the recursion fails. It stops at the first completion found; it does
/// not enumerate further solutions, and which completion is found first on a
/// multi-solution board is fixed by those two orders.
///
/// The only pruning is per-step legality via
/// [`Board::candidates`](gridlock_core::Board::candidates), recomputed at
/// every node. Worst-case time is exponential, which is fine for 9×9 boards;
/// the solver is not designed to scale past them.
///
/// Solving takes ownership of the board and hands it back completed. The
/// search mutates one board in place across its recursion, so a single
/// solve is strictly single-threaded; independent boards can be solved on
/// independent threads freely.
///
/// # Examples
///
/// ```
/// use gridlock_core::Board;
/// use gridlock_solver::BacktrackingSolver;
///
/// let board: Board =
///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///         .parse()
///         .unwrap();
/// let solver = BacktrackingSolver::new();
/// let solution = solver.solve(board)?;
/// assert!(solution.is_valid_complete());
/// # Ok::<(), gridlock_solver::SolveError>(())
/// ```
///
/// Bounding the search with a step limit:
///
/// ```
/// use gridlock_core::Board;
/// use gridlock_solver::{BacktrackingSolver, SolveError};
///
/// let solver = BacktrackingSolver::with_step_limit(5);
/// let result = solver.solve(Board::empty());
/// assert_eq!(result, Err(SolveError::StepLimitExceeded { limit: 5 }));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver {
    step_limit: Option<u64>,
}

impl BacktrackingSolver {
    /// Creates a solver with no step limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { step_limit: None }
    }

    /// Creates a solver that abandons the search after visiting `limit`
    /// nodes, returning [`SolveError::StepLimitExceeded`].
    ///
    /// The check is cooperative: the counter is threaded down the recursion
    /// and tested once per node, so the search stops promptly but not
    /// mid-node. Useful for callers with a deadline; completing any 9×9
    /// board needs at least 81 nodes.
    #[must_use]
    pub const fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    /// Solves the board, returning the first completion found.
    ///
    /// The givens are checked for row/column/block conflicts before the
    /// search starts, so a broken input surfaces as
    /// [`SolveError::InconsistentGivens`] rather than a misleading
    /// [`SolveError::NoSolution`]. A complete, valid board is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InconsistentGivens`] if the input already
    /// violates uniqueness, [`SolveError::NoSolution`] if the board admits
    /// no completion, and [`SolveError::StepLimitExceeded`] if a configured
    /// step limit runs out first.
    pub fn solve(&self, board: Board) -> Result<Board, SolveError> {
        self.solve_with_stats(board).map(|(board, _stats)| board)
    }

    /// Like [`solve`](Self::solve), but also reports search statistics.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_with_stats(&self, mut board: Board) -> Result<(Board, SolveStats), SolveError> {
        if let Some(pos) = board.first_conflict() {
            return Err(SolveError::InconsistentGivens { pos });
        }
        let mut stats = SolveStats::default();
        if self.search(&mut board, &mut stats)? {
            Ok((board, stats))
        } else {
            Err(SolveError::NoSolution)
        }
    }

    /// One stack frame per empty position: `Ok(true)` propagates the first
    /// completion up, `Ok(false)` tells the caller to undo and try its next
    /// candidate.
    fn search(&self, board: &mut Board, stats: &mut SolveStats) -> Result<bool, SolveError> {
        let Some(pos) = board.first_empty() else {
            return Ok(true);
        };
        stats.nodes += 1;
        if let Some(limit) = self.step_limit
            && stats.nodes > limit
        {
            return Err(SolveError::StepLimitExceeded { limit });
        }
        for digit in board.candidates(pos) {
            board[pos] = Cell::Filled(digit);
            if self.search(board, stats)? {
                return Ok(true);
            }
            board[pos] = Cell::Empty;
            stats.backtracks += 1;
        }
        Ok(false)
    }
}
