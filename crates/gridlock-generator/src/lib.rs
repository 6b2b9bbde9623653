//! Puzzle generation for the gridlock sudoku engine.
//!
//! Generation builds a canonical solved board, scrambles it with
//! validity-preserving row and column swaps, then clears random cells until
//! the requested number of clues remains. Randomness is always an explicit
//! parameter, so generation is reproducible under a fixed seed.
//!
//! Row swaps are restricted to one band of three rows and column swaps to
//! one stack of three columns. Unrestricted swaps would move digits across
//! blocks and could duplicate a digit inside one, so every permutation here
//! keeps the full board valid.
//!
//! The generated puzzle is not guaranteed to have a unique solution.
//!
//! # Examples
//!
//! ```
//! use gridlock_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let board = generator.generate_seeded(40, 7);
//! assert_eq!(board.filled_count(), 40);
//!
//! // The same seed reproduces the same puzzle.
//! assert_eq!(board, generator.generate_seeded(40, 7));
//! ```

use gridlock_core::{Board, Cell, Digit, Position};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// Number of shuffle rounds applied by [`PuzzleGenerator::new`]. Each round
/// performs one row-pair swap and one column-pair swap.
pub const DEFAULT_SHUFFLE_ROUNDS: u32 = 20;

/// Generates puzzles by permuting a canonical solved board and digging
/// holes.
///
/// # Examples
///
/// ```
/// use gridlock_generator::PuzzleGenerator;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64Mcg;
///
/// let generator = PuzzleGenerator::new();
/// let mut rng = Pcg64Mcg::seed_from_u64(42);
/// let board = generator.generate(30, &mut rng);
/// assert_eq!(board.empty_count(), 51);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    shuffle_rounds: u32,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator with [`DEFAULT_SHUFFLE_ROUNDS`] shuffle rounds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shuffle_rounds: DEFAULT_SHUFFLE_ROUNDS,
        }
    }

    /// Creates a generator with a custom number of shuffle rounds.
    ///
    /// Zero rounds produces the canonical board itself, which is handy in
    /// tests.
    #[must_use]
    pub const fn with_shuffle_rounds(shuffle_rounds: u32) -> Self {
        Self { shuffle_rounds }
    }

    /// Returns the canonical solved board, `digit(i, j) = ((i*3 + i/3 + j)
    /// mod 9) + 1`.
    ///
    /// Every row of the canonical board is a rotation of `1..=9` arranged so
    /// that rows, columns, and blocks all stay duplicate-free; it is valid
    /// by construction and serves as the seed of every generated puzzle.
    #[must_use]
    pub fn canonical() -> Board {
        let mut board = Board::empty();
        for pos in Position::ALL {
            let (i, j) = (pos.row(), pos.col());
            let value = (i * 3 + i / 3 + j) % 9 + 1;
            board[pos] = Cell::Filled(Digit::from_value(value));
        }
        board
    }

    /// Generates a puzzle with `clues` filled cells.
    ///
    /// `clues` is clamped to the board size: `0` yields a fully blank board
    /// and `81` or more yields a complete one. The result is a permuted
    /// canonical board with `81 - clues` random cells cleared; it always
    /// satisfies the row/column/block invariant, but nothing stops two
    /// different completions from existing.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(&self, clues: usize, rng: &mut R) -> Board {
        let mut board = Self::canonical();
        self.shuffle(&mut board, rng);

        let blanks = 81 - clues.min(81);
        while board.empty_count() < blanks {
            let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
            board[pos] = Cell::Empty;
        }
        board
    }

    /// Generates a puzzle reproducibly from a `u64` seed.
    ///
    /// Convenience over [`generate`](Self::generate) with a
    /// [`Pcg64Mcg`] seeded via [`SeedableRng::seed_from_u64`].
    ///
    /// [`SeedableRng::seed_from_u64`]: rand::SeedableRng::seed_from_u64
    #[must_use]
    pub fn generate_seeded(&self, clues: usize, seed: u64) -> Board {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        self.generate(clues, &mut rng)
    }

    /// Scrambles a board with per-band row swaps and per-stack column
    /// swaps.
    fn shuffle<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) {
        for _ in 0..self.shuffle_rounds {
            let (a, b) = Self::pick_pair(rng);
            swap_rows(board, a, b);
            let (a, b) = Self::pick_pair(rng);
            swap_cols(board, a, b);
        }
    }

    /// Picks two distinct indices inside one randomly chosen band or stack
    /// of three.
    fn pick_pair<R: Rng + ?Sized>(rng: &mut R) -> (u8, u8) {
        let base = rng.random_range(0..3u8) * 3;
        let first = rng.random_range(0..3u8);
        let mut second = rng.random_range(0..3u8);
        while second == first {
            second = rng.random_range(0..3u8);
        }
        (base + first, base + second)
    }
}

fn swap_rows(board: &mut Board, a: u8, b: u8) {
    for col in 0..9 {
        let (pa, pb) = (Position::new(a, col), Position::new(b, col));
        let tmp = board[pa];
        board[pa] = board[pb];
        board[pb] = tmp;
    }
}

fn swap_cols(board: &mut Board, a: u8, b: u8) {
    for row in 0..9 {
        let (pa, pb) = (Position::new(row, a), Position::new(row, b));
        let tmp = board[pa];
        board[pa] = board[pb];
        board[pb] = tmp;
    }
}

#[cfg(test)]
mod tests {
    use gridlock_solver::BacktrackingSolver;

    use super::*;

    #[test]
    fn test_canonical_board_is_valid() {
        assert!(PuzzleGenerator::canonical().is_valid_complete());
    }

    #[test]
    fn test_zero_rounds_returns_canonical() {
        let generator = PuzzleGenerator::with_shuffle_rounds(0);
        assert_eq!(generator.generate_seeded(81, 1), PuzzleGenerator::canonical());
    }

    #[test]
    fn test_clue_counts() {
        let generator = PuzzleGenerator::new();
        assert_eq!(generator.generate_seeded(0, 3).filled_count(), 0);
        assert_eq!(generator.generate_seeded(40, 3).filled_count(), 40);
        assert_eq!(generator.generate_seeded(81, 3).filled_count(), 81);
    }

    #[test]
    fn test_clues_clamped_to_board_size() {
        let generator = PuzzleGenerator::new();
        let board = generator.generate_seeded(1000, 3);
        assert_eq!(board.filled_count(), 81);
        assert!(board.is_valid_complete());
    }

    #[test]
    fn test_generated_puzzle_is_consistent() {
        let generator = PuzzleGenerator::new();
        for seed in 0..20 {
            assert!(generator.generate_seeded(30, seed).is_consistent());
        }
    }

    #[test]
    fn test_same_seed_reproduces_board() {
        let generator = PuzzleGenerator::new();
        assert_eq!(generator.generate_seeded(40, 99), generator.generate_seeded(40, 99));
    }

    #[test]
    fn test_generate_then_solve_round_trip() {
        let generator = PuzzleGenerator::new();
        let solver = BacktrackingSolver::new();
        for clues in [0, 40, 81] {
            let puzzle = generator.generate_seeded(clues, 7);
            let solution = solver.solve(puzzle).unwrap();
            assert!(solution.is_valid_complete());
        }
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            // Band/stack-restricted swaps must never break the full board.
            #[test]
            fn shuffled_full_board_stays_valid(seed in any::<u64>()) {
                let board = PuzzleGenerator::new().generate_seeded(81, seed);
                prop_assert!(board.is_valid_complete());
            }

            #[test]
            fn generated_blank_count_matches(seed in any::<u64>(), clues in 0..=81usize) {
                let board = PuzzleGenerator::new().generate_seeded(clues, seed);
                prop_assert_eq!(board.empty_count(), 81 - clues);
            }
        }
    }
}
