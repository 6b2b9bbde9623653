//! The 9×9 board: storage, region accessors, candidate evaluation, and the
//! flat text format.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{cell::Cell, digit_set::DigitSet, position::Position};

/// A 9×9 grid of [`Cell`]s, stored row-major.
///
/// The board is plain data: it does not enforce the sudoku uniqueness
/// invariant on its own. Callers that need the invariant checked use
/// [`Board::first_conflict`] or [`Board::is_valid_complete`].
///
/// Boards index by [`Position`]:
///
/// ```
/// use gridlock_core::{Board, Cell, Digit, Position};
///
/// let mut board = Board::default();
/// let pos = Position::new(4, 4);
/// board[pos] = Cell::Filled(Digit::D5);
/// assert_eq!(board[pos].digit(), Some(Digit::D5));
/// ```
///
/// The text form is the flat 81-character row-major serialization, `.` for
/// empty cells:
///
/// ```
/// use gridlock_core::Board;
///
/// let text = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
/// let board: Board = text.parse()?;
/// assert_eq!(board.to_string(), text);
/// # Ok::<(), gridlock_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with all 81 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; 81],
        }
    }

    /// Returns the 9 cells of `pos`'s row, in column order.
    #[must_use]
    pub fn row(&self, pos: Position) -> [Cell; 9] {
        std::array::from_fn(|col| {
            #[expect(clippy::cast_possible_truncation)]
            let col = col as u8;
            self[Position::new(pos.row(), col)]
        })
    }

    /// Returns the 9 cells of `pos`'s column, in row order.
    #[must_use]
    pub fn column(&self, pos: Position) -> [Cell; 9] {
        std::array::from_fn(|row| {
            #[expect(clippy::cast_possible_truncation)]
            let row = row as u8;
            self[Position::new(row, pos.col())]
        })
    }

    /// Returns the 9 cells of `pos`'s 3×3 block, row-major within the block.
    #[must_use]
    pub fn block(&self, pos: Position) -> [Cell; 9] {
        let (block_row, block_col) = pos.block();
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self[Position::new(block_row * 3 + i / 3, block_col * 3 + i % 3)]
        })
    }

    /// Computes the set of digits that may legally be placed at `pos`:
    /// `{1..9}` minus every digit already present in the position's row,
    /// column, and block.
    ///
    /// An empty result means the position is a dead end in the current board
    /// state. The set is recomputed on every call, never cached.
    ///
    /// # Panics
    ///
    /// Panics if the cell at `pos` is already filled. Asking for candidates
    /// of a filled position is a contract violation, not a recoverable
    /// condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Board, Position};
    ///
    /// let board: Board =
    ///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
    ///         .parse()?;
    /// let values: Vec<u8> = board
    ///     .candidates(Position::new(0, 2))
    ///     .iter()
    ///     .map(|d| d.value())
    ///     .collect();
    /// assert_eq!(values, vec![1, 2, 4]);
    /// # Ok::<(), gridlock_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        assert!(
            self[pos].is_empty(),
            "candidates requested for filled cell at {pos}"
        );
        let mut used = DigitSet::EMPTY;
        for cell in self
            .row(pos)
            .into_iter()
            .chain(self.column(pos))
            .chain(self.block(pos))
        {
            if let Cell::Filled(digit) = cell {
                used.insert(digit);
            }
        }
        DigitSet::FULL.difference(used)
    }

    /// Returns the first empty position in row-major scan order, or `None`
    /// if the board is completely filled.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_empty())
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            Display::fmt(cell, f)?;
        }
        Ok(())
    }
}

/// Error parsing a board from its 81-character text form.
///
/// The parser expects exactly 81 characters, each `.` or `1`-`9`. Filtering
/// a raw source down to that alphabet is the reader's job, not the board's;
/// the parser only validates the already-filtered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input does not contain exactly 81 characters.
    #[display("expected 81 grid characters, found {len}")]
    BadLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contains a character outside `{'1'..'9', '.'}`.
    #[display("invalid grid character {ch:?} at offset {offset}")]
    BadCharacter {
        /// The offending character.
        ch: char,
        /// Its character offset in the input.
        offset: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseBoardError::BadLength { len });
        }
        let mut board = Self::empty();
        for (offset, (pos, ch)) in Position::ALL.into_iter().zip(s.chars()).enumerate() {
            board[pos] =
                Cell::from_char(ch).ok_or(ParseBoardError::BadCharacter { ch, offset })?;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use crate::digit::Digit;

    use super::*;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    fn puzzle() -> Board {
        PUZZLE.parse().unwrap()
    }

    #[test]
    fn test_parse_display_round_trip() {
        assert_eq!(puzzle().to_string(), PUZZLE);
    }

    #[test]
    fn test_parse_bad_length() {
        assert_eq!(
            "53..7.".parse::<Board>(),
            Err(ParseBoardError::BadLength { len: 6 })
        );
        let long = ".".repeat(82);
        assert_eq!(
            long.parse::<Board>(),
            Err(ParseBoardError::BadLength { len: 82 })
        );
    }

    #[test]
    fn test_parse_bad_character() {
        let mut text = PUZZLE.to_owned();
        text.replace_range(3..4, "0");
        assert_eq!(
            text.parse::<Board>(),
            Err(ParseBoardError::BadCharacter { ch: '0', offset: 3 })
        );
    }

    #[test]
    fn test_row_accessor() {
        let board = puzzle();
        let chars: String = board
            .row(Position::new(1, 6))
            .into_iter()
            .map(Cell::to_char)
            .collect();
        assert_eq!(chars, "6..195...");
    }

    #[test]
    fn test_column_accessor() {
        let board = puzzle();
        let chars: String = board
            .column(Position::new(3, 0))
            .into_iter()
            .map(Cell::to_char)
            .collect();
        assert_eq!(chars, "56.847...");
    }

    #[test]
    fn test_block_accessor_row_major() {
        let board = puzzle();
        let chars: String = board
            .block(Position::new(0, 1))
            .into_iter()
            .map(Cell::to_char)
            .collect();
        assert_eq!(chars, "53.6...98");

        let chars: String = board
            .block(Position::new(8, 8))
            .into_iter()
            .map(Cell::to_char)
            .collect();
        assert_eq!(chars, "28...5.79");
    }

    #[test]
    fn test_candidates_match_known_values() {
        let board = puzzle();
        let values = |pos| {
            board
                .candidates(pos)
                .iter()
                .map(Digit::value)
                .collect::<Vec<_>>()
        };
        assert_eq!(values(Position::new(0, 2)), vec![1, 2, 4]);
        assert_eq!(values(Position::new(4, 7)), vec![2, 5, 9]);
    }

    #[test]
    fn test_candidates_empty_at_dead_end() {
        // Row holds 1-8 and the column blocks the 9.
        let mut board = Board::empty();
        for (col, digit) in Digit::ALL[..8].iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let col = col as u8 + 1;
            board[Position::new(0, col)] = Cell::Filled(*digit);
        }
        board[Position::new(3, 0)] = Cell::Filled(Digit::D9);
        assert!(board.candidates(Position::new(0, 0)).is_empty());
    }

    #[test]
    #[should_panic(expected = "candidates requested for filled cell at (0, 0)")]
    fn test_candidates_on_filled_cell_panics() {
        let _ = puzzle().candidates(Position::new(0, 0));
    }

    #[test]
    fn test_first_empty_row_major() {
        assert_eq!(puzzle().first_empty(), Some(Position::new(0, 2)));
        assert_eq!(Board::empty().first_empty(), Some(Position::new(0, 0)));

        let full: Board =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
                .parse()
                .unwrap();
        assert_eq!(full.first_empty(), None);
    }

    #[test]
    fn test_counts() {
        assert_eq!(Board::empty().filled_count(), 0);
        assert_eq!(Board::empty().empty_count(), 81);
        assert_eq!(puzzle().filled_count(), 30);
        assert_eq!(puzzle().empty_count(), 51);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn position() -> impl Strategy<Value = Position> {
            (0..9u8, 0..9u8).prop_map(|(row, col)| Position::new(row, col))
        }

        proptest! {
            #[test]
            fn block_same_for_all_positions_in_block(
                pos in position(),
                row_offset in 0..3u8,
                col_offset in 0..3u8,
            ) {
                let board = puzzle();
                let (block_row, block_col) = pos.block();
                let other = Position::new(block_row * 3 + row_offset, block_col * 3 + col_offset);
                prop_assert_eq!(board.block(pos), board.block(other));
            }

            #[test]
            fn candidates_exclude_region_digits(pos in position()) {
                let board = puzzle();
                prop_assume!(board[pos].is_empty());
                let candidates = board.candidates(pos);
                for cell in board
                    .row(pos)
                    .into_iter()
                    .chain(board.column(pos))
                    .chain(board.block(pos))
                {
                    if let Cell::Filled(digit) = cell {
                        prop_assert!(!candidates.contains(digit));
                    }
                }
            }
        }
    }
}
