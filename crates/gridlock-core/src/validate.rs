//! Board validation: completed-solution checking and given-digit
//! consistency.

use crate::{board::Board, cell::Cell, digit_set::DigitSet, position::Position};

impl Board {
    /// Returns `true` if the board is a correct, complete solution: no
    /// blanks, and every row, column, and 3×3 block contains each digit
    /// exactly once.
    ///
    /// The check stops at the first violation. It never mutates the board
    /// and is safe to call on partially filled boards, which always report
    /// `false` because of their blanks.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Board;
    ///
    /// let solved: Board =
    ///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
    ///         .parse()?;
    /// assert!(solved.is_valid_complete());
    /// assert!(!Board::empty().is_valid_complete());
    /// # Ok::<(), gridlock_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn is_valid_complete(&self) -> bool {
        self.first_empty().is_none() && self.first_conflict().is_none()
    }

    /// Returns `true` if no digit appears twice in any row, column, or
    /// block among the filled cells. Empty cells are ignored, so a partial
    /// board can be consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.first_conflict().is_none()
    }

    /// Scans for the first filled cell whose digit duplicates an earlier
    /// one in the same row, column, or block.
    ///
    /// Rows are scanned first, then columns, then blocks; within each unit
    /// the position of the second occurrence is reported. Returns `None`
    /// for consistent boards.
    #[must_use]
    pub fn first_conflict(&self) -> Option<Position> {
        for i in 0..9 {
            if let Some(pos) = self.unit_conflict((0..9).map(|col| Position::new(i, col))) {
                return Some(pos);
            }
            if let Some(pos) = self.unit_conflict((0..9).map(|row| Position::new(row, i))) {
                return Some(pos);
            }
        }
        for block_row in 0..3 {
            for block_col in 0..3 {
                let positions = (0..9).map(move |i| {
                    Position::new(block_row * 3 + i / 3, block_col * 3 + i % 3)
                });
                if let Some(pos) = self.unit_conflict(positions) {
                    return Some(pos);
                }
            }
        }
        None
    }

    fn unit_conflict(&self, positions: impl IntoIterator<Item = Position>) -> Option<Position> {
        let mut seen = DigitSet::EMPTY;
        for pos in positions {
            if let Cell::Filled(digit) = self[pos]
                && !seen.insert(digit)
            {
                return Some(pos);
            }
        }
        None
    }
}
