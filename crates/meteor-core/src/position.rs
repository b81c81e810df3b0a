//! Row/column view of a board cell.

use crate::Direction;

/// Whether a cell lies in an even or an odd row.
///
/// Odd rows are drawn shifted half a cell to the east, so a diagonal step from an
/// odd row lands one column further east than the same step from an even row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum RowParity {
    /// Row 0, 2, 4, ...
    Even,
    /// Row 1, 3, 5, ...
    Odd,
}

impl RowParity {
    /// Returns the parity of the given row number.
    #[must_use]
    pub const fn of_row(row: usize) -> Self {
        if row % 2 == 0 { Self::Even } else { Self::Odd }
    }

    /// Returns the other parity.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }
}

/// A `(row, column)` coordinate on a hex board.
///
/// The flat cell index of a position is `row * row_width + column`; see
/// [`HexBoard::cell_at`](crate::HexBoard::cell_at) and
/// [`HexBoard::position`](crate::HexBoard::position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the row (0 is the top row).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0 is the west edge).
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Returns the parity of this position's row.
    #[must_use]
    pub const fn parity(self) -> RowParity {
        RowParity::of_row(self.row)
    }

    /// Moves one step in `direction` on a board `row_width` columns wide.
    ///
    /// Returns `None` if the step leaves the column range `0..row_width` or goes
    /// above row 0. The board height is not known here, so the step is never
    /// rejected for going below the last row.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteor_core::{Direction, Position};
    ///
    /// let pos = Position::new(1, 2);
    /// assert_eq!(pos.step(Direction::Se, 5), Some(Position::new(2, 3)));
    /// assert_eq!(pos.step(Direction::N, 5), None);
    /// assert_eq!(Position::new(0, 4).step(Direction::E, 5), None);
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction, row_width: usize) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(direction.row_delta()) else {
            return None;
        };
        let Some(column) = self
            .column
            .checked_add_signed(direction.column_delta(self.parity()))
        else {
            return None;
        };
        if column >= row_width {
            return None;
        }
        Some(Self { row, column })
    }
}
