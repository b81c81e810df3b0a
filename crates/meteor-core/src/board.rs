//! Board shapes and neighbor lookup.

use std::{
    fmt::{self, Display},
    ops::Range,
};

use crate::{
    BoardError, ConfigurationIssue, Direction, DirectionSet, Neighbor, Position, RowParity,
};

/// The shape of a staggered hex board: `rows` rows of `row_width` cells each.
///
/// Cells are addressed by a flat row-major index, `row * row_width + column`.
/// Odd rows are drawn half a cell to the east, so the offset of a diagonal step
/// depends on the parity of the row it starts from. All offsets are derived from
/// `row_width`; see [`HexBoard::offset`].
///
/// A `HexBoard` holds no cell contents. It is a small `Copy` value that a solver
/// keeps next to its own storage and queries from its inner loop.
///
/// # Examples
///
/// ```
/// use meteor_core::{Direction, HexBoard, Neighbor};
///
/// let board = HexBoard::new(5, 10)?;
/// assert_eq!(board.cell_count(), 50);
///
/// // cell 7 is row 1, column 2
/// assert_eq!(board.neighbor(7, Direction::Se), Neighbor::Valid(13));
/// assert_eq!(board.neighbor(7, Direction::Nw), Neighbor::Valid(2));
///
/// // stepping east from the end of a row does not wrap to the next row
/// assert_eq!(board.neighbor(4, Direction::E), Neighbor::OffBoard);
/// # Ok::<(), meteor_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexBoard {
    row_width: usize,
    rows: usize,
}

impl HexBoard {
    /// The meteor puzzle board: 10 rows of 5 cells.
    pub const METEOR: Self = Self {
        row_width: 5,
        rows: 10,
    };

    /// Creates a board of `rows` rows, each `row_width` cells wide.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] if `row_width` or `rows` is zero,
    /// or if the board is too large for its offsets to fit in an `isize`.
    pub fn new(row_width: usize, rows: usize) -> Result<Self, BoardError> {
        let issue = if row_width == 0 {
            Some(ConfigurationIssue::ZeroRowWidth)
        } else if rows == 0 {
            Some(ConfigurationIssue::ZeroRows)
        } else if !Self::fits_offsets(row_width, rows) {
            Some(ConfigurationIssue::TooLarge { row_width, rows })
        } else {
            None
        };
        if let Some(issue) = issue {
            log::warn!("rejected {row_width}x{rows} hex board: {issue}");
            return Err(issue.into());
        }
        log::debug!("created {row_width}x{rows} hex board");
        Ok(Self { row_width, rows })
    }

    // N and S span two rows, so even a single-row board needs room for them.
    fn fits_offsets(row_width: usize, rows: usize) -> bool {
        row_width
            .checked_mul(rows.max(2))
            .is_some_and(|len| isize::try_from(len).is_ok())
    }

    /// Returns the number of cells in each row.
    #[must_use]
    pub const fn row_width(&self) -> usize {
        self.row_width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.row_width * self.rows
    }

    /// Returns `true` if `cell` is a valid index on this board.
    #[must_use]
    pub const fn contains(&self, cell: usize) -> bool {
        cell < self.cell_count()
    }

    /// Returns the range of all cell indices.
    #[must_use]
    pub const fn cells(&self) -> Range<usize> {
        0..self.cell_count()
    }

    /// Returns the row/column position of `cell`, or `None` if it is off the board.
    #[must_use]
    pub const fn position(&self, cell: usize) -> Option<Position> {
        if !self.contains(cell) {
            return None;
        }
        Some(Position::new(cell / self.row_width, cell % self.row_width))
    }

    /// Returns the cell index of `pos`, or `None` if it is off the board.
    #[must_use]
    pub const fn cell_at(&self, pos: Position) -> Option<usize> {
        if pos.row() >= self.rows || pos.column() >= self.row_width {
            return None;
        }
        Some(pos.row() * self.row_width + pos.column())
    }

    /// Returns the parity of the row containing `cell`.
    ///
    /// This is `(cell / row_width) % 2` and is defined for any index, on the
    /// board or not.
    #[must_use]
    pub const fn parity(&self, cell: usize) -> RowParity {
        RowParity::of_row(cell / self.row_width)
    }

    /// Returns the flat index offset of a step in `direction` from a row of the given parity.
    ///
    /// The offset is `row_delta * row_width + column_delta`. It says nothing about
    /// whether the step stays on the board; use [`neighbor`](Self::neighbor) for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteor_core::{Direction, HexBoard, RowParity};
    ///
    /// let board = HexBoard::METEOR;
    /// assert_eq!(board.offset(Direction::Ese, RowParity::Odd), 7);
    /// assert_eq!(board.offset(Direction::Ese, RowParity::Even), 6);
    /// assert_eq!(board.offset(Direction::N, RowParity::Even), -10);
    /// ```
    #[must_use]
    pub const fn offset(&self, direction: Direction, parity: RowParity) -> isize {
        // `new` checks that two rows of cells fit in `isize`.
        #[expect(clippy::cast_possible_wrap)]
        let row_width = self.row_width as isize;
        direction.row_delta() * row_width + direction.column_delta(parity)
    }

    /// Returns the neighbor of `cell` in `direction`.
    ///
    /// The result is [`Neighbor::OffBoard`] if `cell` is not on the board, if the
    /// step would leave the column range (no wrapping into the next or previous
    /// row), or if it would leave the row range. [`Direction::Pivot`] returns
    /// `cell` itself for every cell on the board.
    #[must_use]
    #[inline]
    pub fn neighbor(&self, cell: usize, direction: Direction) -> Neighbor {
        self.position(cell)
            .and_then(|pos| pos.step(direction, self.row_width))
            .and_then(|pos| self.cell_at(pos))
            .into()
    }

    /// Returns every on-board neighbor of `cell` with the direction that reaches it.
    ///
    /// Neighbors are yielded in [`Direction::ALL`] order. An off-board `cell` has
    /// no neighbors.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteor_core::{Direction, HexBoard};
    ///
    /// let corner = HexBoard::METEOR.neighbors(0).collect::<Vec<_>>();
    /// assert_eq!(
    ///     corner,
    ///     [
    ///         (Direction::E, 1),
    ///         (Direction::Ese, 6),
    ///         (Direction::Se, 5),
    ///         (Direction::S, 10),
    ///     ]
    /// );
    /// ```
    pub fn neighbors(&self, cell: usize) -> impl Iterator<Item = (Direction, usize)> + use<> {
        let board = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| board.neighbor(cell, dir).cell().map(|n| (dir, n)))
    }

    /// Returns the set of directions whose step from `cell` stays on the board.
    #[must_use]
    pub fn open_directions(&self, cell: usize) -> DirectionSet {
        self.neighbors(cell).map(|(dir, _)| dir).collect()
    }

    /// Follows `path` step by step from `cell`.
    ///
    /// Returns [`Neighbor::OffBoard`] as soon as one step leaves the board, even if a
    /// later step would come back. An empty path returns `cell` if it is on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteor_core::{Direction, HexBoard, Neighbor};
    ///
    /// let board = HexBoard::METEOR;
    /// assert_eq!(
    ///     board.walk(0, [Direction::E, Direction::E, Direction::Se]),
    ///     Neighbor::Valid(7),
    /// );
    /// assert_eq!(board.walk(0, [Direction::W, Direction::E]), Neighbor::OffBoard);
    /// ```
    #[must_use]
    pub fn walk<I>(&self, cell: usize, path: I) -> Neighbor
    where
        I: IntoIterator<Item = Direction>,
    {
        path.into_iter()
            .try_fold(cell, |cell, dir| self.neighbor(cell, dir).cell())
            .filter(|&cell| self.contains(cell))
            .into()
    }
}

impl Display for HexBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.row_width, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Offsets of the meteor board as `(direction, odd row, even row)`.
    const METEOR_OFFSETS: [(Direction, isize, isize); 13] = [
        (Direction::E, 1, 1),
        (Direction::Ese, 7, 6),
        (Direction::Se, 6, 5),
        (Direction::S, 10, 10),
        (Direction::Sw, 5, 4),
        (Direction::Wsw, 4, 3),
        (Direction::W, -1, -1),
        (Direction::Wnw, -6, -7),
        (Direction::Nw, -5, -6),
        (Direction::N, -10, -10),
        (Direction::Ne, -4, -5),
        (Direction::Ene, -3, -4),
        (Direction::Pivot, 0, 0),
    ];

    #[test]
    fn test_meteor_offsets() {
        let board = HexBoard::METEOR;
        for (dir, odd, even) in METEOR_OFFSETS {
            assert_eq!(board.offset(dir, RowParity::Odd), odd, "{dir} odd");
            assert_eq!(board.offset(dir, RowParity::Even), even, "{dir} even");
        }
    }

    #[test]
    fn test_offsets_scale_with_width() {
        let board = HexBoard::new(7, 4).unwrap();
        assert_eq!(board.offset(Direction::S, RowParity::Even), 14);
        assert_eq!(board.offset(Direction::Ese, RowParity::Odd), 9);
        assert_eq!(board.offset(Direction::Ene, RowParity::Odd), -5);
        assert_eq!(board.offset(Direction::Wnw, RowParity::Even), -9);
    }

    #[test]
    fn test_interior_neighbors_match_offsets() {
        let board = HexBoard::METEOR;
        // column 2 of rows 2 and 3 has every neighbor on the board
        for cell in [12, 17] {
            let parity = board.parity(cell);
            for dir in Direction::ALL {
                let expected = cell.checked_add_signed(board.offset(dir, parity)).unwrap();
                assert_eq!(board.neighbor(cell, dir), Neighbor::Valid(expected), "{cell} {dir}");
            }
            assert_eq!(board.open_directions(cell), DirectionSet::all());
        }
    }

    #[test]
    fn test_worked_example() {
        let board = HexBoard::METEOR;
        assert_eq!(board.parity(7), RowParity::Odd);
        assert_eq!(board.neighbor(7, Direction::Se), Neighbor::Valid(13));
        assert_eq!(board.neighbor(7, Direction::Nw), Neighbor::Valid(2));
        assert_eq!(board.neighbor(2, Direction::Se), Neighbor::Valid(7));
    }

    #[test]
    fn test_parity_changes_se_offset_by_one() {
        let board = HexBoard::METEOR;
        let from_odd = board.neighbor(5, Direction::Se).cell().unwrap() - 5;
        let from_even = board.neighbor(0, Direction::Se).cell().unwrap();
        assert_eq!(from_odd, from_even + 1);
    }

    #[test]
    fn test_two_row_boundaries() {
        let board = HexBoard::new(5, 2).unwrap();
        assert_eq!(board.neighbor(4, Direction::E), Neighbor::OffBoard);
        assert_eq!(board.neighbor(5, Direction::W), Neighbor::OffBoard);
        assert_eq!(board.neighbor(0, Direction::N), Neighbor::OffBoard);
        assert_eq!(board.neighbor(0, Direction::S), Neighbor::OffBoard);
        assert_eq!(board.neighbor(9, Direction::Se), Neighbor::OffBoard);
        assert_eq!(board.neighbor(3, Direction::Ese), Neighbor::Valid(9));
        assert_eq!(board.neighbor(8, Direction::Ene), Neighbor::OffBoard);
        assert_eq!(board.neighbor(7, Direction::Ene), Neighbor::Valid(4));
    }

    #[test]
    fn test_off_board_input() {
        let board = HexBoard::new(5, 2).unwrap();
        assert_eq!(board.neighbor(10, Direction::Pivot), Neighbor::OffBoard);
        assert_eq!(board.neighbor(10, Direction::N), Neighbor::OffBoard);
        assert_eq!(board.neighbors(10).count(), 0);
        assert_eq!(board.walk(10, []), Neighbor::OffBoard);
    }

    #[test]
    fn test_pivot_is_identity() {
        let board = HexBoard::new(3, 3).unwrap();
        for cell in board.cells() {
            assert_eq!(board.neighbor(cell, Direction::Pivot), Neighbor::Valid(cell));
        }
    }

    #[test]
    fn test_corner_open_directions() {
        let board = HexBoard::METEOR;
        assert_eq!(
            board.open_directions(0),
            DirectionSet::E | DirectionSet::ESE | DirectionSet::SE | DirectionSet::S
        );
        // bottom-right cell, row 9 is odd and shifted east
        assert_eq!(
            board.open_directions(49),
            DirectionSet::W | DirectionSet::WNW | DirectionSet::NW | DirectionSet::N
        );
    }

    #[test]
    fn test_walk_stops_at_first_off_board_step() {
        let board = HexBoard::METEOR;
        assert_eq!(board.walk(4, [Direction::E, Direction::W]), Neighbor::OffBoard);
        assert_eq!(board.walk(4, [Direction::W, Direction::E]), Neighbor::Valid(4));
        assert_eq!(board.walk(0, []), Neighbor::Valid(0));
        assert_eq!(
            board.walk(0, [Direction::S, Direction::S, Direction::Ene]),
            Neighbor::Valid(16)
        );
    }

    #[test]
    fn test_single_column_board() {
        let board = HexBoard::new(1, 4).unwrap();
        assert_eq!(board.neighbor(0, Direction::S), Neighbor::Valid(2));
        assert_eq!(board.neighbor(0, Direction::Se), Neighbor::Valid(1));
        assert_eq!(board.neighbor(1, Direction::Sw), Neighbor::Valid(2));
        assert_eq!(board.neighbor(1, Direction::Se), Neighbor::OffBoard);
        assert_eq!(board.neighbor(0, Direction::E), Neighbor::OffBoard);
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        assert_eq!(
            HexBoard::new(0, 10),
            Err(BoardError::from(ConfigurationIssue::ZeroRowWidth))
        );
        assert_eq!(
            HexBoard::new(5, 0),
            Err(BoardError::from(ConfigurationIssue::ZeroRows))
        );
        assert_eq!(
            HexBoard::new(usize::MAX, 1),
            Err(BoardError::from(ConfigurationIssue::TooLarge {
                row_width: usize::MAX,
                rows: 1,
            }))
        );
        assert_eq!(HexBoard::new(5, 10), Ok(HexBoard::METEOR));
    }

    #[test]
    fn test_position_round_trip_and_display() {
        let board = HexBoard::METEOR;
        assert_eq!(board.position(7), Some(Position::new(1, 2)));
        assert_eq!(board.cell_at(Position::new(1, 2)), Some(7));
        assert_eq!(board.position(50), None);
        assert_eq!(board.cell_at(Position::new(0, 5)), None);
        assert_eq!(board.cell_at(Position::new(10, 0)), None);
        assert_eq!(board.to_string(), "5x10");
    }
}
