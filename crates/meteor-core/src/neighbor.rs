//! Outcome of a neighbor lookup.

/// The result of moving from a cell in some direction.
///
/// # Examples
///
/// ```
/// use meteor_core::{Direction, HexBoard, Neighbor};
///
/// let board = HexBoard::METEOR;
/// assert_eq!(board.neighbor(7, Direction::Se), Neighbor::Valid(13));
/// assert!(board.neighbor(4, Direction::E).is_off_board());
/// assert_eq!(board.neighbor(7, Direction::E).cell(), Some(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Neighbor {
    /// The neighbor is on the board at this cell index.
    Valid(usize),
    /// The move leaves the board or would wrap across a row boundary.
    OffBoard,
}

impl Neighbor {
    /// Returns the neighbor cell, or `None` if it is off the board.
    #[must_use]
    pub const fn cell(self) -> Option<usize> {
        match self {
            Self::Valid(cell) => Some(cell),
            Self::OffBoard => None,
        }
    }
}

impl From<Option<usize>> for Neighbor {
    fn from(cell: Option<usize>) -> Self {
        cell.map_or(Self::OffBoard, Self::Valid)
    }
}

impl From<Neighbor> for Option<usize> {
    fn from(neighbor: Neighbor) -> Self {
        neighbor.cell()
    }
}
