//! Cell addressing for the staggered hex board of the meteor puzzle.
//!
//! The board is a grid of hexagonal cells stored as a flat row-major array. Odd
//! rows are drawn half a cell to the east of even rows, so the flat index offset
//! of a diagonal step depends on the parity of the starting row. This crate turns
//! a `(cell, direction)` pair into the neighboring cell, or reports that the step
//! leaves the board.
//!
//! # Overview
//!
//! - [`HexBoard`]: a validated `row_width × rows` board shape with the neighbor
//!   operations ([`HexBoard::neighbor`], [`HexBoard::neighbors`], [`HexBoard::walk`]).
//! - [`Direction`]: the twelve neighbor directions plus the identity
//!   [`Direction::Pivot`].
//! - [`Neighbor`]: either a valid cell index or [`Neighbor::OffBoard`].
//! - [`DirectionSet`]: a bit set of directions.
//! - [`Position`] and [`RowParity`]: the row/column view of a cell.
//!
//! Everything here is a pure function of plain `Copy` values, so it can be called
//! from any number of threads without synchronization.
//!
//! # Offsets
//!
//! With `w = row_width`, the flat offsets are:
//!
//! | Direction | even row | odd row |
//! |-----------|----------|---------|
//! | E         | `+1`     | `+1`    |
//! | ESE       | `w + 1`  | `w + 2` |
//! | SE        | `w`      | `w + 1` |
//! | S         | `2w`     | `2w`    |
//! | SW        | `w - 1`  | `w`     |
//! | WSW       | `w - 2`  | `w - 1` |
//! | W         | `-1`     | `-1`    |
//! | WNW       | `-w - 2` | `-w - 1`|
//! | NW        | `-w - 1` | `-w`    |
//! | N         | `-2w`    | `-2w`   |
//! | NE        | `-w`     | `-w + 1`|
//! | ENE       | `-w + 1` | `-w + 2`|
//!
//! An offset is only applied when the resulting column stays within the row and
//! the resulting row stays on the board.
//!
//! # Examples
//!
//! ```
//! use meteor_core::{Direction, HexBoard, Neighbor};
//!
//! let board = HexBoard::METEOR;
//!
//! // does an L-shaped piece anchored at cell 0 fit?
//! let path = [Direction::E, Direction::E, Direction::Se];
//! assert_eq!(board.walk(0, path), Neighbor::Valid(7));
//!
//! // anchored at cell 3 it runs off the east edge
//! assert_eq!(board.walk(3, path), Neighbor::OffBoard);
//! ```

pub use self::{
    board::HexBoard,
    direction::{Direction, ParseDirectionError},
    direction_set::DirectionSet,
    error::{BoardError, ConfigurationIssue},
    neighbor::Neighbor,
    position::{Position, RowParity},
};

mod board;
mod direction;
mod direction_set;
mod error;
mod neighbor;
mod position;

/// Returns the neighbor of `cell` in `direction` on a board `row_width` cells wide.
///
/// This is the width-only form of [`HexBoard::neighbor`] for callers that do not
/// track the board height. A step that leaves the column range or goes above the
/// top row is [`Neighbor::OffBoard`]; there is no bottom edge, so steps downward
/// are never rejected.
///
/// # Errors
///
/// Returns [`BoardError::InvalidConfiguration`] if `row_width` is zero.
///
/// # Examples
///
/// ```
/// use meteor_core::{Direction, Neighbor, neighbor};
///
/// assert_eq!(neighbor(7, Direction::Se, 5)?, Neighbor::Valid(13));
/// assert_eq!(neighbor(4, Direction::E, 5)?, Neighbor::OffBoard);
/// assert_eq!(neighbor(0, Direction::N, 5)?, Neighbor::OffBoard);
/// assert!(neighbor(0, Direction::E, 0).is_err());
/// # Ok::<(), meteor_core::BoardError>(())
/// ```
pub fn neighbor(cell: usize, direction: Direction, row_width: usize) -> Result<Neighbor, BoardError> {
    if row_width == 0 {
        return Err(ConfigurationIssue::ZeroRowWidth.into());
    }
    let pos = Position::new(cell / row_width, cell % row_width);
    let neighbor = pos
        .step(direction, row_width)
        .and_then(|pos| pos.row().checked_mul(row_width)?.checked_add(pos.column()));
    Ok(neighbor.into())
}
