//! Neighbor directions on the staggered hex board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::RowParity;

/// One of the twelve neighbor directions of a board cell, or the identity [`Direction::Pivot`].
///
/// Directions are not fixed `(x, y)` vectors. Every direction that changes the row
/// by an odd amount has a column delta that depends on the [`RowParity`] of the
/// starting cell, because odd rows are drawn half a cell to the right of even rows.
///
/// # Examples
///
/// ```
/// use meteor_core::{Direction, RowParity};
///
/// assert_eq!(Direction::Se.opposite(), Direction::Nw);
/// assert_eq!(Direction::Se.column_delta(RowParity::Even), 0);
/// assert_eq!(Direction::Se.column_delta(RowParity::Odd), 1);
///
/// let dir: Direction = "wnw".parse().unwrap();
/// assert_eq!(dir, Direction::Wnw);
/// assert_eq!(dir.to_string(), "WNW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    /// East, same row.
    E = 0,
    /// East-south-east, one row down.
    Ese = 1,
    /// South-east, one row down.
    Se = 2,
    /// South, two rows down.
    S = 3,
    /// South-west, one row down.
    Sw = 4,
    /// West-south-west, one row down.
    Wsw = 5,
    /// West, same row.
    W = 6,
    /// West-north-west, one row up.
    Wnw = 7,
    /// North-west, one row up.
    Nw = 8,
    /// North, two rows up.
    N = 9,
    /// North-east, one row up.
    Ne = 10,
    /// East-north-east, one row up.
    Ene = 11,
    /// No movement.
    Pivot = 12,
}

impl Direction {
    /// All twelve moving directions, clockwise starting at [`Direction::E`].
    ///
    /// [`Direction::Pivot`] is not included.
    pub const ALL: [Self; 12] = [
        Self::E,
        Self::Ese,
        Self::Se,
        Self::S,
        Self::Sw,
        Self::Wsw,
        Self::W,
        Self::Wnw,
        Self::Nw,
        Self::N,
        Self::Ne,
        Self::Ene,
    ];

    /// Returns the direction pointing the other way.
    ///
    /// [`Direction::Pivot`] is its own opposite.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteor_core::Direction;
    ///
    /// for dir in Direction::ALL {
    ///     assert_eq!(dir.opposite().opposite(), dir);
    /// }
    /// assert_eq!(Direction::Ene.opposite(), Direction::Wsw);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Pivot => Self::Pivot,
            // clockwise order puts the opposite six steps away
            dir => Self::ALL[(dir as usize + 6) % 12],
        }
    }

    /// Returns the number of rows this direction moves (negative is up).
    #[must_use]
    pub const fn row_delta(self) -> isize {
        match self {
            Self::E | Self::W | Self::Pivot => 0,
            Self::Ese | Self::Se | Self::Sw | Self::Wsw => 1,
            Self::Wnw | Self::Nw | Self::Ne | Self::Ene => -1,
            Self::S => 2,
            Self::N => -2,
        }
    }

    /// Returns the number of columns this direction moves from a row of the given parity
    /// (negative is west).
    ///
    /// Directions with an odd [`row_delta`](Self::row_delta) move one column further
    /// east from an odd row than from an even row.
    #[must_use]
    pub const fn column_delta(self, parity: RowParity) -> isize {
        let even = match self {
            Self::N | Self::S | Self::Se | Self::Ne | Self::Pivot => 0,
            Self::E | Self::Ese | Self::Ene => 1,
            Self::W | Self::Sw | Self::Nw => -1,
            Self::Wsw | Self::Wnw => -2,
        };
        match parity {
            RowParity::Odd if self.is_parity_dependent() => even + 1,
            _ => even,
        }
    }

    /// Returns `true` if the column delta of this direction depends on row parity.
    ///
    /// These are the eight directions that cross into a row of the other parity.
    #[must_use]
    pub const fn is_parity_dependent(self) -> bool {
        self.row_delta() % 2 != 0
    }

    /// Returns the compass abbreviation of this direction (`"PIVOT"` for the identity).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::Ese => "ESE",
            Self::Se => "SE",
            Self::S => "S",
            Self::Sw => "SW",
            Self::Wsw => "WSW",
            Self::W => "W",
            Self::Wnw => "WNW",
            Self::Nw => "NW",
            Self::N => "N",
            Self::Ne => "NE",
            Self::Ene => "ENE",
            Self::Pivot => "PIVOT",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction: {name:?}")]
pub struct ParseDirectionError {
    name: String,
}

impl ParseDirectionError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses a compass abbreviation, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .chain([Self::Pivot])
            .find(|dir| dir.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError { name: s.to_owned() })
    }
}
