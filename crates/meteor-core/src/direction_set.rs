//! Sets of moving directions.

use crate::Direction;

bitflags::bitflags! {
    /// A set of moving directions, one bit per entry of [`Direction::ALL`].
    ///
    /// [`HexBoard::open_directions`](crate::HexBoard::open_directions) uses this to
    /// report which steps stay on the board from a cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteor_core::{Direction, DirectionSet};
    ///
    /// let set = DirectionSet::from(Direction::E) | DirectionSet::S;
    /// assert!(set.contains_direction(Direction::S));
    /// assert_eq!(set.directions().collect::<Vec<_>>(), [Direction::E, Direction::S]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u16 {
        /// [`Direction::E`].
        const E = 1 << 0;
        /// [`Direction::Ese`].
        const ESE = 1 << 1;
        /// [`Direction::Se`].
        const SE = 1 << 2;
        /// [`Direction::S`].
        const S = 1 << 3;
        /// [`Direction::Sw`].
        const SW = 1 << 4;
        /// [`Direction::Wsw`].
        const WSW = 1 << 5;
        /// [`Direction::W`].
        const W = 1 << 6;
        /// [`Direction::Wnw`].
        const WNW = 1 << 7;
        /// [`Direction::Nw`].
        const NW = 1 << 8;
        /// [`Direction::N`].
        const N = 1 << 9;
        /// [`Direction::Ne`].
        const NE = 1 << 10;
        /// [`Direction::Ene`].
        const ENE = 1 << 11;
    }
}

impl DirectionSet {
    /// Returns the single-direction set for `direction`.
    ///
    /// [`Direction::Pivot`] maps to the empty set.
    #[must_use]
    pub const fn of(direction: Direction) -> Self {
        match direction {
            Direction::Pivot => Self::empty(),
            dir => Self::from_bits_retain(1 << dir as u16),
        }
    }

    /// Returns `true` if `direction` is in the set.
    ///
    /// [`Direction::Pivot`] is never contained.
    #[must_use]
    pub const fn contains_direction(self, direction: Direction) -> bool {
        !matches!(direction, Direction::Pivot) && self.contains(Self::of(direction))
    }

    /// Returns the directions in the set, in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.contains_direction(dir))
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self::of(direction)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, dir| set | Self::of(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_follow_direction_order() {
        for (i, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(DirectionSet::of(dir).bits(), 1 << i);
        }
        assert_eq!(DirectionSet::of(Direction::Ene), DirectionSet::ENE);
        assert_eq!(DirectionSet::of(Direction::Pivot), DirectionSet::empty());
    }

    #[test]
    fn test_collect_and_iterate() {
        let set = [Direction::N, Direction::Pivot, Direction::E, Direction::N]
            .into_iter()
            .collect::<DirectionSet>();
        assert_eq!(set, DirectionSet::N | DirectionSet::E);
        assert_eq!(
            set.directions().collect::<Vec<_>>(),
            [Direction::E, Direction::N]
        );
        assert!(!set.contains_direction(Direction::Pivot));
        assert_eq!(DirectionSet::all().directions().count(), 12);
    }
}
