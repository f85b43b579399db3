//! Step rules for walking a grid.
//!
//! A [`Pattern`] maps the current coordinate to the next one to visit, or to
//! `None` to end the walk. Patterns never look at a grid: whether the produced
//! coordinate holds a value is decided by whoever drives the walk.

use std::fmt;
use std::str::FromStr;

use crate::coord::parse_pair;
use crate::{Coord, GridError};

/// A pure, total step function from a coordinate to its successor.
///
/// Implementations must be deterministic and side-effect free: the result
/// depends on `current` alone.
///
/// # Example
/// ```
/// use gridwalk::{Coord, Direction, Pattern};
///
/// assert_eq!(Direction::North.step(Coord::new(1, 1)), Some(Coord::new(1, 0)));
/// ```
pub trait Pattern {
    /// Returns the coordinate to visit after `current`, or `None` to stop.
    fn step(&self, current: Coord) -> Option<Coord>;
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn step(&self, current: Coord) -> Option<Coord> {
        (**self).step(current)
    }
}

impl<P: Pattern + ?Sized> Pattern for Box<P> {
    fn step(&self, current: Coord) -> Option<Coord> {
        (**self).step(current)
    }
}

/// The eight unit steps. `y` grows southwards, so north is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Every direction, cardinals first.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// The four cardinal directions, clockwise from north.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The fixed increment this direction applies.
    pub const fn offset(self) -> Increment {
        let (dx, dy) = match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        };
        Increment::new(dx, dy)
    }

    /// The direction pointing the other way.
    ///
    /// # Example
    /// ```
    /// use gridwalk::Direction;
    ///
    /// assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
    /// ```
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::NorthEast => "north-east",
            Direction::NorthWest => "north-west",
            Direction::SouthEast => "south-east",
            Direction::SouthWest => "south-west",
        }
    }
}

impl Pattern for Direction {
    fn step(&self, current: Coord) -> Option<Coord> {
        self.offset().step(current)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts full names (`north-east`, `north_east`, `northeast`) and
/// abbreviations (`ne`), case-insensitively.
impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let direction = match key.as_str() {
            "n" | "north" => Direction::North,
            "s" | "south" => Direction::South,
            "e" | "east" => Direction::East,
            "w" | "west" => Direction::West,
            "ne" | "northeast" => Direction::NorthEast,
            "nw" | "northwest" => Direction::NorthWest,
            "se" | "southeast" => Direction::SouthEast,
            "sw" | "southwest" => Direction::SouthWest,
            _ => {
                return Err(GridError::InvalidArgument(format!(
                    "unknown direction `{s}`"
                )))
            }
        };
        Ok(direction)
    }
}

/// Steps by an arbitrary `(dx, dy)` on every call.
///
/// # Example
/// ```
/// use gridwalk::{Coord, Increment, Pattern};
///
/// let knight = Increment::new(2, 1);
/// assert_eq!(knight.step(Coord::new(0, 0)), Some(Coord::new(2, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Increment {
    pub dx: i32,
    pub dy: i32,
}

impl Increment {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Pattern for Increment {
    fn step(&self, current: Coord) -> Option<Coord> {
        current.checked_offset(self.dx, self.dy)
    }
}

impl From<Direction> for Increment {
    fn from(direction: Direction) -> Self {
        direction.offset()
    }
}

/// Parses `"dx,dy"`.
impl FromStr for Increment {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dx, dy) = parse_pair(s)?;
        Ok(Self::new(dx, dy))
    }
}

/// A pattern backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F> Pattern for FromFn<F>
where
    F: Fn(Coord) -> Option<Coord>,
{
    fn step(&self, current: Coord) -> Option<Coord> {
        (self.0)(current)
    }
}

/// Wraps a closure as a [`Pattern`]. The closure must be pure.
///
/// # Example
/// ```
/// use gridwalk::{pattern, Coord, Pattern};
///
/// // Walk east, but stop at column 3.
/// let bounded = pattern::from_fn(|c: Coord| (c.x < 3).then(|| Coord::new(c.x + 1, c.y)));
/// assert_eq!(bounded.step(Coord::new(2, 0)), Some(Coord::new(3, 0)));
/// assert_eq!(bounded.step(Coord::new(3, 0)), None);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(Coord) -> Option<Coord>,
{
    FromFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(Direction::North, (0, -1))]
    #[test_case(Direction::South, (0, 1))]
    #[test_case(Direction::East, (1, 0))]
    #[test_case(Direction::West, (-1, 0))]
    #[test_case(Direction::NorthEast, (1, -1))]
    #[test_case(Direction::NorthWest, (-1, -1))]
    #[test_case(Direction::SouthEast, (1, 1))]
    #[test_case(Direction::SouthWest, (-1, 1))]
    fn direction_steps_by_unit(direction: Direction, expected: (i32, i32)) {
        assert_eq!(direction.step(Coord::ORIGIN), Some(expected.into()));
    }

    #[test_case("n", Direction::North)]
    #[test_case("South", Direction::South)]
    #[test_case("north-east", Direction::NorthEast)]
    #[test_case("SOUTH_WEST", Direction::SouthWest)]
    #[test_case("nw", Direction::NorthWest)]
    fn parses_directions(input: &str, expected: Direction) {
        assert_eq!(input.parse::<Direction>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }

    #[test]
    fn borrowed_and_boxed_patterns_delegate() {
        let boxed: Box<dyn Pattern> = Box::new(Increment::new(2, 3));
        let borrowed: &dyn Pattern = &Direction::West;
        assert_eq!(boxed.step(Coord::ORIGIN), Some(Coord::new(2, 3)));
        assert_eq!(borrowed.step(Coord::ORIGIN), Some(Coord::new(-1, 0)));
    }

    proptest! {
        #[test]
        fn opposite_directions_cancel(x in -1000..1000i32, y in -1000..1000i32, i in 0..8usize) {
            let direction = Direction::ALL[i];
            let start = Coord::new(x, y);
            let there = direction.step(start).unwrap();
            prop_assert_eq!(direction.opposite().step(there), Some(start));
        }

        #[test]
        fn increment_is_pure(x in any::<i32>(), y in any::<i32>(), dx in -5..5i32, dy in -5..5i32) {
            let pattern = Increment::new(dx, dy);
            let start = Coord::new(x, y);
            prop_assert_eq!(pattern.step(start), pattern.step(start));
            prop_assert_eq!(pattern.step(start), start.checked_offset(dx, dy));
        }
    }
}
