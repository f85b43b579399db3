use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::GridError;

/// An integer `(x, y)` address into a grid.
///
/// The type carries no bounds of its own; whether a coordinate holds a value
/// is decided by the grid it is used with.
///
/// # Example
/// ```
/// use gridwalk::Coord;
///
/// let c = Coord::new(2, -1);
/// assert_eq!(c.x, 2);
/// assert_eq!(c.y, -1);
/// assert_eq!(c.to_string(), "(2, -1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coord = Coord::new(0, 0);

    /// Creates a new `Coord`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offsets the coordinate, returning `None` if either axis overflows.
    ///
    /// # Example
    /// ```
    /// use gridwalk::Coord;
    ///
    /// assert_eq!(Coord::new(1, 1).checked_offset(-1, 2), Some(Coord::new(0, 3)));
    /// assert_eq!(Coord::new(i32::MAX, 0).checked_offset(1, 0), None);
    /// ```
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"`, with optional surrounding parentheses and whitespace.
///
/// # Example
/// ```
/// use gridwalk::Coord;
///
/// assert_eq!("1,2".parse::<Coord>().unwrap(), Coord::new(1, 2));
/// assert_eq!("(3, -4)".parse::<Coord>().unwrap(), Coord::new(3, -4));
/// assert!("3".parse::<Coord>().is_err());
/// ```
impl FromStr for Coord {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = parse_pair(s)?;
        Ok(Self::new(x, y))
    }
}

/// Splits `"a,b"` into two integers. Shared by the coordinate and increment parsers.
pub(crate) fn parse_pair(s: &str) -> Result<(i32, i32), GridError> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    let (a, b) = inner
        .split_once(',')
        .ok_or_else(|| GridError::InvalidArgument(format!("expected `x,y`, got `{s}`")))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| GridError::InvalidArgument(format!("`{}` in `{s}`: {e}", part.trim())))
    };
    Ok((parse(a)?, parse(b)?))
}
