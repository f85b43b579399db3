//! This crate provides two-dimensional grids with pattern-directed lazy traversal.
//!
//! A grid maps integer [`Coord`]s to values. A [`Pattern`] is a pure step rule
//! from one coordinate to the next; walking a grid along a pattern yields a
//! [`Sequence`], a lazy cursor that can peek ahead without consuming and can
//! report where each value came from.
//!
//! Concrete grids implement [`GridLike`] by supplying lookup, existence and
//! their canonical full-traversal order. Everything else is derived from
//! those: full traversal, pattern walks, location-paired walks and the nested
//! [`runs`](GridLike::runs) traversal.
//!
//! # Example
//! ```
//! use gridwalk::{make_grid, Coord, Direction, GridLike};
//!
//! let grid = make_grid![[10, 20, 30], [40, 50, 60], [70, 80, 90]];
//!
//! let up: Vec<i32> = grid.walk(Coord::new(1, 1), Direction::North).copied().collect();
//! assert_eq!(up, vec![50, 20]);
//!
//! let diagonal: Vec<Coord> = grid
//!     .locatable_walk(Coord::new(0, 0), Direction::SouthEast)
//!     .map(|cell| cell.location)
//!     .collect();
//! assert_eq!(diagonal, vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]);
//! ```

pub mod coord;
pub mod grid;
pub mod grid_like;
pub mod maze;
pub mod pattern;
pub mod probe;
pub mod runs;
pub mod sequence;

use smallvec::SmallVec;
use thiserror::Error;

pub use coord::Coord;
pub use grid::{JaggedGrid, ParseConfig, RowMajor};
pub use grid_like::GridLike;
pub use pattern::{Direction, Increment, Pattern};
pub use probe::Probe;
pub use runs::{LocatableRuns, Runs};
pub use sequence::{Cursor, Empty, Locatable, Located, Sequence};

// Enough inline capacity for the inconsistencies of a typical hand-drawn maze.
const DEFAULT_SMALLVEC_SIZE: usize = 32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Sequence is exhausted")]
    Exhausted,

    #[error("Coordinate not found at {coord}")]
    CoordNotFound { coord: Coord },

    #[error("{sequence} broke the sequence contract: {detail}")]
    ContractViolation {
        sequence: &'static str,
        detail: &'static str,
    },

    #[error("Failed to parse grid at line {line}, column {column}: {reason}")]
    Parse {
        line: usize,
        column: usize,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// Creates a [`JaggedGrid`] from a list of rows.
///
/// Rows may have different lengths, including none at all. The rows are moved
/// into the grid without copying, as with [`JaggedGrid::from_rows`].
///
/// # Examples
///
/// ```rust
/// use gridwalk::{make_grid, Coord, GridLike};
///
/// let grid = make_grid![
///     [1, 2, 3],
///     [],
///     [4],
/// ];
///
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid.row_count(), 3);
/// assert_eq!(grid.get(Coord::new(0, 2)), Ok(&4));
/// ```
///
/// # See Also
///
/// - [`JaggedGrid::copy_from`]: builds a grid from a defensive copy of borrowed rows.
#[macro_export]
macro_rules! make_grid {
    ($([$($value:expr),* $(,)?]),* $(,)?) => {
        $crate::JaggedGrid::from_rows(vec![$(vec![$($value),*]),*])
    };
}
