use crate::probe::Probe;
use crate::runs::{LocatableRuns, Runs};
use crate::sequence::{Cursor, Located};
use crate::{Coord, GridError, Pattern};

/// A trait for grids addressable by [`Coord`].
///
/// Implementors supply lookup, existence and their canonical full-traversal
/// order. Every other traversal is derived from those in terms of
/// [`Pattern`] and [`Sequence`](crate::Sequence), and never calls
/// [`get`](GridLike::get) for a coordinate that does not exist.
pub trait GridLike {
    type Item;

    /// The pattern visiting every existing coordinate once, in the grid's natural order.
    type Order<'a>: Pattern
    where
        Self: 'a;

    /// Looks up the value at `coord`.
    ///
    /// # Errors
    /// [`GridError::CoordNotFound`] if `coord` does not exist.
    fn get(&self, coord: Coord) -> Result<&Self::Item, GridError>;

    /// Returns whether `coord` holds a value.
    fn exists(&self, coord: Coord) -> bool;

    /// Returns the full-traversal pattern together with its first coordinate,
    /// or `None` as the first coordinate when the grid is empty.
    fn order(&self) -> (Option<Coord>, Self::Order<'_>);

    /// Looks up `coord`, checking existence first.
    fn try_get(&self, coord: Coord) -> Option<&Self::Item> {
        if self.exists(coord) {
            self.get(coord).ok()
        } else {
            None
        }
    }

    fn in_bounds(&self, coord: Coord) -> bool {
        self.exists(coord)
    }

    /// Returns a cursor over every value in the grid's natural order.
    fn iter(&self) -> Cursor<'_, Self, Self::Order<'_>> {
        let (start, order) = self.order();
        Cursor::new(self, order, start)
    }

    /// Returns a cursor starting at `start` and stepping by `pattern` until
    /// it steps off the grid. Empty if `start` does not exist.
    fn walk<P: Pattern>(&self, start: Coord, pattern: P) -> Cursor<'_, Self, P> {
        Cursor::new(self, pattern, Some(start))
    }

    /// Like [`iter`](GridLike::iter), pairing each value with its coordinate.
    fn locatable_iter(&self) -> Located<Cursor<'_, Self, Self::Order<'_>>> {
        Located::new(self.iter())
    }

    /// Like [`walk`](GridLike::walk), pairing each value with its coordinate.
    fn locatable_walk<P: Pattern>(&self, start: Coord, pattern: P) -> Located<Cursor<'_, Self, P>> {
        Located::new(self.walk(start, pattern))
    }

    /// Returns one walk along `pattern` seeded at every coordinate of the
    /// grid's natural order.
    ///
    /// Runs are built lazily and independently; they are not deduplicated,
    /// so a run seeded at `(0, 0)` going east also covers the run seeded at `(1, 0)`.
    ///
    /// # Example
    /// ```
    /// use gridwalk::{make_grid, Direction, GridLike};
    ///
    /// let grid = make_grid![[1, 2], [3, 4]];
    /// let runs: Vec<Vec<i32>> = grid
    ///     .runs(Direction::East)
    ///     .map(|run| run.copied().collect())
    ///     .collect();
    /// assert_eq!(runs, vec![vec![1, 2], vec![2], vec![3, 4], vec![4]]);
    /// ```
    fn runs<P: Pattern + Clone>(&self, pattern: P) -> Runs<'_, Self, P> {
        Runs::new(self, pattern)
    }

    /// Like [`runs`](GridLike::runs), with every run pairing values with coordinates.
    fn locatable_runs<P: Pattern + Clone>(&self, pattern: P) -> LocatableRuns<'_, Self, P> {
        LocatableRuns::new(self.runs(pattern))
    }

    /// Returns an existence-tolerant [`Probe`] at `coord`.
    fn probe(&self, coord: Coord) -> Probe<'_, Self> {
        Probe::new(self, coord)
    }
}
