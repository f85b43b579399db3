use std::fmt;

use crate::{Coord, GridLike, Locatable, Pattern};

/// A non-owning pointer into a grid that may point at coordinates with no value.
///
/// Stepping never checks existence; only dereferencing does, and it answers
/// `None` rather than failing. This keeps speculative multi-step walks off the
/// populated region cheap, which is what validation passes such as
/// [`maze::inconsistencies`](crate::maze::inconsistencies) need.
///
/// # Example
/// ```
/// use gridwalk::{make_grid, Coord, Direction, GridLike};
///
/// let grid = make_grid![[1, 2], [3]];
/// let probe = grid.probe(Coord::new(0, 1));
/// assert_eq!(probe.poll(), Some(&3));
///
/// let off_grid = probe.step(Direction::East).unwrap();
/// assert_eq!(off_grid.position(), Coord::new(1, 1));
/// assert_eq!(off_grid.poll(), None);
/// ```
pub struct Probe<'a, G: ?Sized> {
    grid: &'a G,
    position: Coord,
}

impl<'a, G: GridLike + ?Sized> Probe<'a, G> {
    pub fn new(grid: &'a G, position: Coord) -> Self {
        Self { grid, position }
    }

    /// The value under the probe, or `None` if its coordinate does not exist.
    pub fn poll(&self) -> Option<&'a G::Item> {
        self.grid.try_get(self.position)
    }

    /// Like [`poll`](Probe::poll), paired with the probe's position.
    pub fn peek(&self) -> Option<Locatable<&'a G::Item>> {
        self.poll()
            .map(|value| Locatable::new(value, self.position))
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// Returns a probe one `pattern` step away, or `None` if the pattern ends here.
    /// The new position is not required to exist.
    pub fn step(&self, pattern: impl Pattern) -> Option<Self> {
        pattern
            .step(self.position)
            .map(|position| Self::new(self.grid, position))
    }
}

impl<G: ?Sized> Clone for Probe<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for Probe<'_, G> {}

impl<G: ?Sized> fmt::Debug for Probe<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::{make_grid, pattern, Coord, Direction, GridLike, Increment, Locatable};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn poll_outside_every_row_is_none() {
        let grid = make_grid![[1, 2, 3], [4, 5]];
        for coord in [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(2, 1),
            Coord::new(0, 2),
            Coord::new(i32::MAX, i32::MIN),
        ] {
            assert_eq!(grid.probe(coord).poll(), None);
            assert_eq!(grid.probe(coord).peek(), None);
        }
    }

    #[test]
    fn stepping_off_the_far_edge_is_tolerated() {
        let grid = make_grid![[1, 2, 3]];
        let edge = grid.probe(Coord::new(2, 0));
        let beyond = edge.step(Direction::East).unwrap();
        assert_eq!(beyond.poll(), None);
        // Further speculative steps keep working and can come back.
        let back = beyond
            .step(Increment::new(5, 0))
            .and_then(|p| p.step(Increment::new(-7, 0)))
            .unwrap();
        assert_eq!(back.peek(), Some(Locatable::new(&2, Coord::new(1, 0))));
    }

    #[test]
    fn step_ends_where_the_pattern_ends() {
        let grid = make_grid![[1]];
        let stop = pattern::from_fn(|_| None);
        assert!(grid.probe(Coord::ORIGIN).step(stop).is_none());
        assert!(grid.probe(Coord::new(i32::MAX, 0)).step(Direction::East).is_none());
    }

    #[test]
    fn stepping_leaves_the_original_probe_untouched() {
        let grid = make_grid![[1, 2]];
        let start = grid.probe(Coord::ORIGIN);
        let _ = start.step(Direction::East);
        assert_eq!(start.position(), Coord::ORIGIN);
        assert_eq!(start.poll(), Some(&1));
    }

    proptest! {
        #[test]
        fn poll_matches_try_get(x in -4..8i32, y in -4..8i32) {
            let grid = make_grid![[1, 2, 3], [], [4, 5, 6, 7]];
            let coord = Coord::new(x, y);
            prop_assert_eq!(grid.probe(coord).poll(), grid.try_get(coord));
        }
    }
}
