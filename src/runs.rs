//! Sequences of sequences: one pattern walk per position of a grid's natural order.

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::sequence::{Cursor, Located};
use crate::{GridLike, Pattern, Sequence};

/// Lazily yields one independent walk along a pattern for every coordinate
/// the grid's full traversal visits. Built by [`GridLike::runs`].
///
/// The driving traversal only ever advances by location, so values are read
/// solely by the runs handed out.
pub struct Runs<'a, G: GridLike + ?Sized + 'a, P> {
    grid: &'a G,
    driver: Cursor<'a, G, G::Order<'a>>,
    pattern: P,
}

impl<'a, G: GridLike + ?Sized + 'a, P: Pattern + Clone> Runs<'a, G, P> {
    pub(crate) fn new(grid: &'a G, pattern: P) -> Self {
        Self {
            grid,
            driver: grid.iter(),
            pattern,
        }
    }
}

impl<G: GridLike + ?Sized, P: fmt::Debug> fmt::Debug for Runs<'_, G, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runs")
            .field("pattern", &self.pattern)
            .field("seed", &self.driver.peek_location())
            .finish_non_exhaustive()
    }
}

impl<'a, G: GridLike + ?Sized + 'a, P: Pattern + Clone> Iterator for Runs<'a, G, P> {
    type Item = Cursor<'a, G, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let seed = self.driver.peek_location();
        if !self.driver.try_next() {
            return None;
        }
        trace!(?seed, "Seeding run");
        Some(Cursor::new(self.grid, self.pattern.clone(), seed))
    }
}

impl<G: GridLike + ?Sized, P: Pattern + Clone> FusedIterator for Runs<'_, G, P> {}

/// [`Runs`] whose walks pair every value with its coordinate. Built by
/// [`GridLike::locatable_runs`].
pub struct LocatableRuns<'a, G: GridLike + ?Sized + 'a, P> {
    runs: Runs<'a, G, P>,
}

impl<'a, G: GridLike + ?Sized + 'a, P> LocatableRuns<'a, G, P> {
    pub(crate) fn new(runs: Runs<'a, G, P>) -> Self {
        Self { runs }
    }
}

impl<G: GridLike + ?Sized, P: fmt::Debug> fmt::Debug for LocatableRuns<'_, G, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocatableRuns").field(&self.runs).finish()
    }
}

impl<'a, G: GridLike + ?Sized + 'a, P: Pattern + Clone> Iterator for LocatableRuns<'a, G, P> {
    type Item = Located<Cursor<'a, G, P>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runs.next().map(Located::new)
    }
}

impl<G: GridLike + ?Sized, P: Pattern + Clone> FusedIterator for LocatableRuns<'_, G, P> {}
