//! Lazy, peekable, location-aware cursors over grid contents.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::error;

use crate::{Coord, GridError, GridLike, Pattern};

/// A single-use, forward-only cursor that knows where its next element lives.
///
/// `has_next` and `has_next_location` never disagree, and neither do `peek`
/// and `peek_location`: a pending value always has a pending coordinate.
///
/// [`Iterator::next`] returns `None` once the cursor is exhausted. The
/// `next_value` and `next_location` methods instead report consuming an
/// exhausted cursor as [`GridError::Exhausted`].
pub trait Sequence: Iterator {
    fn has_next(&self) -> bool;

    fn has_next_location(&self) -> bool;

    /// Consumes the pending value and advances.
    ///
    /// # Errors
    /// [`GridError::Exhausted`] if nothing is pending.
    fn next_value(&mut self) -> Result<Self::Item, GridError>;

    /// Consumes the pending coordinate and advances, without reading the value.
    ///
    /// # Errors
    /// [`GridError::Exhausted`] if nothing is pending.
    fn next_location(&mut self) -> Result<Coord, GridError>;

    /// The pending value, without advancing.
    fn peek(&self) -> Option<Self::Item>;

    /// The pending coordinate, without advancing.
    fn peek_location(&self) -> Option<Coord>;

    /// Advances past the pending element if there is one, reporting whether it did.
    ///
    /// Advances by location since that never materialises the value.
    fn try_next(&mut self) -> bool {
        self.has_next() && self.next_location().is_ok()
    }
}

/// Turns the `Result` of a consuming call into the `Option` an iterator yields.
///
/// Exhaustion ends iteration. Anything else means a broken grid or sequence
/// implementation and is not recoverable.
fn settle<T>(result: Result<T, GridError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(GridError::Exhausted) => None,
        Err(e) => {
            error!("{e}");
            panic!("{e}");
        }
    }
}

/// The cursor behind every grid traversal: a grid, a pattern and the pending coordinate.
///
/// Every pending coordinate has been checked with [`GridLike::exists`], so
/// [`GridLike::get`] is only ever called for coordinates that exist.
pub struct Cursor<'a, G: ?Sized, P> {
    grid: &'a G,
    pattern: P,
    next: Option<Coord>,
}

impl<'a, G: GridLike + ?Sized, P: Pattern> Cursor<'a, G, P> {
    /// Creates a cursor pending at `start`, or an exhausted one if `start`
    /// is `None` or does not exist on `grid`.
    pub fn new(grid: &'a G, pattern: P, start: Option<Coord>) -> Self {
        // A walk can't start off the grid: there is no way to know where it would go next.
        let next = start.filter(|&coord| grid.exists(coord));
        Self {
            grid,
            pattern,
            next,
        }
    }

    pub fn pattern(&self) -> &P {
        &self.pattern
    }

    /// Steps once from `current`, dropping the result if it does not exist.
    fn progress(&self, current: Coord) -> Option<Coord> {
        self.pattern
            .step(current)
            .filter(|&coord| self.grid.exists(coord))
    }
}

impl<G: ?Sized, P: fmt::Debug> fmt::Debug for Cursor<'_, G, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pattern", &self.pattern)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

impl<'a, G: GridLike + ?Sized, P: Pattern> Iterator for Cursor<'a, G, P> {
    type Item = &'a G::Item;

    fn next(&mut self) -> Option<Self::Item> {
        settle(self.next_value())
    }
}

impl<G: GridLike + ?Sized, P: Pattern> FusedIterator for Cursor<'_, G, P> {}

impl<G: GridLike + ?Sized, P: Pattern> Sequence for Cursor<'_, G, P> {
    fn has_next(&self) -> bool {
        self.next.is_some()
    }

    fn has_next_location(&self) -> bool {
        self.next.is_some()
    }

    fn next_value(&mut self) -> Result<Self::Item, GridError> {
        let current = self.next.ok_or(GridError::Exhausted)?;
        let value = self.grid.get(current)?;
        self.next = self.progress(current);
        Ok(value)
    }

    fn next_location(&mut self) -> Result<Coord, GridError> {
        let current = self.next.ok_or(GridError::Exhausted)?;
        self.next = self.progress(current);
        Ok(current)
    }

    fn peek(&self) -> Option<Self::Item> {
        // Existence was checked when `next` was assigned.
        self.next.and_then(|coord| self.grid.get(coord).ok())
    }

    fn peek_location(&self) -> Option<Coord> {
        self.next
    }
}

/// A sequence that is always exhausted.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Creates the empty sequence.
///
/// # Example
/// ```
/// use gridwalk::sequence::{self, Sequence};
///
/// let mut nothing = sequence::empty::<u8>();
/// assert!(!nothing.has_next());
/// assert!(nothing.next_location().is_err());
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> FusedIterator for Empty<T> {}

impl<T> Sequence for Empty<T> {
    fn has_next(&self) -> bool {
        false
    }

    fn has_next_location(&self) -> bool {
        false
    }

    fn next_value(&mut self) -> Result<T, GridError> {
        Err(GridError::Exhausted)
    }

    fn next_location(&mut self) -> Result<Coord, GridError> {
        Err(GridError::Exhausted)
    }

    fn peek(&self) -> Option<T> {
        None
    }

    fn peek_location(&self) -> Option<Coord> {
        None
    }
}

/// A value paired with the coordinate it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Locatable<T> {
    pub value: T,
    pub location: Coord,
}

impl<T> Locatable<T> {
    pub fn new(value: T, location: Coord) -> Self {
        Self { value, location }
    }

    pub fn into_parts(self) -> (T, Coord) {
        (self.value, self.location)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Locatable<U> {
        Locatable::new(f(self.value), self.location)
    }
}

/// Adapts a value sequence into one yielding [`Locatable`] pairs.
#[derive(Debug, Clone)]
pub struct Located<S> {
    inner: S,
}

impl<S: Sequence> Located<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn violation(detail: &'static str) -> GridError {
        GridError::ContractViolation {
            sequence: std::any::type_name::<S>(),
            detail,
        }
    }

    /// Pairs the pending value with its coordinate.
    ///
    /// # Errors
    /// [`GridError::ContractViolation`] if the inner sequence has a pending
    /// value but no pending coordinate.
    pub fn try_peek(&self) -> Result<Option<Locatable<S::Item>>, GridError> {
        let Some(value) = self.inner.peek() else {
            return Ok(None);
        };
        let location = self.inner.peek_location().ok_or_else(|| {
            Self::violation("peek returned a value while peek_location returned none")
        })?;
        Ok(Some(Locatable::new(value, location)))
    }
}

impl<S: Sequence> Iterator for Located<S> {
    type Item = Locatable<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        settle(self.next_value())
    }
}

impl<S: Sequence + FusedIterator> FusedIterator for Located<S> {}

impl<S: Sequence> Sequence for Located<S> {
    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn has_next_location(&self) -> bool {
        self.inner.has_next_location()
    }

    fn next_value(&mut self) -> Result<Self::Item, GridError> {
        // The location must be read first: consuming the value moves the cursor.
        let location = self.inner.peek_location();
        let value = self.inner.next_value()?;
        let location = location.ok_or_else(|| {
            Self::violation("next_value returned a value while peek_location returned none")
        })?;
        Ok(Locatable::new(value, location))
    }

    fn next_location(&mut self) -> Result<Coord, GridError> {
        self.inner.next_location()
    }

    fn peek(&self) -> Option<Self::Item> {
        settle(self.try_peek()).flatten()
    }

    fn peek_location(&self) -> Option<Coord> {
        self.inner.peek_location()
    }
}
