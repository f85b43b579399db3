use std::cell::OnceCell;

use tracing::{debug, trace};

use crate::{Coord, GridError, GridLike, Pattern};

pub mod config;
mod parse;
mod row_major;

pub use config::ParseConfig;
pub use row_major::RowMajor;

/// The coordinate just before the origin. Stepping it with [`RowMajor`]
/// lands on the first populated cell.
const BEFORE_ORIGIN: Coord = Coord::new(-1, 0);

/// A grid over rows of independent length.
///
/// `(x, y)` exists when row `y` exists and has more than `x` values. The grid
/// offers no mutation, so its cell count is computed once and cached.
///
/// # Example
/// ```
/// use gridwalk::{Coord, GridLike, JaggedGrid};
///
/// let grid = JaggedGrid::from_rows(vec![vec![1, 2], vec![], vec![3]]);
/// assert_eq!(grid.len(), 3);
/// assert!(grid.exists(Coord::new(0, 2)));
/// assert!(!grid.exists(Coord::new(0, 1)));
/// assert_eq!(grid.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JaggedGrid<T> {
    rows: Vec<Vec<T>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    len: OnceCell<usize>,
}

impl<T> JaggedGrid<T> {
    /// Creates a grid that takes ownership of `rows` without copying them.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        debug!("Creating grid over {} rows", rows.len());
        Self {
            rows,
            len: OnceCell::new(),
        }
    }

    /// Creates a grid from a defensive copy of borrowed rows.
    ///
    /// # Example
    /// ```
    /// use gridwalk::JaggedGrid;
    ///
    /// let source = [vec!['a', 'b'], vec!['c']];
    /// let grid = JaggedGrid::copy_from(&source);
    /// assert_eq!(grid.rows(), &source[..]);
    /// ```
    pub fn copy_from<R: AsRef<[T]>>(rows: &[R]) -> Self
    where
        T: Clone,
    {
        Self::from_rows(rows.iter().map(|row| row.as_ref().to_vec()).collect())
    }

    /// The number of cells, summed over all rows on first use.
    pub fn len(&self) -> usize {
        *self.len.get_or_init(|| {
            let len = self.rows.iter().map(Vec::len).sum();
            trace!("Computed grid size {}", len);
            len
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn row(&self, y: usize) -> Option<&[T]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    fn cell(&self, coord: Coord) -> Option<&T> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        self.rows.get(y)?.get(x)
    }
}

impl<T> GridLike for JaggedGrid<T> {
    type Item = T;
    type Order<'a>
        = RowMajor<'a, T>
    where
        Self: 'a;

    fn get(&self, coord: Coord) -> Result<&T, GridError> {
        self.cell(coord).ok_or(GridError::CoordNotFound { coord })
    }

    fn exists(&self, coord: Coord) -> bool {
        self.cell(coord).is_some()
    }

    fn order(&self) -> (Option<Coord>, RowMajor<'_, T>) {
        let order = RowMajor::new(&self.rows);
        (order.step(BEFORE_ORIGIN), order)
    }
}

impl<T> From<Vec<Vec<T>>> for JaggedGrid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T> Default for JaggedGrid<T> {
    fn default() -> Self {
        Self::from_rows(Vec::new())
    }
}

/// Grids are equal when their rows are, whether or not either size is cached yet.
impl<T: PartialEq> PartialEq for JaggedGrid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: Eq> Eq for JaggedGrid<T> {}

impl<'a, T> IntoIterator for &'a JaggedGrid<T> {
    type Item = &'a T;
    type IntoIter = crate::Cursor<'a, JaggedGrid<T>, RowMajor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
