use std::fmt;

use crate::{Coord, Pattern};

/// Row-major successor over jagged rows: the next column of the same row if
/// there is one, else the first column of the next non-empty row.
///
/// The pattern computes the successor of whatever coordinate it is given, so
/// stepping `(-1, 0)` finds the first populated cell.
///
/// # Example
/// ```
/// use gridwalk::{Coord, Pattern, RowMajor};
///
/// let rows = vec![vec![1, 2], vec![], vec![3]];
/// let order = RowMajor::new(&rows);
/// assert_eq!(order.step(Coord::new(-1, 0)), Some(Coord::new(0, 0)));
/// assert_eq!(order.step(Coord::new(1, 0)), Some(Coord::new(0, 2)));
/// assert_eq!(order.step(Coord::new(0, 2)), None);
/// ```
pub struct RowMajor<'a, T> {
    rows: &'a [Vec<T>],
}

impl<'a, T> RowMajor<'a, T> {
    pub fn new(rows: &'a [Vec<T>]) -> Self {
        Self { rows }
    }

    fn first_of_row_after(&self, y: usize) -> Option<Coord> {
        let (next_y, _) = self
            .rows
            .iter()
            .enumerate()
            .skip(y + 1)
            .find(|(_, row)| !row.is_empty())?;
        Some(Coord::new(0, i32::try_from(next_y).ok()?))
    }
}

impl<T> Pattern for RowMajor<'_, T> {
    fn step(&self, current: Coord) -> Option<Coord> {
        let y = usize::try_from(current.y).ok()?;
        let row = self.rows.get(y)?;
        let next_x = current.x.checked_add(1)?;
        match usize::try_from(next_x) {
            Ok(x) if x < row.len() => Some(Coord::new(next_x, current.y)),
            _ => self.first_of_row_after(y),
        }
    }
}

impl<T> Clone for RowMajor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowMajor<'_, T> {}

impl<T> fmt::Debug for RowMajor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMajor")
            .field("rows", &self.rows.len())
            .finish()
    }
}
