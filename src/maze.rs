//! Consistency checks for mazes stored as passage bitmasks.
//!
//! Each cell holds the directions it opens towards, as a sum of [`NORTH`],
//! [`EAST`], [`SOUTH`] and [`WEST`]. A maze is consistent when every opening
//! leads to an existing cell that opens back.

use tracing::warn;

use crate::{Coord, Direction, GridLike, Probe, SmallVecLine};

pub const NORTH: u8 = 1;
pub const EAST: u8 = 2;
pub const SOUTH: u8 = 4;
pub const WEST: u8 = 8;

/// The passage bit for a cardinal direction; `None` for diagonals.
pub const fn passage(direction: Direction) -> Option<u8> {
    match direction {
        Direction::North => Some(NORTH),
        Direction::East => Some(EAST),
        Direction::South => Some(SOUTH),
        Direction::West => Some(WEST),
        _ => None,
    }
}

/// An opening with no matching opening on the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inconsistency {
    /// The cell with the opening.
    pub position: Coord,
    /// The direction the opening faces.
    pub looking: Direction,
    /// What the neighbour holds, or `None` if the opening leads off the maze.
    pub found: Option<u8>,
}

/// Every one-sided opening, in row-major order of the cell that has it and
/// clockwise from north within a cell.
///
/// # Example
/// ```
/// use gridwalk::maze::{self, EAST, WEST};
/// use gridwalk::{make_grid, Coord, Direction};
///
/// let fine = make_grid![[EAST, WEST]];
/// assert!(maze::is_consistent(&fine));
///
/// let broken = make_grid![[EAST, 0]];
/// let found = maze::inconsistencies(&broken);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].position, Coord::new(0, 0));
/// assert_eq!(found[0].looking, Direction::East);
/// ```
pub fn inconsistencies<G>(grid: &G) -> SmallVecLine<Inconsistency>
where
    G: GridLike<Item = u8> + ?Sized,
{
    let mut found = SmallVecLine::new();
    for cell in grid.locatable_iter() {
        let here = grid.probe(cell.location);
        for direction in Direction::CARDINALS {
            if let Some(inconsistency) = check(here, *cell.value, direction) {
                warn!(
                    position = %inconsistency.position,
                    looking = %direction,
                    found = ?inconsistency.found,
                    "Inconsistent maze"
                );
                found.push(inconsistency);
            }
        }
    }
    found
}

pub fn is_consistent<G>(grid: &G) -> bool
where
    G: GridLike<Item = u8> + ?Sized,
{
    inconsistencies(grid).is_empty()
}

fn check<G>(here: Probe<'_, G>, walls: u8, direction: Direction) -> Option<Inconsistency>
where
    G: GridLike<Item = u8> + ?Sized,
{
    let (bit, reverse) = (passage(direction)?, passage(direction.opposite())?);
    if walls & bit == 0 {
        return None;
    }
    let found = here.step(direction).and_then(|there| there.poll()).copied();
    match found {
        Some(neighbour) if neighbour & reverse != 0 => None,
        _ => Some(Inconsistency {
            position: here.position(),
            looking: direction,
            found,
        }),
    }
}
