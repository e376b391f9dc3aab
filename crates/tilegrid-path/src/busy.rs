//! The set of cells a search must treat as impassable.

use indexmap::IndexSet;
use tilegrid_core::Coord;

/// Coordinates a pathfinder must not step onto, in addition to
/// out-of-grid coordinates and empty slots.
///
/// Membership is positional, so a set built from cells and one built from
/// their coordinates are equal. Iteration follows insertion order.
///
/// # Examples
///
/// ```
/// use tilegrid_core::{Coord, Tile};
/// use tilegrid_path::BusyCells;
///
/// let tiles = [Tile::new(1, 0), Tile::new(2, 0)];
/// let busy: BusyCells = tiles.iter().collect();
/// assert!(busy.contains((1, 0)));
/// assert!(!busy.contains(Coord::new(0, 0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusyCells {
    coords: IndexSet<Coord>,
}

impl BusyCells {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a coordinate busy. Returns `false` if it already was.
    pub fn insert(&mut self, at: impl Into<Coord>) -> bool {
        self.coords.insert(at.into())
    }

    /// Unmark a coordinate. Returns `false` if it was not busy.
    pub fn remove(&mut self, at: impl Into<Coord>) -> bool {
        self.coords.shift_remove(&at.into())
    }

    /// `true` if the coordinate is busy.
    pub fn contains(&self, at: impl Into<Coord>) -> bool {
        self.coords.contains(&at.into())
    }

    /// Number of busy coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// `true` if nothing is busy.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Busy coordinates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().copied()
    }
}

impl<C: Into<Coord>> FromIterator<C> for BusyCells {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<Coord>> Extend<C> for BusyCells {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.coords.extend(iter.into_iter().map(Into::into));
    }
}
