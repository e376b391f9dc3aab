//! The [`Cell`] trait and the plain positional [`Tile`].

use crate::coord::Coord;

/// A unit of grid occupancy identified by integer coordinates.
///
/// Identity is positional: two cells reporting the same `(x, y)` within one
/// grid are the same logical cell. Types carrying game- or
/// algorithm-specific payload implement this trait next to their data.
///
/// # Examples
///
/// ```
/// use tilegrid_core::{Cell, Coord};
///
/// struct Floor {
///     x: i32,
///     y: i32,
///     walkable: bool,
/// }
///
/// impl Cell for Floor {
///     fn x(&self) -> i32 { self.x }
///     fn y(&self) -> i32 { self.y }
/// }
///
/// let f = Floor { x: 2, y: 1, walkable: true };
/// assert!(f.walkable);
/// assert_eq!(f.coord(), Coord::new(2, 1));
/// ```
pub trait Cell {
    /// Column of this cell.
    fn x(&self) -> i32;

    /// Row of this cell.
    fn y(&self) -> i32;

    /// Both coordinates as a [`Coord`].
    fn coord(&self) -> Coord {
        Coord::new(self.x(), self.y())
    }
}

impl<C: Cell + ?Sized> Cell for &C {
    fn x(&self) -> i32 {
        (**self).x()
    }

    fn y(&self) -> i32 {
        (**self).y()
    }
}

impl<C: Cell + ?Sized> Cell for Box<C> {
    fn x(&self) -> i32 {
        (**self).x()
    }

    fn y(&self) -> i32 {
        (**self).y()
    }
}

/// A cell with no payload beyond its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    coord: Coord,
}

impl Tile {
    /// Create a tile at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            coord: Coord::new(x, y),
        }
    }
}

impl Cell for Tile {
    fn x(&self) -> i32 {
        self.coord.x
    }

    fn y(&self) -> i32 {
        self.coord.y
    }

    fn coord(&self) -> Coord {
        self.coord
    }
}

impl From<Coord> for Tile {
    fn from(coord: Coord) -> Self {
        Self { coord }
    }
}
