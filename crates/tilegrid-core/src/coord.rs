//! Integer grid coordinates.

use crate::cell::Cell;
use std::fmt;

/// A discrete `(x, y)` position on a grid.
///
/// `x` grows to the right and `y` grows downwards (screen space), so "up"
/// is `y - 1`. Coordinates are signed: neighbour candidates of edge cells
/// step outside the grid before bounds filtering drops them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate displaced by `(dx, dy)`.
    ///
    /// Saturates instead of overflowing, which keeps far-off-grid
    /// candidates off-grid.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

/// Any cell converts to the coordinate it occupies.
impl<C: Cell> From<&C> for Coord {
    fn from(cell: &C) -> Self {
        cell.coord()
    }
}

impl Cell for Coord {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}
