//! The eight compass directions of a square grid.

use tilegrid_core::Coord;

/// A single step on a square grid, in screen space (`Up` is `y - 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(x - 1, y)`
    Left,
    /// `(x, y - 1)`
    Up,
    /// `(x + 1, y)`
    Right,
    /// `(x, y + 1)`
    Down,
    /// `(x - 1, y - 1)`
    UpLeft,
    /// `(x + 1, y - 1)`
    UpRight,
    /// `(x + 1, y + 1)`
    DownRight,
    /// `(x - 1, y + 1)`
    DownLeft,
}

impl Direction {
    /// The four cardinal directions in neighbour-selection order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// All eight directions in neighbour-selection order.
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// `(dx, dy)` for one step in this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (1, -1),
            Self::DownRight => (1, 1),
            Self::DownLeft => (-1, 1),
        }
    }

    /// The coordinate one step from `from`. No bounds checking.
    pub const fn step(self, from: Coord) -> Coord {
        let (dx, dy) = self.offset();
        from.offset(dx, dy)
    }

    /// The direction pointing back.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownRight => Self::UpLeft,
            Self::DownLeft => Self::UpRight,
        }
    }

    /// `true` for the four diagonal directions.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpLeft | Self::UpRight | Self::DownRight | Self::DownLeft
        )
    }
}
