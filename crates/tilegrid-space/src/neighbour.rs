//! Neighbour selection strategies.
//!
//! A strategy maps a coordinate to an ordered list of raw candidate
//! coordinates. Candidates are not bounds-checked; [`Grid`](crate::Grid)
//! filters them. The order is part of the contract: search algorithms rely
//! on it for deterministic tie-breaking.

use crate::direction::Direction;
use smallvec::SmallVec;
use tilegrid_core::Coord;

/// Maps a coordinate to its ordered neighbour candidates.
///
/// Implementations must be pure: the same input always yields the same
/// sequence. The built-in implementation is [`NeighbourStrategy`]; custom
/// adjacency (e.g. knight moves) implements this trait directly.
///
/// # Examples
///
/// ```
/// use smallvec::SmallVec;
/// use tilegrid_space::{Coord, NeighbourSelection};
///
/// struct Horizontal;
///
/// impl NeighbourSelection for Horizontal {
///     fn candidates(&self, c: Coord) -> SmallVec<[Coord; 8]> {
///         SmallVec::from_slice(&[c.offset(-1, 0), c.offset(1, 0)])
///     }
/// }
///
/// let n = Horizontal.candidates(Coord::new(0, 0));
/// assert_eq!(n.as_slice(), &[Coord::new(-1, 0), Coord::new(1, 0)]);
/// ```
pub trait NeighbourSelection {
    /// Candidate neighbours of `coord`, in deterministic order, possibly
    /// outside any grid.
    fn candidates(&self, coord: Coord) -> SmallVec<[Coord; 8]>;
}

/// The two canonical adjacency rules of a square grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NeighbourStrategy {
    /// 4-connected: left, up, right, down.
    #[default]
    LeftUpRightDown,
    /// 8-connected: left, up, right, down, then up-left, up-right,
    /// down-right, down-left.
    LeftUpRightDownUpLeftUpRightDownRightDownLeft,
}

impl NeighbourStrategy {
    /// Directions probed by this strategy, in candidate order.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Self::LeftUpRightDown => &Direction::CARDINAL,
            Self::LeftUpRightDownUpLeftUpRightDownRightDownLeft => &Direction::ALL,
        }
    }

    /// Maximum number of neighbours a cell can have (4 or 8).
    pub fn degree(self) -> usize {
        self.directions().len()
    }

    /// `true` if a single move may change both axes.
    pub fn allows_diagonals(self) -> bool {
        matches!(self, Self::LeftUpRightDownUpLeftUpRightDownRightDownLeft)
    }

    /// `true` if `b` is a candidate neighbour of `a` under this strategy.
    pub fn is_adjacent(self, a: Coord, b: Coord) -> bool {
        self.directions().iter().any(|d| d.step(a) == b)
    }
}

impl NeighbourSelection for NeighbourStrategy {
    fn candidates(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        self.directions().iter().map(|d| d.step(coord)).collect()
    }
}

impl<S: NeighbourSelection + ?Sized> NeighbourSelection for &S {
    fn candidates(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        (**self).candidates(coord)
    }
}

/// Legacy two-valued direction count.
///
/// Kept for callers that select adjacency by count; it translates onto
/// [`NeighbourStrategy`] and is not a third mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NeighbourDirection {
    /// Maps to [`NeighbourStrategy::LeftUpRightDown`].
    #[default]
    FourDirections,
    /// Maps to
    /// [`NeighbourStrategy::LeftUpRightDownUpLeftUpRightDownRightDownLeft`].
    EightDirections,
}

impl From<NeighbourDirection> for NeighbourStrategy {
    fn from(d: NeighbourDirection) -> Self {
        match d {
            NeighbourDirection::FourDirections => Self::LeftUpRightDown,
            NeighbourDirection::EightDirections => {
                Self::LeftUpRightDownUpLeftUpRightDownRightDownLeft
            }
        }
    }
}

impl From<NeighbourStrategy> for NeighbourDirection {
    fn from(s: NeighbourStrategy) -> Self {
        match s {
            NeighbourStrategy::LeftUpRightDown => Self::FourDirections,
            NeighbourStrategy::LeftUpRightDownUpLeftUpRightDownRightDownLeft => {
                Self::EightDirections
            }
        }
    }
}
