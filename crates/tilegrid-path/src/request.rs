//! Search parameters for a single pathfinding call.

use crate::busy::BusyCells;
use tilegrid_core::Coord;
use tilegrid_space::NeighbourStrategy;

/// Everything a [`Pathfinder`](crate::Pathfinder) needs for one search.
///
/// Defaults: 4-directional adjacency and no busy cells.
///
/// # Examples
///
/// ```
/// use tilegrid_path::PathRequest;
/// use tilegrid_space::{NeighbourDirection, NeighbourStrategy};
///
/// let req = PathRequest::new((0, 0), (4, 4))
///     .strategy(NeighbourDirection::EightDirections)
///     .busy([(1, 1), (2, 2)]);
/// assert_eq!(req.strategy, NeighbourStrategy::LeftUpRightDownUpLeftUpRightDownRightDownLeft);
/// assert_eq!(req.busy.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathRequest {
    /// Where the search starts. Never part of the result.
    pub source: Coord,
    /// Where the search ends. Last element of a non-empty result.
    pub target: Coord,
    /// Adjacency used to expand the search.
    pub strategy: NeighbourStrategy,
    /// Cells to treat as impassable.
    pub busy: BusyCells,
}

impl PathRequest {
    /// A 4-directional request with no busy cells.
    pub fn new(source: impl Into<Coord>, target: impl Into<Coord>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            strategy: NeighbourStrategy::default(),
            busy: BusyCells::new(),
        }
    }

    /// Set the adjacency, from a strategy or a legacy direction count.
    pub fn strategy(mut self, strategy: impl Into<NeighbourStrategy>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Add cells (or coordinates) to the busy set.
    pub fn busy<C: Into<Coord>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.busy.extend(cells);
        self
    }

    /// `true` if `at` may be stepped onto as far as this request is
    /// concerned (grid occupancy is checked separately).
    pub fn is_passable(&self, at: Coord) -> bool {
        !self.busy.contains(at)
    }
}
