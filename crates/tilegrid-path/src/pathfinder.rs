//! The [`Pathfinder`] trait and its defaulting helpers.

use crate::request::PathRequest;
use tilegrid_core::{Cell, Coord};
use tilegrid_space::{Grid, NeighbourStrategy};

/// A search algorithm over a [`Grid`].
///
/// Implementors provide one operation, [`find_path_with`]; the free
/// functions [`find_path`], [`find_path_directed`] and
/// [`find_path_avoiding`] fill in defaults and delegate to it.
///
/// # Contract
///
/// - The result runs from the source (excluded) to the target (included).
/// - Every step is adjacent to the previous one under `request.strategy`,
///   as reported by [`Grid::neighbours_with`]. That call is the only
///   source of adjacency; algorithms must not compute their own.
/// - Busy cells, empty slots and out-of-grid coordinates are never
///   visited. A busy target is unreachable.
/// - No path, a source or target that is out of the grid or an empty
///   slot, or `source == target` all yield an empty `Vec`.
///
/// [`crate::verify_path`] checks a result against these rules.
///
/// [`find_path_with`]: Pathfinder::find_path_with
pub trait Pathfinder {
    /// The cell type of the grid being searched.
    type Cell: Cell;

    /// The grid this pathfinder searches.
    fn grid(&self) -> &Grid<Self::Cell>;

    /// Find a path for `request`, or an empty `Vec` if none exists.
    fn find_path_with(&self, request: &PathRequest) -> Vec<&Self::Cell>;
}

impl<P: Pathfinder + ?Sized> Pathfinder for &P {
    type Cell = P::Cell;

    fn grid(&self) -> &Grid<Self::Cell> {
        (**self).grid()
    }

    fn find_path_with(&self, request: &PathRequest) -> Vec<&Self::Cell> {
        (**self).find_path_with(request)
    }
}

impl<P: Pathfinder + ?Sized> Pathfinder for Box<P> {
    type Cell = P::Cell;

    fn grid(&self) -> &Grid<Self::Cell> {
        (**self).grid()
    }

    fn find_path_with(&self, request: &PathRequest) -> Vec<&Self::Cell> {
        (**self).find_path_with(request)
    }
}

/// 4-directional path with no busy cells.
pub fn find_path<P: Pathfinder + ?Sized>(
    pathfinder: &P,
    source: impl Into<Coord>,
    target: impl Into<Coord>,
) -> Vec<&P::Cell> {
    pathfinder.find_path_with(&PathRequest::new(source, target))
}

/// Path under `strategy` (or a legacy direction count) with no busy cells.
pub fn find_path_directed<P: Pathfinder + ?Sized>(
    pathfinder: &P,
    source: impl Into<Coord>,
    target: impl Into<Coord>,
    strategy: impl Into<NeighbourStrategy>,
) -> Vec<&P::Cell> {
    pathfinder.find_path_with(&PathRequest::new(source, target).strategy(strategy))
}

/// 4-directional path avoiding `busy`.
pub fn find_path_avoiding<P, C>(
    pathfinder: &P,
    source: impl Into<Coord>,
    target: impl Into<Coord>,
    busy: impl IntoIterator<Item = C>,
) -> Vec<&P::Cell>
where
    P: Pathfinder + ?Sized,
    C: Into<Coord>,
{
    pathfinder.find_path_with(&PathRequest::new(source, target).busy(busy))
}
