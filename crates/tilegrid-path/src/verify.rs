//! Checking a pathfinder's result against the contract.

use crate::request::PathRequest;
use std::error::Error;
use std::fmt;
use tilegrid_core::{Cell, Coord};
use tilegrid_space::Grid;

/// A way in which a returned path breaks the [`Pathfinder`](crate::Pathfinder)
/// contract. `index` is the position within the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathViolation {
    /// The source cell appears in the path.
    IncludesSource {
        /// Position of the source cell.
        index: usize,
    },
    /// The last cell is not the target.
    WrongEndpoint {
        /// The requested target.
        expected: Coord,
        /// The last cell of the path.
        found: Coord,
    },
    /// A step does not connect neighbouring cells under the request's
    /// strategy.
    NotAdjacent {
        /// Position of the step's destination.
        index: usize,
        /// Where the step starts.
        from: Coord,
        /// Where the step lands.
        to: Coord,
    },
    /// The path steps onto a busy cell.
    BusyCell {
        /// Position of the busy cell.
        index: usize,
        /// Its coordinate.
        coord: Coord,
    },
    /// The path steps outside the grid or onto an empty slot.
    NotInGrid {
        /// Position of the offending cell.
        index: usize,
        /// Its coordinate.
        coord: Coord,
    },
    /// A path was returned although the source is outside the grid or an
    /// empty slot.
    SourceNotInGrid {
        /// The requested source.
        source: Coord,
    },
    /// A path was returned for a request that can have none
    /// (`source == target`).
    UnexpectedPath {
        /// Length of the returned path.
        len: usize,
    },
}

impl fmt::Display for PathViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncludesSource { index } => write!(f, "path includes the source at step {index}"),
            Self::WrongEndpoint { expected, found } => {
                write!(f, "path ends at {found}, expected target {expected}")
            }
            Self::NotAdjacent { index, from, to } => {
                write!(f, "step {index} jumps from {from} to non-adjacent {to}")
            }
            Self::BusyCell { index, coord } => write!(f, "step {index} enters busy cell {coord}"),
            Self::NotInGrid { index, coord } => {
                write!(f, "step {index} enters {coord}, which holds no grid cell")
            }
            Self::SourceNotInGrid { source } => {
                write!(f, "path returned from {source}, which holds no grid cell")
            }
            Self::UnexpectedPath { len } => {
                write!(f, "source equals target but a path of {len} cells was returned")
            }
        }
    }
}

impl Error for PathViolation {}

/// Check `path`, as returned for `request` on `grid`, against the
/// pathfinding contract.
///
/// An empty path always passes: proving that no path exists requires a
/// search, which is the pathfinder's job.
pub fn verify_path<T: Cell>(
    grid: &Grid<T>,
    request: &PathRequest,
    path: &[&T],
) -> Result<(), PathViolation> {
    if path.is_empty() {
        return Ok(());
    }
    if request.source == request.target {
        return Err(PathViolation::UnexpectedPath { len: path.len() });
    }
    let source = request.source;
    if grid.get_optional(source.x, source.y).is_none() {
        return Err(PathViolation::SourceNotInGrid { source });
    }

    let mut prev = request.source;
    for (index, cell) in path.iter().enumerate() {
        let coord = cell.coord();
        if coord == request.source {
            return Err(PathViolation::IncludesSource { index });
        }
        if grid.get_optional(coord.x, coord.y).is_none() {
            return Err(PathViolation::NotInGrid { index, coord });
        }
        if request.busy.contains(coord) {
            return Err(PathViolation::BusyCell { index, coord });
        }
        if !request.strategy.is_adjacent(prev, coord) {
            return Err(PathViolation::NotAdjacent {
                index,
                from: prev,
                to: coord,
            });
        }
        prev = coord;
    }

    if prev != request.target {
        return Err(PathViolation::WrongEndpoint {
            expected: request.target,
            found: prev,
        });
    }
    Ok(())
}
