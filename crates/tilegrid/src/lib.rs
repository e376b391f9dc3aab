//! Tilegrid: fixed-size 2D cell grids for tile-based games.
//!
//! This is the facade crate re-exporting the public API of the tilegrid
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use tilegrid::prelude::*;
//!
//! // A 3x2 grid where every cell is a plain tile.
//! let grid = Grid::new(3, 2, |x, y| Some(Tile::new(x, y))).unwrap();
//! assert_eq!(grid.len(), 6);
//!
//! // Corner cells have two 4-way neighbours, in left, up, right, down order.
//! let around: Vec<Coord> = grid.neighbours(0, 0).iter().map(|t| t.coord()).collect();
//! assert_eq!(around, vec![Coord::new(1, 0), Coord::new(0, 1)]);
//!
//! // Eight-way selection adds the diagonal.
//! let eight = grid.neighbours_with(0, 0, &NeighbourStrategy::LeftUpRightDownUpLeftUpRightDownRightDownLeft);
//! assert_eq!(eight.len(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tilegrid-core` | `Coord`, the `Cell` trait, `GridError` |
//! | [`space`] | `tilegrid-space` | `Grid`, directions, neighbour strategies |
//! | [`path`] | `tilegrid-path` | `Pathfinder` trait, requests, path verification |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, the cell trait and errors (`tilegrid-core`).
pub use tilegrid_core as types;

/// Grid storage and neighbour selection (`tilegrid-space`).
///
/// [`space::Grid`] is the container; [`space::NeighbourStrategy`] decides
/// adjacency.
pub use tilegrid_space as space;

/// The pathfinding contract (`tilegrid-path`).
///
/// Implement [`path::Pathfinder`] and check results with
/// [`path::verify_path`].
pub use tilegrid_path as path;

/// Common imports.
///
/// ```rust
/// use tilegrid::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use tilegrid_core::{Cell, Coord, GridError, Tile};

    // Space
    pub use tilegrid_space::{Direction, Grid, GridConfig, NeighbourDirection, NeighbourStrategy};

    // Path
    pub use tilegrid_path::{find_path, BusyCells, PathRequest, Pathfinder};
}
