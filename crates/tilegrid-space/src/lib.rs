//! Spatial storage for tilegrid.
//!
//! This crate defines [`Grid`], a fixed-size dense 2D container of cells,
//! and the neighbour selection strategies that decide which coordinates
//! count as adjacent.
//!
//! # Adjacency
//!
//! - [`NeighbourStrategy::LeftUpRightDown`]: 4-connected, the default
//! - [`NeighbourStrategy::LeftUpRightDownUpLeftUpRightDownRightDownLeft`]:
//!   8-connected, cardinals first then diagonals
//!
//! Candidate order is part of the contract; search algorithms built on
//! [`Grid::neighbours_with`] inherit it for tie-breaking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod direction;
pub mod grid;
pub mod neighbour;
mod random;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::GridConfig;
pub use direction::Direction;
pub use grid::Grid;
pub use neighbour::{NeighbourDirection, NeighbourSelection, NeighbourStrategy};
pub use tilegrid_core::{Cell, Coord, GridError, Tile};
