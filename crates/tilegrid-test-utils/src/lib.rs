//! Test utilities and fixtures for tilegrid development.
//!
//! Provides cell types with a payload ([`Floor`], [`Tagged`]), grid
//! builders, a reference breadth-first [`Pathfinder`](tilegrid_path::Pathfinder)
//! and contract assertions for pathfinder tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_path_contract, open_floor, tagged_grid, walled_floor, BreadthFirst, Floor, Tagged,
};
