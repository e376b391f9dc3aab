//! The pathfinding contract for tilegrid.
//!
//! This crate does not ship a search algorithm. It defines what one must
//! look like: the [`Pathfinder`] trait with its single required operation,
//! the [`PathRequest`] it consumes, the defaulting helpers
//! ([`find_path`], [`find_path_directed`], [`find_path_avoiding`]) and
//! [`verify_path`] for checking a result against the contract.
//!
//! # Contract
//!
//! A returned path lists the cells from source (excluded) to target
//! (included), each step adjacent to the previous one under the request's
//! [`NeighbourStrategy`](tilegrid_space::NeighbourStrategy). It never visits
//! a busy cell, an empty slot, or a coordinate outside the grid. "No path"
//! is an empty `Vec`, not an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod busy;
pub mod pathfinder;
pub mod request;
pub mod verify;

pub use busy::BusyCells;
pub use pathfinder::{find_path, find_path_avoiding, find_path_directed, Pathfinder};
pub use request::PathRequest;
pub use verify::{verify_path, PathViolation};
