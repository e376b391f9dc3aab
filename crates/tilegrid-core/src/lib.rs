//! Core types for the tilegrid workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! positional vocabulary shared by every other crate: the [`Coord`] pair,
//! the [`Cell`] trait that grid occupants implement, and [`GridError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;

pub use cell::{Cell, Tile};
pub use coord::Coord;
pub use error::GridError;
