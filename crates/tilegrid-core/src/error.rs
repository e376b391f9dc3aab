//! Error types for grid construction and access.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or non-optional cell access.
///
/// `EmptyGrid` and `DimensionTooLarge` are construction-time argument
/// errors and are never produced by a constructed grid. `CoordOutOfBounds`
/// is only returned by accessors that cannot express "absent"; the
/// `Option`-returning accessors never produce it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero width or height.
    EmptyGrid {
        /// The requested width.
        width: u32,
        /// The requested height.
        height: u32,
    },
    /// A dimension does not fit in the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension was rejected.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// A coordinate lies outside `[0, width) x [0, height)`.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl GridError {
    /// `true` for errors caused by invalid construction arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::EmptyGrid { .. } | Self::DimensionTooLarge { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "cannot create a {width}x{height} grid: both dimensions must be positive")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CoordOutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "coordinate {coord} out of bounds: [0, {width}) x [0, {height})")
            }
        }
    }
}

impl Error for GridError {}
