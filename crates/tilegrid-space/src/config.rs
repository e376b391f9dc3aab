//! Grid dimensions and their validation.

use tilegrid_core::GridError;

/// Dimensions of a [`Grid`](crate::Grid).
///
/// `width` and `height` count cells; `cell_width` and `cell_height` are the
/// pixel size of one cell, used only for pixel-space lookups. A pixel size
/// of zero disables those lookups. Validated before any storage is
/// allocated; a constructed grid never changes its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Number of cells along the x axis.
    pub width: u32,
    /// Number of cells along the y axis.
    pub height: u32,
    /// Pixel width of one cell. Default: 0 (pixel lookups disabled).
    pub cell_width: u32,
    /// Pixel height of one cell. Default: 0 (pixel lookups disabled).
    pub cell_height: u32,
}

impl GridConfig {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Default pixel size of a cell.
    pub const DEFAULT_CELL_SIZE: u32 = 0;

    /// A `width x height` grid with pixel lookups disabled.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cell_width: Self::DEFAULT_CELL_SIZE,
            cell_height: Self::DEFAULT_CELL_SIZE,
        }
    }

    /// Set the pixel size of one cell.
    pub fn with_cell_size(mut self, cell_width: u32, cell_height: u32) -> Self {
        self.cell_width = cell_width;
        self.cell_height = cell_height;
        self
    }

    /// Number of cell slots, `width * height`.
    ///
    /// Returns `None` if the product does not fit in `usize`.
    pub fn slot_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// `true` if pixel-space lookups are possible.
    pub fn has_pixel_mapping(&self) -> bool {
        self.cell_width > 0 && self.cell_height > 0
    }

    /// Check all structural invariants.
    ///
    /// Both dimensions must be positive and fit in `i32`.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: self.width,
                max: Self::MAX_DIM,
            });
        }
        if self.height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: self.height,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_cell_size() {
        let cfg = GridConfig::new(3, 4);
        assert_eq!(cfg.cell_width, 0);
        assert_eq!(cfg.cell_height, 0);
        assert!(!cfg.has_pixel_mapping());
        assert_eq!(cfg.slot_count(), Some(12));
    }

    #[test]
    fn with_cell_size_enables_pixel_mapping() {
        let cfg = GridConfig::new(3, 4).with_cell_size(32, 16);
        assert!(cfg.has_pixel_mapping());
        assert!(!GridConfig::new(3, 4).with_cell_size(32, 0).has_pixel_mapping());
    }

    #[test]
    fn validate_accepts_positive_dims() {
        assert!(GridConfig::new(1, 1).validate().is_ok());
        assert!(GridConfig::new(GridConfig::MAX_DIM, 1).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_dims() {
        for (w, h) in [(0, 4), (3, 0), (0, 0)] {
            match GridConfig::new(w, h).validate() {
                Err(GridError::EmptyGrid { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("expected EmptyGrid, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_rejects_dims_exceeding_i32_max() {
        let big = GridConfig::MAX_DIM + 1;
        assert!(matches!(
            GridConfig::new(big, 5).validate(),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            GridConfig::new(5, big).validate(),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }
}
