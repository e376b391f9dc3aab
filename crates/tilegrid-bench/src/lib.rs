//! Benchmark profiles for tilegrid.
//!
//! - [`reference_grid`]: 100x100 grid (10K cells), fully occupied
//! - [`sparse_grid`]: same extents with a deterministic share of empty slots

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tilegrid_core::Tile;
use tilegrid_space::Grid;

/// Side length of the benchmark grids.
pub const SIDE: u32 = 100;

/// Build a fully occupied 100x100 grid.
pub fn reference_grid() -> Grid<Tile> {
    Grid::new(SIDE, SIDE, |x, y| Some(Tile::new(x, y))).expect("100x100 is a valid grid")
}

/// Build a 100x100 grid where roughly one slot in `gap` is empty.
///
/// The pattern is a fixed hash of the coordinate, so repeated runs see the
/// same layout.
pub fn sparse_grid(gap: u32) -> Grid<Tile> {
    let gap = gap.max(1) as u64;
    Grid::new(SIDE, SIDE, |x, y| {
        let h = ((x as u64) << 32 | y as u64).wrapping_mul(6364136223846793007) >> 33;
        (h % gap != 0).then(|| Tile::new(x, y))
    })
    .expect("100x100 is a valid grid")
}
