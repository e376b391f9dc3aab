//! Grid invariant test helpers.
//!
//! These functions verify that a populated grid satisfies the storage and
//! adjacency contract. Reused across the grid test modules.

use crate::grid::Grid;
use crate::neighbour::{NeighbourSelection, NeighbourStrategy};
use indexmap::IndexSet;
use tilegrid_core::{Cell, Coord};

const STRATEGIES: [NeighbourStrategy; 2] = [
    NeighbourStrategy::LeftUpRightDown,
    NeighbourStrategy::LeftUpRightDownUpLeftUpRightDownRightDownLeft,
];

/// Assert that `is_within` holds exactly on `[0, width) x [0, height)`,
/// probing one cell beyond each edge.
pub fn assert_is_within_matches_extents<T>(grid: &Grid<T>) {
    let w = grid.width() as i32;
    let h = grid.height() as i32;
    for y in -1..=h {
        for x in -1..=w {
            let expected = x >= 0 && x < w && y >= 0 && y < h;
            assert_eq!(
                grid.is_within(x, y),
                expected,
                "is_within({x}, {y}) on a {w}x{h} grid"
            );
        }
    }
}

/// Assert that `get` and `get_optional` agree on every in-range slot.
pub fn assert_get_agrees_with_get_optional<T: PartialEq + std::fmt::Debug>(grid: &Grid<T>) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let strict = grid.get(x, y).expect("in-range get must succeed");
            assert_eq!(strict, grid.get_optional(x, y), "slot ({x}, {y})");
        }
    }
}

/// Assert that every occupant sits at the coordinate it reports, and that
/// `cells()` walks the slots in row-major order.
pub fn assert_cells_positional<T: Cell>(grid: &Grid<T>) {
    assert_eq!(grid.cells().len(), grid.len());
    for (i, slot) in grid.cells().enumerate() {
        let expected = grid.coord_of(i).expect("index within len");
        if let Some(cell) = slot {
            assert_eq!(cell.coord(), expected, "slot {i} holds a misplaced cell");
        }
    }
    let unique: IndexSet<Coord> = grid.occupied().map(Cell::coord).collect();
    assert_eq!(unique.len(), grid.occupied_count(), "duplicate cell positions");
}

/// Assert that neighbour results are the in-grid, occupied candidates in
/// strategy order, for both built-in strategies.
pub fn assert_neighbours_filter_candidates<T: Cell>(grid: &Grid<T>) {
    for strategy in STRATEGIES {
        for (coord, _) in grid.iter() {
            let expected: Vec<Coord> = strategy
                .candidates(coord)
                .into_iter()
                .filter(|c| grid.get_optional(c.x, c.y).is_some())
                .collect();
            let got: Vec<Coord> = grid
                .neighbours_with(coord.x, coord.y, &strategy)
                .iter()
                .map(|c| c.coord())
                .collect();
            assert_eq!(got, expected, "neighbours of {coord} under {strategy:?}");
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric<T: Cell>(grid: &Grid<T>) {
    for strategy in STRATEGIES {
        for (coord, _) in grid.iter() {
            for nb in grid.neighbours_with(coord.x, coord.y, &strategy) {
                let back = grid.neighbours_with(nb.x(), nb.y(), &strategy);
                assert!(
                    back.iter().any(|c| c.coord() == coord),
                    "neighbour symmetry violated: {} in N({coord}) but not the reverse",
                    nb.coord()
                );
            }
        }
    }
}

/// Assert that the eight directional accessors match `neighbours_with`
/// under the 8-connected strategy.
pub fn assert_directional_accessors_consistent<T: Cell>(grid: &Grid<T>) {
    for (coord, _) in grid.iter() {
        let via_accessors: Vec<Coord> = [
            grid.left(coord),
            grid.up(coord),
            grid.right(coord),
            grid.down(coord),
            grid.up_left(coord),
            grid.up_right(coord),
            grid.down_right(coord),
            grid.down_left(coord),
        ]
        .into_iter()
        .flatten()
        .map(|c| c.coord())
        .collect();
        let via_strategy: Vec<Coord> = grid
            .neighbours_with(coord.x, coord.y, &STRATEGIES[1])
            .iter()
            .map(|c| c.coord())
            .collect();
        assert_eq!(via_accessors, via_strategy, "accessors around {coord}");
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance<T: Cell + PartialEq + std::fmt::Debug>(grid: &Grid<T>) {
    assert_is_within_matches_extents(grid);
    assert_get_agrees_with_get_optional(grid);
    assert_cells_positional(grid);
    assert_neighbours_filter_candidates(grid);
    assert_neighbours_symmetric(grid);
    assert_directional_accessors_consistent(grid);
}
