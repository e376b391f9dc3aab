use tilegrid_core::{Cell, Coord};
use tilegrid_path::{
    find_path, find_path_avoiding, find_path_directed, BusyCells, PathRequest, Pathfinder,
};
use tilegrid_space::{NeighbourDirection, NeighbourStrategy};
use tilegrid_test_utils::{assert_path_contract, open_floor, walled_floor, BreadthFirst};

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

// ── Basic reachability ──────────────────────────────────────────

#[test]
fn open_five_by_five_reaches_far_corner() {
    let grid = open_floor(5, 5);
    let bfs = BreadthFirst::new(&grid);
    let path = assert_path_contract(&bfs, &PathRequest::new((0, 0), (4, 4)));
    assert_eq!(path.len(), 8);
    assert_eq!(path.last(), Some(&c(4, 4)));
    assert!(!path.contains(&c(0, 0)));

    let via_helper: Vec<Coord> = find_path(&bfs, (0, 0), (4, 4)).iter().map(|t| t.coord()).collect();
    assert_eq!(via_helper, path);
}

#[test]
fn busy_ring_around_source_means_no_path() {
    let grid = open_floor(5, 5);
    let bfs = BreadthFirst::new(&grid);
    let ring: Vec<Coord> = grid.neighbours(0, 0).iter().map(|t| t.coord()).collect();
    assert_eq!(ring, vec![c(1, 0), c(0, 1)]);
    assert!(find_path_avoiding(&bfs, (0, 0), (4, 4), ring.iter().copied()).is_empty());
}

#[test]
fn busy_ring_blocks_eight_way_search_too() {
    let grid = open_floor(5, 5);
    let bfs = BreadthFirst::new(&grid);
    let eight = NeighbourStrategy::LeftUpRightDownUpLeftUpRightDownRightDownLeft;
    let ring = grid.neighbours_with(2, 2, &eight);
    let req = PathRequest::new((2, 2), (4, 4)).strategy(eight).busy(ring);
    assert!(bfs.find_path_with(&req).is_empty());
}

#[test]
fn degenerate_requests_yield_empty_paths() {
    let grid = open_floor(3, 3);
    let bfs = BreadthFirst::new(&grid);
    assert!(find_path(&bfs, (1, 1), (1, 1)).is_empty());
    assert!(find_path(&bfs, (-1, 0), (2, 2)).is_empty());
    assert!(find_path(&bfs, (0, 0), (3, 0)).is_empty());
}

#[test]
fn vacant_source_yields_empty_path() {
    let mut grid = open_floor(3, 3);
    grid.take(0, 0).unwrap();
    let bfs = BreadthFirst::new(&grid);
    assert!(find_path(&bfs, (0, 0), (2, 2)).is_empty());
    assert_path_contract(&bfs, &PathRequest::new((0, 0), (2, 2)));
}

#[test]
fn busy_target_is_unreachable() {
    let grid = open_floor(3, 3);
    let bfs = BreadthFirst::new(&grid);
    assert!(find_path_avoiding(&bfs, (0, 0), (2, 2), [(2, 2)]).is_empty());
}

// ── Obstacles ───────────────────────────────────────────────────

#[test]
fn walls_and_busy_cells_lengthen_the_path() {
    let walls = [(3, 0), (3, 1), (3, 2), (3, 3), (3, 5), (1, 4)];
    let grid = walled_floor(20, 20, &walls);
    let bfs = BreadthFirst::walls_block(&grid);

    let path = assert_path_contract(&bfs, &PathRequest::new((1, 1), (4, 5)));
    assert_eq!(path.len(), 7);

    let detour = assert_path_contract(&bfs, &PathRequest::new((1, 1), (4, 5)).busy([(3, 4)]));
    assert_eq!(detour.len(), 9);
    assert_eq!(detour.last(), Some(&c(4, 5)));
    for w in walls {
        assert!(!detour.contains(&Coord::from(w)));
    }
}

#[test]
fn empty_slots_are_impassable() {
    let mut grid = open_floor(3, 3);
    for y in 0..3 {
        grid.take(1, y).unwrap();
    }
    let bfs = BreadthFirst::new(&grid);
    assert!(find_path(&bfs, (0, 0), (2, 0)).is_empty());
}

#[test]
fn scattered_busy_cells_are_avoided() {
    const SIZE: i32 = 20;
    let grid = open_floor(SIZE as u32, SIZE as u32);
    let bfs = BreadthFirst::new(&grid);
    let busy: BusyCells = (1..SIZE - 1)
        .flat_map(|x| (1..SIZE - 1).map(move |y| (x, y)))
        .filter(|(x, y)| (x + y) % 3 == 0)
        .collect();
    let req = PathRequest {
        source: c(0, 0),
        target: c(SIZE - 1, SIZE - 1),
        strategy: NeighbourStrategy::LeftUpRightDown,
        busy,
    };
    let path = assert_path_contract(&bfs, &req);
    assert_eq!(path.last(), Some(&c(SIZE - 1, SIZE - 1)));
}

// ── Direction modes ─────────────────────────────────────────────

#[test]
fn diagonals_shorten_the_path() {
    let grid = open_floor(20, 20);
    let bfs = BreadthFirst::new(&grid);
    let req = PathRequest::new((0, 0), (3, 3))
        .strategy(NeighbourDirection::EightDirections)
        .busy([(2, 1), (1, 2)]);
    let path = assert_path_contract(&bfs, &req);
    assert_eq!(path, vec![c(1, 1), c(2, 2), c(3, 3)]);

    let four = find_path_directed(&bfs, (0, 0), (3, 3), NeighbourDirection::FourDirections);
    assert_eq!(four.len(), 6);
}

#[test]
fn ties_break_by_neighbour_order() {
    let grid = open_floor(3, 3);
    let bfs = BreadthFirst::new(&grid);
    // Left and up are off-grid; right is probed before down.
    let path: Vec<Coord> = find_path(&bfs, (0, 0), (1, 1)).iter().map(|t| t.coord()).collect();
    assert_eq!(path, vec![c(1, 0), c(1, 1)]);
}

// ── Properties ──────────────────────────────────────────────────

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn breadth_first_always_honours_contract(
            w in 1u32..10,
            h in 1u32..10,
            sx in 0i32..10, sy in 0i32..10,
            tx in 0i32..10, ty in 0i32..10,
            busy in prop::collection::vec((0i32..10, 0i32..10), 0..20),
            diagonal in any::<bool>(),
        ) {
            let grid = open_floor(w, h);
            let bfs = BreadthFirst::new(&grid);
            let strategy = if diagonal {
                NeighbourDirection::EightDirections
            } else {
                NeighbourDirection::FourDirections
            };
            let req = PathRequest::new((sx, sy), (tx, ty)).strategy(strategy).busy(busy);
            let path = assert_path_contract(&bfs, &req);
            if req.source == req.target || !grid.is_within(tx, ty) {
                prop_assert!(path.is_empty());
            }
        }
    }
}
