//! Reusable grid and pathfinder fixtures.
//!
//! - [`Floor`] — a cell that is either walkable or a wall.
//! - [`Tagged`] — a cell remembering the order the generator produced it.
//! - [`BreadthFirst`] — a minimal contract-conforming pathfinder.

use std::collections::VecDeque;
use tilegrid_core::{Cell, Coord};
use tilegrid_path::{verify_path, PathRequest, Pathfinder};
use tilegrid_space::Grid;

/// A floor tile that may be walled off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Floor {
    pub x: i32,
    pub y: i32,
    pub walkable: bool,
}

impl Floor {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, walkable: true }
    }

    pub fn wall(x: i32, y: i32) -> Self {
        Self { x, y, walkable: false }
    }
}

impl Cell for Floor {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

/// A cell tagged with its generation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tagged {
    pub x: i32,
    pub y: i32,
    pub tag: usize,
}

impl Cell for Tagged {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

/// A `width x height` grid of walkable floor.
pub fn open_floor(width: u32, height: u32) -> Grid<Floor> {
    match Grid::new(width, height, |x, y| Some(Floor::new(x, y))) {
        Ok(g) => g,
        Err(e) => panic!("fixture grid {width}x{height}: {e}"),
    }
}

/// A `width x height` grid whose cells are tagged `0, 1, 2, ...` in
/// generation order.
pub fn tagged_grid(width: u32, height: u32) -> Grid<Tagged> {
    let mut next = 0;
    let grid = Grid::new(width, height, |x, y| {
        next += 1;
        Some(Tagged { x, y, tag: next - 1 })
    });
    match grid {
        Ok(g) => g,
        Err(e) => panic!("fixture grid {width}x{height}: {e}"),
    }
}

/// A grid of floor with walls at `walls`.
pub fn walled_floor(width: u32, height: u32, walls: &[(i32, i32)]) -> Grid<Floor> {
    let mut grid = open_floor(width, height);
    for &(x, y) in walls {
        if let Err(e) = grid.set(x, y, Floor::wall(x, y)) {
            panic!("fixture wall: {e}");
        }
    }
    grid
}

/// Breadth-first search over [`Grid::neighbours_with`].
///
/// Finds a shortest path in steps. Ties resolve by neighbour order, so
/// results are deterministic. Cells rejected by `passable` are treated
/// like busy cells.
pub struct BreadthFirst<'g, T> {
    grid: &'g Grid<T>,
    passable: fn(&T) -> bool,
}

impl<'g, T> BreadthFirst<'g, T> {
    pub fn new(grid: &'g Grid<T>) -> Self {
        Self {
            grid,
            passable: |_| true,
        }
    }

    /// Treat cells failing `passable` as obstacles.
    pub fn with_passable(mut self, passable: fn(&T) -> bool) -> Self {
        self.passable = passable;
        self
    }
}

impl<'g> BreadthFirst<'g, Floor> {
    /// A search that refuses to walk through walls.
    pub fn walls_block(grid: &'g Grid<Floor>) -> Self {
        Self::new(grid).with_passable(|f| f.walkable)
    }
}

impl<T: Cell> Pathfinder for BreadthFirst<'_, T> {
    type Cell = T;

    fn grid(&self) -> &Grid<T> {
        self.grid
    }

    fn find_path_with(&self, request: &PathRequest) -> Vec<&T> {
        let grid = self.grid;
        let (Some(src), Some(dst)) = (
            grid.index_of(request.source.x, request.source.y),
            grid.index_of(request.target.x, request.target.y),
        ) else {
            return Vec::new();
        };
        if src == dst || grid.get_optional(request.source.x, request.source.y).is_none() {
            return Vec::new();
        }

        let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
        let mut visited = vec![false; grid.len()];
        let mut queue = VecDeque::new();
        visited[src] = true;
        queue.push_back(request.source);

        while let Some(at) = queue.pop_front() {
            for nb in grid.neighbours_with(at.x, at.y, &request.strategy) {
                let c = nb.coord();
                let Some(i) = grid.index_of(c.x, c.y) else {
                    continue;
                };
                if visited[i] || !request.is_passable(c) || !(self.passable)(nb) {
                    continue;
                }
                visited[i] = true;
                parent[i] = grid.index_of(at.x, at.y);
                if i == dst {
                    return self.unwind(&parent, src, dst);
                }
                queue.push_back(c);
            }
        }
        Vec::new()
    }
}

impl<T> BreadthFirst<'_, T> {
    fn unwind(&self, parent: &[Option<usize>], src: usize, dst: usize) -> Vec<&T> {
        let mut out = Vec::new();
        let mut i = dst;
        while i != src {
            let c = self.grid.coord_of(i).and_then(|c| self.grid.get_optional(c.x, c.y));
            match (c, parent[i]) {
                (Some(cell), Some(p)) => {
                    out.push(cell);
                    i = p;
                }
                _ => return Vec::new(),
            }
        }
        out.reverse();
        out
    }
}

/// Run `request` through `pathfinder` and assert the result honours the
/// contract. Returns the path's coordinates for further checks.
pub fn assert_path_contract<P: Pathfinder>(pathfinder: &P, request: &PathRequest) -> Vec<Coord> {
    let path = pathfinder.find_path_with(request);
    if let Err(v) = verify_path(pathfinder.grid(), request, &path) {
        panic!("contract violated for {request:?}: {v}");
    }
    path.iter().map(|c| c.coord()).collect()
}
