//! Dense, fixed-size 2D cell storage.

use crate::config::GridConfig;
use crate::direction::Direction;
use crate::neighbour::{NeighbourSelection, NeighbourStrategy};
use smallvec::SmallVec;
use std::fmt;
use tilegrid_core::{Coord, GridError};

/// A rectangular grid of `width * height` cell slots.
///
/// Slots are indexed by `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`, stored contiguously in row-major order. Each slot
/// holds at most one cell. Extents are fixed at construction; [`set`],
/// [`take`] and [`populate`] replace occupants but never resize.
///
/// Accessors come in two flavours: the `Option`-returning ones
/// ([`get_optional`], the directional accessors, [`neighbours`]) treat
/// out-of-range coordinates and empty slots alike as absent, while the
/// `Result`-returning ones ([`get`], [`set`]) report out-of-range
/// coordinates as [`GridError::CoordOutOfBounds`].
///
/// The grid is not internally synchronized. Share it behind a lock or keep
/// it on one thread if it is mutated.
///
/// # Examples
///
/// ```
/// use tilegrid_space::{Grid, NeighbourStrategy, Tile};
///
/// let grid = Grid::new(3, 3, |x, y| Some(Tile::new(x, y))).unwrap();
/// assert!(grid.is_within(2, 2));
/// assert!(!grid.is_within(3, 0));
///
/// // Corner cell: only right and down are inside the grid.
/// let n = grid.neighbours(0, 0);
/// assert_eq!(n.as_slice(), &[&Tile::new(1, 0), &Tile::new(0, 1)]);
///
/// let all = grid.neighbours_with(1, 1, &NeighbourStrategy::LeftUpRightDownUpLeftUpRightDownRightDownLeft);
/// assert_eq!(all.len(), 8);
/// ```
///
/// [`set`]: Grid::set
/// [`take`]: Grid::take
/// [`populate`]: Grid::populate
/// [`get_optional`]: Grid::get_optional
/// [`neighbours`]: Grid::neighbours
/// [`get`]: Grid::get
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    slots: Vec<Option<T>>,
    width: u32,
    height: u32,
    cell_width: u32,
    cell_height: u32,
}

impl<T> Grid<T> {
    /// Create a `width x height` grid, calling `generator` once per slot.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX` or
    /// the slot storage cannot be allocated.
    pub fn new(
        width: u32,
        height: u32,
        generator: impl FnMut(i32, i32) -> Option<T>,
    ) -> Result<Self, GridError> {
        Self::from_config(&GridConfig::new(width, height), generator)
    }

    /// Create a grid whose cells are `cell_width x cell_height` pixels,
    /// enabling [`get_optional_by_pixels`](Self::get_optional_by_pixels).
    pub fn with_cell_size(
        width: u32,
        height: u32,
        cell_width: u32,
        cell_height: u32,
        generator: impl FnMut(i32, i32) -> Option<T>,
    ) -> Result<Self, GridError> {
        let config = GridConfig::new(width, height).with_cell_size(cell_width, cell_height);
        Self::from_config(&config, generator)
    }

    /// Create a grid with every slot empty.
    pub fn empty(width: u32, height: u32) -> Result<Self, GridError> {
        Self::new(width, height, |_, _| None)
    }

    /// Validate `config`, allocate, then populate with `generator`.
    pub fn from_config(
        config: &GridConfig,
        generator: impl FnMut(i32, i32) -> Option<T>,
    ) -> Result<Self, GridError> {
        config.validate()?;
        let too_large = GridError::DimensionTooLarge {
            name: "width * height",
            value: config.width.max(config.height),
            max: GridConfig::MAX_DIM,
        };
        let len = config.slot_count().ok_or_else(|| too_large.clone())?;
        let mut slots = Vec::new();
        // Dimensions within MAX_DIM can still exceed addressable memory.
        slots.try_reserve_exact(len).map_err(|_| too_large)?;
        slots.resize_with(len, || None);
        let mut grid = Self {
            slots,
            width: config.width,
            height: config.height,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
        };
        grid.populate(generator);
        Ok(grid)
    }

    /// Overwrite every slot with a fresh call to `generator`.
    ///
    /// `generator` is called exactly once per coordinate, in row-major
    /// order (`y` outer, `x` inner). Returning `None` leaves the slot
    /// empty.
    pub fn populate(&mut self, mut generator: impl FnMut(i32, i32) -> Option<T>) {
        let width = self.width as usize;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            *slot = generator(x, y);
        }
    }

    // ── Dimensions ──────────────────────────────────────────────

    /// Number of cells along the x axis.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of cells along the y axis.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel width of one cell (0 if pixel lookups are disabled).
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Pixel height of one cell (0 if pixel lookups are disabled).
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> GridConfig {
        GridConfig::new(self.width, self.height).with_cell_size(self.cell_width, self.cell_height)
    }

    /// Number of slots, `width * height`, occupied or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of slots holding a cell.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    // ── Indexing ────────────────────────────────────────────────

    /// `true` iff `0 <= x < width` and `0 <= y < height`.
    pub fn is_within(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Row-major slot index of `(x, y)`, or `None` if out of range.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_within(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Coordinate of the slot at row-major `index`.
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index >= self.slots.len() {
            return None;
        }
        let width = self.width as usize;
        Some(Coord::new((index % width) as i32, (index / width) as i32))
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        self.index_of(x, y).ok_or(GridError::CoordOutOfBounds {
            coord: Coord::new(x, y),
            width: self.width,
            height: self.height,
        })
    }

    // ── Access ──────────────────────────────────────────────────

    /// The occupant of `(x, y)`; `Ok(None)` for an empty slot.
    ///
    /// Returns `Err(GridError::CoordOutOfBounds)` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Result<Option<&T>, GridError> {
        let i = self.checked_index(x, y)?;
        Ok(self.slots[i].as_ref())
    }

    /// Mutable access to the occupant of `(x, y)`.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<Option<&mut T>, GridError> {
        let i = self.checked_index(x, y)?;
        Ok(self.slots[i].as_mut())
    }

    /// The occupant of `(x, y)`, or `None` if the coordinate is outside the
    /// grid or the slot is empty. Never fails.
    pub fn get_optional(&self, x: i32, y: i32) -> Option<&T> {
        self.index_of(x, y).and_then(|i| self.slots[i].as_ref())
    }

    /// Replace the occupant of `(x, y)`, returning the previous one.
    ///
    /// Accepts a cell or `None` (clears the slot). Returns
    /// `Err(GridError::CoordOutOfBounds)` outside the grid, leaving the
    /// grid untouched.
    pub fn set(&mut self, x: i32, y: i32, cell: impl Into<Option<T>>) -> Result<Option<T>, GridError> {
        let i = self.checked_index(x, y)?;
        Ok(std::mem::replace(&mut self.slots[i], cell.into()))
    }

    /// Clear the slot at `(x, y)`, returning its occupant.
    pub fn take(&mut self, x: i32, y: i32) -> Result<Option<T>, GridError> {
        let i = self.checked_index(x, y)?;
        Ok(self.slots[i].take())
    }

    // ── Iteration ───────────────────────────────────────────────

    /// Every slot in row-major order, empty slots included.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Option<&T>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Every slot collected into a new `Vec`, row-major, unfiltered.
    pub fn get_cells(&self) -> Vec<Option<&T>> {
        self.cells().collect()
    }

    /// Occupied slots with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        let width = self.width as usize;
        self.slots.iter().enumerate().filter_map(move |(i, s)| {
            s.as_ref()
                .map(|cell| (Coord::new((i % width) as i32, (i / width) as i32), cell))
        })
    }

    /// Occupants only, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Visit every slot in row-major order.
    pub fn for_each(&self, mut f: impl FnMut(Option<&T>)) {
        for slot in &self.slots {
            f(slot.as_ref());
        }
    }

    /// The raw row-major slot storage.
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.slots
    }

    // ── Neighbours ──────────────────────────────────────────────

    /// Present 4-connected neighbours of `(x, y)`: left, up, right, down.
    ///
    /// Out-of-range candidates and empty slots are dropped, never padded.
    pub fn neighbours(&self, x: i32, y: i32) -> SmallVec<[&T; 8]> {
        self.neighbours_with(x, y, &NeighbourStrategy::LeftUpRightDown)
    }

    /// Present neighbours of `(x, y)` under `strategy`, in strategy order.
    pub fn neighbours_with<S>(&self, x: i32, y: i32, strategy: &S) -> SmallVec<[&T; 8]>
    where
        S: NeighbourSelection + ?Sized,
    {
        strategy
            .candidates(Coord::new(x, y))
            .into_iter()
            .filter_map(|c| self.get_optional(c.x, c.y))
            .collect()
    }

    /// The occupant one step from `at` in `direction`.
    pub fn neighbour(&self, at: impl Into<Coord>, direction: Direction) -> Option<&T> {
        let c = direction.step(at.into());
        self.get_optional(c.x, c.y)
    }

    /// Occupant of `(x - 1, y)`. Accepts a coordinate, a tuple or a cell.
    pub fn left(&self, at: impl Into<Coord>) -> Option<&T> {
        self.neighbour(at, Direction::Left)
    }

    /// Occupant of `(x, y - 1)`.
    pub fn up(&self, at: impl Into<Coord>) -> Option<&T> {
        self.neighbour(at, Direction::Up)
    }

    /// Occupant of `(x + 1, y)`.
    pub fn right(&self, at: impl Into<Coord>) -> Option<&T> {
        self.neighbour(at, Direction::Right)
    }

    /// Occupant of `(x, y + 1)`.
    pub fn down(&self, at: impl Into<Coord>) -> Option<&T> {
        self.neighbour(at, Direction::Down)
    }

    /// Occupant of `(x - 1, y - 1)`.
    pub fn up_left(&self, at: impl Into<Coord>) -> Option<&T> {
        self.neighbour(at, Direction::UpLeft)
    }

    /// Occupant of `(x + 1, y - 1)`.
    pub fn up_right(&self, at: impl Into<Coord>) -> Option<&T> {
        self.neighbour(at, Direction::UpRight)
    }

    /// Occupant of `(x + 1, y + 1)`.
    pub fn down_right(&self, at: impl Into<Coord>) -> Option<&T> {
        self.neighbour(at, Direction::DownRight)
    }

    /// Occupant of `(x - 1, y + 1)`.
    pub fn down_left(&self, at: impl Into<Coord>) -> Option<&T> {
        self.neighbour(at, Direction::DownLeft)
    }

    // ── Pixel space ─────────────────────────────────────────────

    /// The grid coordinate containing pixel `(px, py)`.
    ///
    /// Divides by the cell pixel size and truncates toward zero. Returns
    /// `None` when either pixel dimension is zero or an input is not
    /// finite. The result is not bounds-checked.
    pub fn coord_of_pixel(&self, px: f64, py: f64) -> Option<Coord> {
        if !self.config().has_pixel_mapping() {
            return None;
        }
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        // `as` saturates; saturated values are never inside the grid.
        let x = (px / f64::from(self.cell_width)) as i32;
        let y = (py / f64::from(self.cell_height)) as i32;
        Some(Coord::new(x, y))
    }

    /// The occupant of the cell containing pixel `(px, py)`.
    pub fn get_optional_by_pixels(&self, px: f64, py: f64) -> Option<&T> {
        self.coord_of_pixel(px, py)
            .and_then(|c| self.get_optional(c.x, c.y))
    }
}

impl<T> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cell_width", &self.cell_width)
            .field("cell_height", &self.cell_height)
            .field("occupied", &self.occupied_count())
            .finish()
    }
}
