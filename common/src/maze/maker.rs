pub mod algorithms;

use log::debug;
use rand::{Rng, rngs::ThreadRng};
use thiserror::Error;

use algorithms::backtrack::Backtrack;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Wall,
    Passage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Cell {
        Cell { x, y }
    }

    /// Rooms sit on even-even coordinates. Everything else is either a
    /// connecting cell between two rooms or a corner that is never carved.
    pub fn is_room(&self) -> bool {
        self.x % 2 == 0 && self.y % 2 == 0
    }
}

/// Largest grid, in cells, that a builder will allocate.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidDimensionError {
    #[error("width and height must be at least 1, got {width} x {height}")]
    TooSmall { width: i64, height: i64 },
    #[error("{width} x {height} exceeds the limit of {max} cells", max = MAX_CELLS)]
    TooLarge { width: i64, height: i64 },
}

pub fn validate_dimensions(
    width: i64,
    height: i64,
) -> Result<(usize, usize), InvalidDimensionError> {
    if width < 1 || height < 1 {
        return Err(InvalidDimensionError::TooSmall { width, height });
    }

    let too_large = InvalidDimensionError::TooLarge { width, height };
    let w = usize::try_from(width).map_err(|_| too_large)?;
    let h = usize::try_from(height).map_err(|_| too_large)?;

    match w.checked_mul(h) {
        Some(cells) if cells <= MAX_CELLS => Ok((w, h)),
        _ => Err(too_large),
    }
}

pub struct GridBuilder<R: Rng = ThreadRng> {
    grid: Vec<Vec<Tile>>,
    rng: R,
    width: usize,
    height: usize,
}

impl GridBuilder<ThreadRng> {
    pub fn new(width: i64, height: i64) -> Result<Self, InvalidDimensionError> {
        Self::with_rng(width, height, rand::rng())
    }
}

impl<R: Rng> GridBuilder<R> {
    /// Validates the dimensions, allocates an all-wall grid and carves it
    /// before returning. Nothing is allocated when the dimensions are rejected.
    pub fn with_rng(width: i64, height: i64, rng: R) -> Result<Self, InvalidDimensionError> {
        let (width, height) = validate_dimensions(width, height)?;

        let grid = vec![vec![Tile::Wall; width]; height];
        let mut builder = GridBuilder {
            grid,
            rng,
            width,
            height,
        };

        debug!("carving {}x{} grid", width, height);
        builder.backtrack();

        Ok(builder)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid(&self) -> &[Vec<Tile>] {
        &self.grid
    }

    pub fn into_grid(self) -> Vec<Vec<Tile>> {
        self.grid
    }

    fn neighbor(&self, cell: Cell, dx: isize, dy: isize) -> Option<Cell> {
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;

        if x < self.width && y < self.height {
            Some(Cell::new(x, y))
        } else {
            None
        }
    }

    fn visit_cell(&mut self, cell: Cell) {
        let Cell { x, y } = cell;
        self.grid[y][x] = Tile::Passage;
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.grid[cell.y][cell.x] != Tile::Wall
    }

    fn remove_wall_between(&mut self, cell_1: Cell, cell_2: Cell) {
        let x = (cell_1.x + cell_2.x) / 2;
        let y = (cell_1.y + cell_2.y) / 2;
        self.grid[y][x] = Tile::Passage;
    }
}
