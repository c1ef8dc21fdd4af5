pub mod maker;

use std::fmt;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub use maker::{Cell, GridBuilder, InvalidDimensionError, MAX_CELLS, Tile};

/// A finished maze, read-only from here on.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Vec<Vec<Tile>>,
    pub passages: Vec<(usize, usize)>, // (row, col), row-major.
    width: usize,
    height: usize,
}

impl Maze {
    pub fn new(width: i64, height: i64) -> Result<Self, InvalidDimensionError> {
        GridBuilder::new(width, height).map(Self::from_builder)
    }

    pub fn with_rng<R: Rng>(
        width: i64,
        height: i64,
        rng: R,
    ) -> Result<Self, InvalidDimensionError> {
        GridBuilder::with_rng(width, height, rng).map(Self::from_builder)
    }

    /// Seeded runs are reproducible. Without a seed the thread-local source is
    /// used.
    pub fn generate(
        width: i64,
        height: i64,
        seed: Option<u64>,
    ) -> Result<Self, InvalidDimensionError> {
        match seed {
            Some(seed) => Self::with_rng(width, height, StdRng::seed_from_u64(seed)),
            None => Self::new(width, height),
        }
    }

    pub fn from_builder<R: Rng>(builder: GridBuilder<R>) -> Self {
        let width = builder.width();
        let height = builder.height();
        let grid = builder.into_grid();
        let mut passages = Vec::new();

        for (i, row) in grid.iter().enumerate() {
            for (j, &tile) in row.iter().enumerate() {
                if tile == Tile::Passage {
                    passages.push((i, j));
                }
            }
        }

        debug!(
            "{}x{} maze has {} passage cells",
            width,
            height,
            passages.len()
        );

        Self {
            grid,
            passages,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn is_passage(&self, x: usize, y: usize) -> bool {
        self.tile(x, y) == Some(Tile::Passage)
    }

    pub fn rooms(&self) -> Vec<Cell> {
        let mut rooms = Vec::new();

        for y in (0..self.height).step_by(2) {
            for x in (0..self.width).step_by(2) {
                rooms.push(Cell::new(x, y));
            }
        }

        rooms
    }

    pub fn log(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&tile| if tile == Tile::Passage { "  " } else { "██" })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
