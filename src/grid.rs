use std::{
    fmt,
    hash::{Hash, Hasher},
};

use metrohash::MetroHash64;
use rand::Rng;

use crate::{coord, Coord, GridError, GridResult};

/// Snapshot of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    coord: Coord,
}

impl Cell {
    pub fn new(alive: bool, coord: Coord) -> Self {
        Self { alive, coord }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }
}

/// The eight neighbor offsets, as `(row, col)` deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A finite, non-wrapping board of cells.
///
/// Statuses live in a single buffer of `width * height` entries. The linear
/// index of a coordinate is `col + row * height`, which means `row` runs over
/// `0..width` and `col` over `0..height`. Both dimensions are mixed on
/// purpose: changing the layout would change which cells are adjacent on
/// non-square boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// creates a grid where every cell is alive or dead with equal probability.
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        Self::with_rng(width, height, &mut rand::rng())
    }

    /// like [`Grid::new`] but draws from the passed generator.
    pub fn with_rng<R>(width: usize, height: usize, rng: &mut R) -> GridResult<Self>
    where
        R: Rng + ?Sized,
    {
        let len = Self::checked_len(width, height)?;
        let cells = (0..len).map(|_| rng.random_bool(0.5)).collect();
        let grid = Self {
            width,
            height,
            cells,
        };
        tracing::trace!(width, height, alive = grid.alive_count(), "seeded grid");
        Ok(grid)
    }

    /// creates a grid where every cell is dead.
    pub fn empty(width: usize, height: usize) -> GridResult<Self> {
        let len = Self::checked_len(width, height)?;
        tracing::trace!(width, height, "empty grid");
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    fn checked_len(width: usize, height: usize) -> GridResult<usize> {
        match width.checked_mul(height) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(GridError::InvalidDimension { width, height }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// number of cells on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// whether no cell is alive.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Returns one [`Neighborhood`] per cell, in linear index order.
    ///
    /// Every neighborhood reflects the grid as it is when this is called, so
    /// the result can be consumed while the grid is being rewritten.
    pub fn neighborhoods(&self) -> Vec<Neighborhood> {
        (0..self.len())
            .map(|index| {
                let coord = self.coord_of(index);
                let cell = Cell::new(self.cells[index], coord);
                Neighborhood::new(cell, self.neighbors(coord))
            })
            .collect()
    }

    pub fn activate(&mut self, coord: Coord) -> GridResult<()> {
        self.set(coord, true)
    }

    pub fn deactivate(&mut self, coord: Coord) -> GridResult<()> {
        self.set(coord, false)
    }

    fn set(&mut self, coord: Coord, alive: bool) -> GridResult<()> {
        let index = self.to_1d(coord)?;
        self.cells[index] = alive;
        Ok(())
    }

    pub fn value_at(&self, coord: Coord) -> GridResult<bool> {
        let index = self.to_1d(coord)?;
        Ok(self.cells[index])
    }

    /// converts a linear index into a coordinate.
    pub fn to_2d(&self, index: usize) -> GridResult<Coord> {
        let coord = self.coord_of(index);
        if index < self.len() {
            Ok(coord)
        } else {
            Err(self.out_of_range(coord))
        }
    }

    /// converts a coordinate into a linear index.
    pub fn to_1d(&self, coord: Coord) -> GridResult<usize> {
        if self.contains(coord) {
            Ok(coord.col + coord.row * self.height)
        } else {
            Err(self.out_of_range(coord))
        }
    }

    pub fn contains(&self, Coord { row, col }: Coord) -> bool {
        row < self.width && col < self.height
    }

    /// 64 bit digest of the board, equal for equal boards.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = MetroHash64::default();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn coord_of(&self, index: usize) -> Coord {
        coord!(index / self.height, index % self.height)
    }

    fn out_of_range(&self, coord: Coord) -> GridError {
        GridError::OutOfRange {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    fn neighbors(&self, center: Coord) -> Vec<Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&offset| center.offset(offset))
            .filter(|&coord| self.contains(coord))
            .map(|coord| {
                let index = coord.col + coord.row * self.height;
                Cell::new(self.cells[index], coord)
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.height) {
            for &alive in row {
                f.write_str(if alive { " *" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub use neighborhood::Neighborhood;
mod neighborhood;
