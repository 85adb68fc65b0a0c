use rand::Rng;

use super::{Cell, GridError};

/// Grid owns a fixed-size 2D buffer of cells.
/// Cells are stored row-major in one contiguous Vec; coordinates outside
/// `[0, width) x [0, height)` are rejected, never wrapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell Empty.
    ///
    /// Both dimensions must be non-zero and small enough that every
    /// coordinate fits in an `i32`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let max = i32::MAX as usize;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to a 1D index, rejecting anything off-grid
    fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width + x as usize)
    }

    /// Get the cell at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at (x, y)
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip the cell at (x, y) and return its new state
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<Cell, GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Unchecked read for in-bounds scans (transition engine, rendering).
    #[inline]
    pub(crate) fn cell_at(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// Unchecked write for in-bounds scans.
    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y * self.width + x] = cell;
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Reset every cell to Empty
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Empty);
    }

    /// Fill the grid at random; each cell is alive with probability `density`
    /// (clamped to [0, 1]; NaN counts as 0).
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::Alive
            } else {
                Cell::Empty
            };
        });
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}
