use rand::Rng;

use super::BoardError;

/// Fixed-size toroidal lattice of boolean cells, row-major storage.
///
/// Every in-range coordinate always holds a defined value; dimensions are
/// immutable for the lifetime of the instance. A grid has a single logical
/// owner and is not synchronized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Unchecked read for in-crate traversals; coordinates must be in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Flip one cell.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let i = self.index(row, col)?;
        self.cells[i] = !self.cells[i];
        Ok(())
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), BoardError> {
        let i = self.index(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Assign every cell from a per-cell predicate, row-major.
    pub fn set_all<F>(&mut self, mut predicate: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.cells[row * self.cols + col] = predicate(row, col);
            }
        }
    }

    pub fn clear(&mut self) {
        self.set_all(|_, _| false);
    }

    /// Bernoulli fill: each cell is alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.set_all(|_, _| rng.random_bool(density));
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }
}
