//! Toroidal cell lattice and the rule that advances it.

pub mod grid;
pub mod rule;

/// Errors returned by lattice operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A grid dimension is zero.
    InvalidDimension { rows: usize, cols: usize },
    /// A coordinate lies outside the lattice.
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidDimension { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            BoardError::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(f, "cell ({row}, {col}) outside {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for BoardError {}
