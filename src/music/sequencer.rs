use crate::board::grid::Grid;

use super::pitch::PitchTable;

/// Scan order used when turning a grid snapshot into a note sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Rows outer, columns inner.
    RowMajor,
    /// Columns outer, rows inner: repeats of one column's pitch come out
    /// consecutively instead of interleaved.
    ColumnMajor,
}

/// Ordered pitch sequence for every live cell, in strict traversal order.
///
/// Pure: reads the grid and table, mutates neither. The result length always
/// equals the live-cell count; nothing is reordered, deduplicated, or
/// filtered beyond aliveness. Recomputed per request, never cached.
pub fn collect(grid: &Grid, pitches: &PitchTable, traversal: Traversal) -> Vec<u8> {
    let mut out = Vec::with_capacity(grid.live_count());
    match traversal {
        Traversal::RowMajor => {
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    if grid.at(row, col) {
                        out.push(pitches.pitch_for_column(col));
                    }
                }
            }
        }
        Traversal::ColumnMajor => {
            for col in 0..grid.cols() {
                for row in 0..grid.rows() {
                    if grid.at(row, col) {
                        out.push(pitches.pitch_for_column(col));
                    }
                }
            }
        }
    }
    out
}

pub fn collect_row_order(grid: &Grid, pitches: &PitchTable) -> Vec<u8> {
    collect(grid, pitches, Traversal::RowMajor)
}

pub fn collect_column_order(grid: &Grid, pitches: &PitchTable) -> Vec<u8> {
    collect(grid, pitches, Traversal::ColumnMajor)
}
