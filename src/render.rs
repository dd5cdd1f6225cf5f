//! Text view of the lattice for the polling render collaborator.

use crate::board::grid::Grid;
use crate::music::pitch::PitchTable;

/// One line per row, `#` for live cells, `.` for dead ones.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * 3 + 1));
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let mark = if grid.at(row, col) { '#' } else { '.' };
            out.push_str(&format!("{mark:<3}"));
        }
        let line_end = out.trim_end().len();
        out.truncate(line_end);
        out.push('\n');
    }
    out
}

/// Grid preceded by a header of per-column note names.
pub fn render_with_labels(grid: &Grid, pitches: &PitchTable) -> String {
    let mut out = String::new();
    for label in pitches.labels(grid.cols()) {
        out.push_str(&format!("{label:<3}"));
    }
    let header_end = out.trim_end().len();
    out.truncate(header_end);
    out.push('\n');
    out.push_str(&render_grid(grid));
    out
}
