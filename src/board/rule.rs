use super::grid::Grid;

/// Count the 8 toroidal neighbors of `(row, col)`.
///
/// Neighbor coordinates wrap modulo the grid dimensions, so corner and edge
/// cells have exactly 8 neighbors like everyone else. The cell itself is
/// excluded from the count.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    let mut count = 0u8;
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = (row as isize + dr).rem_euclid(rows) as usize;
            let c = (col as isize + dc).rem_euclid(cols) as usize;
            if grid.at(r, c) {
                count += 1;
            }
        }
    }
    count
}

/// One generation forward under Conway's rule.
///
/// Pure: reads `grid`, returns a fresh buffer of identical dimensions. A live
/// cell survives on 2 or 3 neighbors; a dead cell is born on exactly 3. All
/// neighbor counts reflect the pre-step state.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    next.set_all(|row, col| {
        let neighbors = live_neighbors(grid, row, col);
        if grid.at(row, col) {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        }
    });
    next
}
