use rand::SeedableRng;
use rand::rngs::SmallRng;

use cellsong::board::grid::Grid;
use cellsong::music::pitch::PitchTable;
use cellsong::music::sequencer::{collect_column_order, collect_row_order};

fn grid_with(cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(8, 14).unwrap();
    for &(row, col) in cells {
        grid.set(row, col, true).unwrap();
    }
    grid
}

fn two_note_table() -> PitchTable {
    PitchTable::new(vec![55, 57]).unwrap()
}

#[test]
fn single_row_orders_coincide() {
    let grid = grid_with(&[(0, 0), (0, 1)]);
    let table = two_note_table();
    assert_eq!(collect_row_order(&grid, &table), vec![55, 57]);
    assert_eq!(collect_column_order(&grid, &table), vec![55, 57]);
}

#[test]
fn shared_column_repeats_its_pitch() {
    // Two rows of column 0: pitch depends on the column only.
    let grid = grid_with(&[(0, 0), (1, 0)]);
    let table = two_note_table();
    assert_eq!(collect_row_order(&grid, &table), vec![55, 55]);
    assert_eq!(collect_column_order(&grid, &table), vec![55, 55]);
}

#[test]
fn traversal_order_differs_when_rows_and_columns_mix() {
    let grid = grid_with(&[(0, 0), (0, 1), (1, 0)]);
    let table = two_note_table();
    // Row order interleaves the repeated column-0 pitch.
    assert_eq!(collect_row_order(&grid, &table), vec![55, 57, 55]);
    // Column order exhausts column 0 before moving on.
    assert_eq!(collect_column_order(&grid, &table), vec![55, 55, 57]);
}

#[test]
fn sequence_length_equals_live_count() {
    let mut grid = Grid::new(8, 14).unwrap();
    let mut rng = SmallRng::seed_from_u64(1234);
    grid.randomize(&mut rng, 0.5);
    let table = PitchTable::default();

    assert_eq!(collect_row_order(&grid, &table).len(), grid.live_count());
    assert_eq!(collect_column_order(&grid, &table).len(), grid.live_count());
}

#[test]
fn columns_beyond_table_length_reuse_pitches() {
    // 14 columns against a 2-entry table: column index wraps via modulo.
    let grid = grid_with(&[(0, 12), (0, 13)]);
    let table = two_note_table();
    assert_eq!(collect_row_order(&grid, &table), vec![55, 57]);
}

#[test]
fn collection_does_not_mutate_the_grid() {
    let grid = grid_with(&[(2, 3), (5, 9)]);
    let table = PitchTable::default();
    let snapshot = grid.clone();
    let _ = collect_row_order(&grid, &table);
    let _ = collect_column_order(&grid, &table);
    assert_eq!(grid, snapshot);
}
