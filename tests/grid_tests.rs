//! Grid tests - placement validity, line clearing, atomic rejection

use blockfit::core::pieces::{Shape, RED};
use blockfit::core::{shape_by_name, Grid};
use blockfit::types::{Anchor, Difficulty, Rgb, GRID_HEIGHT, GRID_WIDTH};

const BLUE: Rgb = Rgb::new(0, 0, 255);

fn shape(name: &str) -> &'static Shape {
    shape_by_name(name).unwrap()
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    assert_eq!(grid.width(), 8);
    assert_eq!(grid.height(), 8);
    for y in 0..8 {
        for x in 0..8 {
            assert!(grid.is_empty_at(x, y), "Cell ({}, {}) should be empty", x, y);
        }
    }
    assert!(grid.is_blank());
}

#[test]
fn test_grid_out_of_bounds_is_never_empty() {
    let grid = Grid::new(8, 8);
    assert!(!grid.is_empty_at(-1, 0));
    assert!(!grid.is_empty_at(0, -1));
    assert!(!grid.is_empty_at(8, 0));
    assert!(!grid.is_empty_at(0, 8));
    assert_eq!(grid.get(8, 8), None);
    assert!(!grid.is_occupied(-1, -1));
}

#[test]
fn test_can_place_on_empty_grid() {
    let grid = Grid::new(8, 8);
    assert!(grid.can_place(shape("Square2x2"), Anchor::new(0, 0)));
    assert!(grid.can_place(shape("Square2x2"), Anchor::new(6, 6)));
    assert!(!grid.can_place(shape("Square2x2"), Anchor::new(7, 7)));
    assert!(!grid.can_place(shape("Single"), Anchor::new(-1, 3)));
}

#[test]
fn test_can_place_is_pure() {
    let grid = Grid::from_ascii(&["#.", ".."], RED);
    let before = grid.clone();
    for _ in 0..3 {
        assert!(!grid.can_place(shape("Domino_H"), Anchor::new(0, 1)));
        assert!(grid.can_place(shape("Domino_H"), Anchor::new(0, 0)));
    }
    assert_eq!(grid, before);
}

#[test]
fn test_three_in_a_row_completes_bottom_row() {
    // (0..5, 0) occupied, Line3_H dropped at (5, 0)
    let mut grid = Grid::new(8, 8);
    for x in 0..5 {
        grid.set(x, 0, Some(RED));
    }
    grid.set(2, 1, Some(RED));

    let result = grid.place(shape("Line3_H"), Anchor::new(5, 0), BLUE);
    assert!(result.success);
    assert_eq!(result.lines_cleared, 1);
    assert!(!result.is_combo);
    for x in 0..8 {
        assert!(grid.is_empty_at(x, 0), "row 0 should be cleared at x={}", x);
    }
    // Rows above are not shifted down
    assert!(grid.is_occupied(2, 1));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_row_and_column_clear_together() {
    // Bottom row and left column both missing only (0, 0)
    let mut grid = Grid::from_ascii(
        &[
            "#.......", "#.......", "#.......", "#.......", "#.......", "#.......", "#.......",
            ".#######",
        ],
        RED,
    );
    let placed = grid.place_detailed(shape("Single"), Anchor::new(0, 0), BLUE);
    assert!(placed.result.success);
    assert_eq!(placed.result.lines_cleared, 2);
    assert!(placed.result.is_combo);
    assert_eq!(placed.cleared.rows.as_slice(), &[0]);
    assert_eq!(placed.cleared.columns.as_slice(), &[0]);
    assert!(grid.is_blank());
}

#[test]
fn test_two_rows_count_as_combo() {
    let mut grid = Grid::from_ascii(
        &[
            "........", "........", "........", "........", "........", "........", "######..",
            "######..",
        ],
        RED,
    );
    let result = grid.place(shape("Square2x2"), Anchor::new(6, 0), BLUE);
    assert_eq!(result.lines_cleared, 2);
    assert!(result.is_combo);
    assert!(grid.is_blank());
}

#[test]
fn test_rejected_placement_leaves_grid_unchanged() {
    let mut grid = Grid::from_ascii(
        &[
            "........", "........", "........", "........", "........", "........", "........",
            "..#.....",
        ],
        RED,
    );
    let before = grid.clone();
    // Overlaps the occupied cell at (2, 0)
    let result = grid.place(shape("Line3_H"), Anchor::new(0, 0), BLUE);
    assert!(!result.success);
    assert_eq!(result.lines_cleared, 0);
    assert!(!result.is_combo);
    assert_eq!(grid, before);

    // Partly outside the grid
    let result = grid.place(shape("Line4_H"), Anchor::new(6, 4), BLUE);
    assert!(!result.success);
    assert_eq!(grid, before);
}

#[test]
fn test_negative_offsets_are_honoured() {
    static HOOK: Shape = Shape::new("Hook", &[(0, 0), (-1, 0), (0, -1)], RED, Difficulty::Hard);
    let mut grid = Grid::new(4, 4);
    assert!(!grid.can_place(&HOOK, Anchor::new(0, 0)));
    assert!(grid.can_place(&HOOK, Anchor::new(1, 1)));

    let result = grid.place(&HOOK, Anchor::new(1, 1), BLUE);
    assert!(result.success);
    assert!(grid.is_occupied(1, 1));
    assert!(grid.is_occupied(0, 1));
    assert!(grid.is_occupied(1, 0));
    assert_eq!(grid.occupied_count(), 3);
}

#[test]
fn test_zero_area_shape_never_fits() {
    static NOTHING: Shape = Shape::new("Nothing", &[], RED, Difficulty::Easy);
    let mut grid = Grid::new(8, 8);
    assert!(!grid.can_place(&NOTHING, Anchor::new(0, 0)));
    assert!(!grid.place(&NOTHING, Anchor::new(0, 0), BLUE).success);
    assert!(grid.is_blank());
}

#[test]
fn test_placed_cells_take_piece_colour() {
    let mut grid = Grid::new(8, 8);
    grid.place(shape("Domino_V"), Anchor::new(3, 3), BLUE);
    assert_eq!(grid.get(3, 3), Some(Some(BLUE)));
    assert_eq!(grid.get(3, 4), Some(Some(BLUE)));
    assert_eq!(grid.get(3, 5), Some(None));
}

#[test]
fn test_non_square_grid_clears_short_columns() {
    let mut grid = Grid::new(5, 3);
    let result = grid.place(shape("Line3_V"), Anchor::new(4, 0), BLUE);
    assert_eq!(result.lines_cleared, 1);
    assert!(grid.is_blank());
}

#[test]
#[should_panic(expected = "must be positive")]
fn test_zero_width_grid_is_rejected() {
    Grid::new(0, 8);
}

#[test]
fn test_wide_grid_clears_rows_and_columns() {
    // 40 columns x 3 rows: bottom row missing only x = 39, column 39 missing only y = 0
    let mut grid = Grid::new(40, 3);
    for x in 0..39 {
        grid.set(x, 0, Some(RED));
    }
    grid.set(39, 1, Some(RED));
    grid.set(39, 2, Some(RED));
    grid.set(5, 2, Some(RED));

    let placed = grid.place_detailed(shape("Single"), Anchor::new(39, 0), BLUE);
    assert!(placed.result.success);
    assert_eq!(placed.result.lines_cleared, 2);
    assert!(placed.result.is_combo);
    assert_eq!(placed.cleared.rows.as_slice(), &[0]);
    assert_eq!(placed.cleared.columns.as_slice(), &[39]);
    assert_eq!(grid.occupied_count(), 1);
    assert!(grid.is_occupied(5, 2));
}

#[test]
fn test_largest_grid_clears_every_line() {
    let mut grid = Grid::new(255, 255);
    for y in 0..255 {
        for x in 0..255 {
            if x != y {
                grid.set(x, y, Some(RED));
            }
        }
    }
    // Fill the diagonal except (0, 0); then the last single completes everything
    for i in 1..255 {
        grid.set(i, i, Some(RED));
    }
    let placed = grid.place_detailed(shape("Single"), Anchor::new(0, 0), BLUE);
    assert_eq!(placed.result.lines_cleared, 510);
    assert_eq!(placed.cleared.rows.len(), 255);
    assert_eq!(placed.cleared.columns.len(), 255);
    assert!(grid.is_blank());
}
