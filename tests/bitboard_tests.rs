use broadside::{BitBoard, Grid, GridError};

#[test]
fn set_get_count() {
    let mut grid = Grid::new();
    assert!(grid.is_empty());
    grid.set(0, 0).unwrap();
    grid.set(9, 9).unwrap();
    grid.set(4, 7).unwrap();
    assert_eq!(grid.count_ones(), 3);
    assert!(grid.get(4, 7).unwrap());
    assert!(!grid.get(4, 6).unwrap());
    assert!(grid.contains(9, 9));
    assert!(!grid.contains(10, 10));
}

#[test]
fn out_of_bounds_reported() {
    let mut grid = Grid::new();
    assert_eq!(
        grid.set(10, 0).unwrap_err(),
        GridError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        grid.get(0, 10).unwrap_err(),
        GridError::OutOfBounds { row: 0, col: 10 }
    );
}

#[test]
fn shifts_do_not_wrap_columns() {
    let mut grid = Grid::new();
    grid.set(3, 0).unwrap();
    assert!(grid.shift_west().is_empty());
    assert!(grid.shift_east().contains(3, 1));

    let mut grid = Grid::new();
    grid.set(3, 9).unwrap();
    assert!(grid.shift_east().is_empty());
    assert!(grid.shift_west().contains(3, 8));
}

#[test]
fn shifts_drop_edge_rows() {
    let mut grid = Grid::new();
    grid.set(0, 4).unwrap();
    assert!(grid.shift_north().is_empty());
    assert!(grid.shift_south().contains(1, 4));

    let mut grid = Grid::new();
    grid.set(9, 4).unwrap();
    assert!(grid.shift_south().is_empty());
    assert!(grid.shift_north().contains(8, 4));
}

#[test]
fn dilation_covers_moore_neighborhood() {
    let mut grid = Grid::new();
    grid.set(5, 5).unwrap();
    let grown = grid.dilated();
    assert_eq!(grown.count_ones(), 9);
    for r in 4..=6 {
        for c in 4..=6 {
            assert!(grown.contains(r, c));
        }
    }
}

#[test]
fn dilation_clips_at_corners_and_edges() {
    let mut corner = Grid::new();
    corner.set(0, 0).unwrap();
    let grown = corner.dilated();
    assert_eq!(grown.count_ones(), 4);
    assert!(grown.contains(0, 0));
    assert!(grown.contains(0, 1));
    assert!(grown.contains(1, 0));
    assert!(grown.contains(1, 1));

    let mut edge = Grid::new();
    edge.set(3, 0).unwrap();
    let grown = edge.dilated();
    assert_eq!(grown.count_ones(), 6);
    // nothing may leak into the far column
    for r in 0..10 {
        assert!(!grown.contains(r, 9));
    }
}

#[test]
fn complement_stays_within_grid() {
    let empty = Grid::new();
    let full = !empty;
    assert_eq!(full.count_ones(), 100);
    assert_eq!((!full).count_ones(), 0);
}

#[test]
fn cells_iterate_in_row_major_order() {
    let mut grid = Grid::new();
    grid.set(2, 1).unwrap();
    grid.set(0, 3).unwrap();
    grid.set(2, 0).unwrap();
    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells, vec![(0, 3), (2, 0), (2, 1)]);
}

#[test]
fn works_for_other_sizes() {
    let mut small = BitBoard::<u16, 4>::new();
    small.set(3, 3).unwrap();
    assert_eq!(small.dilated().count_ones(), 4);
}
