use broadside::placement;
use broadside::{Board, Orientation, PlacementError};

use broadside::Orientation::{Horizontal, Vertical};

// Battleship (length 4) at (2, 3): covers (2,3)..(2,6).
fn board_with_battleship() -> Board {
    let mut board = Board::new();
    board.place(1, 2, 3, Horizontal).unwrap();
    board
}

#[test]
fn rejects_overlap_and_touch() {
    let board = board_with_battleship();
    // overlaps the tail
    assert!(!board.is_valid_placement(2, 6, 4, Horizontal));
    // diagonally adjacent, one row above
    assert!(!board.is_valid_placement(1, 2, 4, Horizontal));
    // adjacent in the row below
    assert!(!board.is_valid_placement(3, 4, 4, Horizontal));
    assert!(!board.is_valid_placement(3, 7, 4, Horizontal));
}

#[test]
fn accepts_with_one_cell_gap() {
    let board = board_with_battleship();
    // two rows below the ship: a full row of water in between
    assert!(board.is_valid_placement(4, 3, 4, Horizontal));
    assert!(board.is_valid_placement(0, 8, 4, Vertical));
    // far corner
    assert!(board.is_valid_placement(9, 0, 4, Horizontal));
}

#[test]
fn rejects_off_board() {
    let board = Board::new();
    assert!(!board.is_valid_placement(9, 8, 4, Horizontal));
    assert!(!board.is_valid_placement(8, 0, 4, Vertical));
    // exact fit is fine
    assert!(board.is_valid_placement(0, 6, 4, Horizontal));
    assert!(board.is_valid_placement(6, 0, 4, Vertical));
}

#[test]
fn clearance_distinguishes_overlap_from_touch() {
    let board = board_with_battleship();
    let map = board.ship_map();

    let overlapping = placement::footprint(2, 6, 4, Horizontal).unwrap();
    assert_eq!(
        placement::clearance(&map, &overlapping),
        Err(PlacementError::Overlap)
    );

    let touching = placement::footprint(1, 2, 4, Horizontal).unwrap();
    assert_eq!(
        placement::clearance(&map, &touching),
        Err(PlacementError::Touching)
    );

    let clear = placement::footprint(4, 3, 4, Horizontal).unwrap();
    assert_eq!(placement::clearance(&map, &clear), Ok(()));
}

#[test]
fn footprint_bounds() {
    assert_eq!(
        placement::footprint(9, 8, 4, Horizontal),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        placement::footprint(8, 0, 4, Vertical),
        Err(PlacementError::OutOfBounds)
    );
    let mask = placement::footprint(2, 3, 4, Horizontal).unwrap();
    assert_eq!(mask.count_ones(), 4);
    for c in 3..7 {
        assert!(mask.contains(2, c));
    }
}

#[test]
fn validation_has_no_side_effects() {
    let board = board_with_battleship();
    let before = board.ship_map();
    let _ = board.is_valid_placement(1, 2, 4, Horizontal);
    let _ = board.is_valid_placement(4, 3, 4, Horizontal);
    assert_eq!(board.ship_map(), before);
    assert_eq!(board.placed_count(), 1);
}
