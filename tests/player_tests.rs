use broadside::{
    Orientation, PlacementError, Player, PlayerKind, ShotError, ShotOutcome, TOTAL_SHIP_CELLS,
};

use broadside::Orientation::{Horizontal, Vertical};

const LAYOUT: [(usize, usize, Orientation); 5] = [
    (0, 0, Horizontal),
    (2, 2, Vertical),
    (3, 4, Horizontal),
    (7, 5, Vertical),
    (4, 8, Horizontal),
];

#[test]
fn players_have_names_and_kinds() {
    let human = Player::human("Joe");
    assert_eq!(human.name(), "Joe");
    assert_eq!(human.kind(), PlayerKind::Human);
    assert!(!human.is_computer());

    let bot = Player::computer("HAL");
    assert!(bot.is_computer());
}

#[test]
fn place_fleet_commits_all_five() {
    let mut player = Player::human("Joe");
    player.place_fleet(&LAYOUT).unwrap();
    assert!(player.board().fleet_complete());
    assert_eq!(player.board().ship_map().count_ones(), TOTAL_SHIP_CELLS);
}

#[test]
fn place_fleet_is_all_or_nothing() {
    let mut player = Player::human("Joe");
    // battleship touches the carrier diagonally; the rest would be legal
    let bad: [(usize, usize, Orientation); 5] = [
        (0, 0, Horizontal),
        (1, 5, Vertical),
        (3, 4, Horizontal),
        (7, 5, Vertical),
        (4, 8, Horizontal),
    ];
    assert_eq!(player.place_fleet(&bad), Err(PlacementError::Touching));
    assert_eq!(player.board().placed_count(), 0);
    assert!(player.board().ship_map().is_empty());

    // a clean layout afterwards still works
    player.place_fleet(&LAYOUT).unwrap();
    assert!(player.board().fleet_complete());
}

#[test]
fn moves_target_the_opponent_board() {
    let attacker = Player::human("Joe");
    let mut defender = Player::computer("HAL");
    defender.place_fleet(&LAYOUT).unwrap();

    assert_eq!(
        attacker.make_move(defender.board_mut(), 0, 0).unwrap(),
        ShotOutcome::Hit
    );
    assert_eq!(
        attacker.make_move(defender.board_mut(), 1, 1).unwrap(),
        ShotOutcome::Miss
    );
    assert_eq!(
        attacker.make_move(defender.board_mut(), 1, 1).unwrap_err(),
        ShotError::AlreadyShot
    );
    // the attacker's own board is untouched
    assert!(attacker.board().hits().is_empty());
    assert!(attacker.board().misses().is_empty());
}

#[test]
fn all_ships_sunk_delegates_to_the_board() {
    let mut player = Player::human("Joe");
    assert!(!player.all_ships_sunk());
    player.place_fleet(&LAYOUT).unwrap();
    assert!(!player.all_ships_sunk());
}
