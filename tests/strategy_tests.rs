use broadside::strategy;
use broadside::{Board, CellShot, StrategyError, NUM_SHIPS, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for i in 0..NUM_SHIPS {
        let (r, c, o) = strategy::random_placement(&mut rng, &board, i).unwrap();
        board.place(i, r, c, o).unwrap();
    }
    board
}

#[test]
fn random_placement_fills_a_fresh_board() {
    for seed in 0..32 {
        let board = random_board(seed);
        assert!(board.fleet_complete(), "seed {}", seed);
        assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    }
}

#[test]
fn random_placement_respects_the_validator() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    for i in 0..NUM_SHIPS {
        let (r, c, o) = strategy::random_placement(&mut rng, &board, i).unwrap();
        assert!(board.is_valid_placement(r, c, broadside::FLEET[i].length(), o));
        board.place(i, r, c, o).unwrap();
    }
}

#[test]
fn random_placement_is_deterministic_per_seed() {
    let mut a = SmallRng::seed_from_u64(99);
    let mut b = SmallRng::seed_from_u64(99);
    let board = Board::new();
    assert_eq!(
        strategy::random_placement(&mut a, &board, 0).unwrap(),
        strategy::random_placement(&mut b, &board, 0).unwrap()
    );
}

#[test]
fn random_attack_only_picks_untried_cells() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = random_board(11);
    board.shoot(0, 0).unwrap();
    board.shoot(5, 5).unwrap();
    board.shoot(9, 9).unwrap();

    for _ in 0..50 {
        let (r, c) = strategy::random_attack(&mut rng, &board).unwrap();
        assert_eq!(board.shot(r, c), CellShot::Untried);
    }
}

#[test]
fn random_attack_exhausts_to_none() {
    let mut rng = SmallRng::seed_from_u64(5);
    // no ships: every shot is a miss, so all 100 cells can be resolved
    let mut board = Board::new();
    for r in 0..10 {
        for c in 0..10 {
            board.shoot(r, c).unwrap();
        }
    }
    assert_eq!(strategy::random_attack(&mut rng, &board), None);
}

#[test]
fn invalid_slot_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let board = Board::new();
    assert_eq!(
        strategy::random_placement(&mut rng, &board, NUM_SHIPS),
        Err(StrategyError::Exhausted)
    );
}
