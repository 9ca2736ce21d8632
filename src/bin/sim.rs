use broadside::{Game, Phase, Player, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Game::new(Player::computer("player1"), Player::computer("player2"));
    game.auto_place(Side::A, &mut rng1).map_err(|e| anyhow::anyhow!(e))?;
    game.auto_place(Side::B, &mut rng2).map_err(|e| anyhow::anyhow!(e))?;

    let mut shots = [0usize; 2];
    while game.winner().is_none() {
        let side = match game.phase() {
            Phase::Battling(side) => side,
            _ => break,
        };
        let rng = match side {
            Side::A => &mut rng1,
            Side::B => &mut rng2,
        };
        game.computer_turn(rng).map_err(|e| anyhow::anyhow!(e))?;
        match side {
            Side::A => shots[0] += 1,
            Side::B => shots[1] += 1,
        }
    }

    let winner = match game.winner() {
        Some(Side::A) => Some("player1"),
        Some(Side::B) => Some("player2"),
        None => None,
    };

    let result = json!({
        "player1": {"shots": shots[0]},
        "player2": {"shots": shots[1]},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
