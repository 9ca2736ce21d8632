#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, strategy, view, Game, GameError, Phase, Player, ShotError, ShotOutcome, Side,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players battle each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { name, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            play(Game::versus_computer(name), &mut rng)
        }
        Commands::Watch { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            watch(&mut rng)
        }
    }
}

#[cfg(feature = "std")]
fn place_fleet_interactively(game: &mut Game, rng: &mut SmallRng) -> anyhow::Result<()> {
    println!("\n════════════════════════════════════════════════════════════");
    println!("                    SHIP PLACEMENT PHASE");
    println!("════════════════════════════════════════════════════════════");
    println!("\nInstructions:");
    println!("  • Enter coordinates and orientation (e.g., A5 H or A5 V)");
    println!("  • H = Horizontal, V = Vertical");
    println!("  • Ships may not touch each other, not even diagonally");
    println!("  • Press ENTER for random placement, 'reset' to start over\n");

    while let Some(class) = game.next_ship(Side::A) {
        view::print_own_board(game, Side::A);
        let placed = game.player(Side::A).board().placed_count();
        println!(
            "\nShip {}/{}: {} (length {})",
            placed + 1,
            broadside::NUM_SHIPS,
            class.name(),
            class.length()
        );
        let line = read_line("Enter placement (ENTER for random, 'reset' to start over): ")?;

        if line.is_empty() {
            let board = game.player(Side::A).board();
            let (row, col, orientation) = strategy::random_placement(rng, board, placed)
                .map_err(|e| anyhow::anyhow!(e))?;
            game.place_ship(Side::A, row, col, orientation)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!(
                "✓ {} randomly placed at {}",
                class.name(),
                view::coord_label(row, col)
            );
            continue;
        }

        if line.eq_ignore_ascii_case("reset") {
            game.reset_placement(Side::A).map_err(|e| anyhow::anyhow!(e))?;
            println!("✓ Placement cleared, starting over.");
            continue;
        }

        let mut parts = line.split_whitespace();
        let coord_str = match parts.next() {
            Some(s) => s,
            None => continue,
        };
        let (row, col) = match view::parse_coord(coord_str) {
            Ok(coord) => coord,
            Err(e) => {
                println!("✗ Error: {}", e);
                continue;
            }
        };
        let orientation = match parts.next().map(view::parse_orientation) {
            Some(Some(o)) => o,
            None => broadside::Orientation::Horizontal,
            Some(None) => {
                println!("✗ Error: invalid orientation - use H or V");
                continue;
            }
        };

        match game.place_ship(Side::A, row, col, orientation) {
            Ok(_) => {
                println!(
                    "✓ {} placed successfully at {}",
                    class.name(),
                    view::coord_label(row, col)
                );
            }
            Err(e) => {
                println!("✗ Error: {}", e);
                println!("   Hint: ships need a clear cell of water all around them.");
            }
        }
    }
    println!("\n✓ All ships placed! Ready to begin battle.\n");
    Ok(())
}

#[cfg(feature = "std")]
fn play(mut game: Game, rng: &mut SmallRng) -> anyhow::Result<()> {
    place_fleet_interactively(&mut game, rng)?;

    println!("Computer is placing its fleet...");
    game.auto_place(Side::B, rng).map_err(|e| anyhow::anyhow!(e))?;

    while game.winner().is_none() {
        match game.phase() {
            Phase::Battling(Side::A) => {
                println!("\n════════════════════════════════════════════════════════════");
                println!("                        YOUR TURN");
                println!("════════════════════════════════════════════════════════════");
                view::print_match_view(&game, Side::A);
                let line = read_line("\nEnter target coordinates (e.g. B7): ")?;
                let (row, col) = match view::parse_coord(&line) {
                    Ok(coord) => coord,
                    Err(e) => {
                        println!("✗ Invalid coordinate: {}", e);
                        continue;
                    }
                };
                match game.attack(Side::A, row, col) {
                    Ok(ShotOutcome::Hit) => {
                        println!(
                            "\n🎯 HIT! Your shot at {} struck an enemy ship! Fire again.",
                            view::coord_label(row, col)
                        );
                    }
                    Ok(ShotOutcome::Sunk(class)) => {
                        println!("\n💥 SUNK! You destroyed the enemy's {}! Fire again.", class);
                    }
                    Ok(ShotOutcome::Miss) => {
                        println!(
                            "\n💧 Miss. Your shot at {} hit only water.",
                            view::coord_label(row, col)
                        );
                    }
                    Err(GameError::Shot(ShotError::AlreadyShot)) => {
                        println!("✗ You already targeted that cell! Choose another.");
                    }
                    Err(e) => {
                        println!("✗ Error: {}", e);
                    }
                }
            }
            Phase::Battling(Side::B) => {
                let ((row, col), outcome) =
                    game.computer_turn(rng).map_err(|e| anyhow::anyhow!(e))?;
                match outcome {
                    ShotOutcome::Hit => {
                        println!(
                            "⚠️  ENEMY HIT! They struck your ship at {}",
                            view::coord_label(row, col)
                        );
                    }
                    ShotOutcome::Sunk(class) => {
                        println!(
                            "💀 SHIP LOST! Enemy destroyed your {} at {}",
                            class,
                            view::coord_label(row, col)
                        );
                    }
                    ShotOutcome::Miss => {
                        println!("✓ Enemy missed at {}", view::coord_label(row, col));
                    }
                }
            }
            _ => break,
        }
    }

    println!("\n════════════════════════════════════════════════════════════");
    println!("                        GAME OVER");
    println!("════════════════════════════════════════════════════════════\n");
    view::print_match_view(&game, Side::A);
    match game.winner() {
        Some(Side::A) => {
            println!("\n🎉🎉🎉 VICTORY! 🎉🎉🎉");
            println!("You have sunk all enemy ships!");
        }
        Some(Side::B) => {
            println!("\n💀 DEFEAT 💀");
            println!("All your ships have been destroyed.");
        }
        None => {}
    }
    Ok(())
}

#[cfg(feature = "std")]
fn watch(rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut game = Game::new(Player::computer("Red"), Player::computer("Blue"));
    game.auto_place(Side::A, rng).map_err(|e| anyhow::anyhow!(e))?;
    game.auto_place(Side::B, rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut turns = 0usize;
    while game.winner().is_none() {
        let side = match game.phase() {
            Phase::Battling(side) => side,
            _ => break,
        };
        let name = game.player(side).name().to_string();
        let ((row, col), outcome) = game.computer_turn(rng).map_err(|e| anyhow::anyhow!(e))?;
        turns += 1;
        let desc = match outcome {
            ShotOutcome::Hit => "hit".to_string(),
            ShotOutcome::Miss => "miss".to_string(),
            ShotOutcome::Sunk(class) => format!("sunk the {}", class),
        };
        println!("{:4}. {} fires at {}: {}", turns, name, view::coord_label(row, col), desc);
    }

    if let Some(winner) = game.winner() {
        println!("\n{} wins after {} shots.", game.player(winner).name(), turns);
        println!("\nFinal boards:");
        println!("\n{}:", game.player(Side::A).name());
        view::print_own_board(&game, Side::A);
        println!("\n{}:", game.player(Side::B).name());
        view::print_own_board(&game, Side::B);
    }
    Ok(())
}
