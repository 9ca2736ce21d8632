#![cfg(feature = "std")]

//! Terminal rendering and coordinate parsing for the demo front-end.
//!
//! Everything here reads the match through the `Game` query surface; the
//! engine never depends on this module.

use crate::common::CellShot;
use crate::config::BOARD_SIZE;
use crate::game::{Game, Side};
use crate::ship::Orientation;

/// Format a coordinate the way players type it: column letter, 1-based row.
pub fn coord_label(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse a coordinate like `A5` or `j10` into `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.len() < 2 {
        return Err("need a column letter and a row number (e.g. A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("no column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("row {} out of bounds - must be 1-10", row_str));
    }
    Ok((row - 1, col))
}

/// Parse an orientation letter (`H` or `V`, either case).
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.chars().next()?.to_ascii_uppercase() {
        'H' => Some(Orientation::Horizontal),
        'V' => Some(Orientation::Vertical),
        _ => None,
    }
}

fn print_header() {
    print!("    ║  ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!(" ║");
}

/// Print `side`'s own board with ships revealed, plus the fleet status.
pub fn print_own_board(game: &Game, side: Side) {
    println!("    ╔═══════════════════════╗");
    print_header();
    println!("    ╠═══════════════════════╣");
    for r in 0..BOARD_SIZE {
        print!("    ║ {:2}", r + 1);
        for c in 0..BOARD_SIZE {
            let cell = game.own_cell(side, r, c);
            let ch = match cell.shot {
                CellShot::Hit => 'X',
                CellShot::Miss => 'o',
                CellShot::Untried => {
                    if cell.ship.is_some() {
                        'S'
                    } else {
                        '.'
                    }
                }
            };
            print!(" {}", ch);
        }
        println!(" ║");
    }
    println!("    ╚═══════════════════════╝");
    println!("    Legend: S=Ship  X=Hit  o=Miss  .=Water");

    println!("\n    Fleet:");
    for state in game.ship_states(side) {
        let status = if state.sunk {
            "SUNK"
        } else if state.position.is_some() {
            "Afloat"
        } else {
            "Not placed"
        };
        println!(
            "      {} ({}): {}",
            state.class.name(),
            state.class.length(),
            status
        );
    }
}

/// Print what `side` knows about the opposing board: shots only, no ships.
pub fn print_tracking_board(game: &Game, side: Side) {
    println!("    ╔═══════════════════════╗");
    print_header();
    println!("    ╠═══════════════════════╣");
    for r in 0..BOARD_SIZE {
        print!("    ║ {:2}", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = match game.tracking_cell(side, r, c) {
                CellShot::Hit => 'X',
                CellShot::Miss => 'o',
                CellShot::Untried => '.',
            };
            print!(" {}", ch);
        }
        println!(" ║");
    }
    println!("    ╚═══════════════════════╝");
    println!("    Legend: X=Hit  o=Miss  .=Unknown");
}

/// Opponent board on top, own board below.
pub fn print_match_view(game: &Game, side: Side) {
    println!("Opponent board:");
    print_tracking_board(game, side);
    println!("\nYour board:");
    print_own_board(game, side);
}
