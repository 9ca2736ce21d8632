#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
pub mod placement;
mod player;
mod ship;
pub mod strategy;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod view;

pub use bitboard::{BitBoard, Cells, GridError};
pub use board::{Board, ShipState};
pub use common::*;
pub use config::{Grid, BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
pub use game::{Game, OwnCell, Phase, PlacementUpdate, Side};
pub use player::{Player, PlayerKind};
pub use ship::{Orientation, Ship, ShipClass};
#[cfg(feature = "std")]
pub use logging::init_logging;
