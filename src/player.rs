//! Players: a board, a fleet and a controller kind.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::board::Board;
use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::NUM_SHIPS;
use crate::ship::Orientation;

/// Who drives a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    Human,
    Computer,
}

/// One side of a match: a named board owner with the canonical fleet.
pub struct Player {
    name: String,
    kind: PlayerKind,
    board: Board,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Player {
            name: name.into(),
            kind,
            board: Board::new(),
        }
    }

    /// Convenience constructor for a human-controlled player.
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    /// Convenience constructor for a computer-controlled player.
    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Computer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Place the whole fleet at once, in canonical order, all-or-nothing:
    /// the placements are committed only if all five are legal, otherwise
    /// the player's board is left empty and the first error is returned.
    pub fn place_fleet(
        &mut self,
        placements: &[(usize, usize, Orientation); NUM_SHIPS],
    ) -> Result<(), PlacementError> {
        let mut board = Board::new();
        for (index, &(row, col, orientation)) in placements.iter().enumerate() {
            if let Err(e) = board.place(index, row, col, orientation) {
                self.board.reset();
                return Err(e);
            }
        }
        self.board = board;
        Ok(())
    }

    /// Fire at the opponent's board. A player never attacks its own grid.
    pub fn make_move(
        &self,
        opponent: &mut Board,
        row: usize,
        col: usize,
    ) -> Result<ShotOutcome, ShotError> {
        opponent.shoot(row, col)
    }

    /// True once this player's fleet is complete and fully sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.board.all_sunk()
    }
}
