//! Match orchestration: phases, turn ownership and win detection.
//!
//! The `Game` value owns both players and is the only place phase
//! transitions happen. Placement runs side A first, then side B; battle
//! alternates turns except that a hit or a sink retains the turn, for both
//! players alike. The first fleet fully sunk ends the match.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::common::{CellShot, GameError, ShotOutcome};
use crate::config::{FLEET, NUM_SHIPS};
use crate::player::Player;
use crate::ship::{Orientation, ShipClass};
use crate::strategy;
use crate::board::ShipState;
use rand::Rng;

/// One side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Current phase of a match. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The named side is placing its fleet.
    Placing(Side),
    /// The named side owns the current turn.
    Battling(Side),
    /// The named side has won.
    Finished(Side),
}

/// Result of an accepted placement: what was placed, and where the match
/// stands afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementUpdate {
    pub class: ShipClass,
    pub phase: Phase,
}

/// Owner-visible view of one cell on a player's own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnCell {
    pub ship: Option<ShipClass>,
    pub shot: CellShot,
}

/// A match between two players.
pub struct Game {
    players: [Player; 2],
    phase: Phase,
    /// Next fleet slot each side will place.
    cursor: [usize; 2],
}

impl Game {
    /// Start a match; side A places first.
    pub fn new(player_a: Player, player_b: Player) -> Self {
        Game {
            players: [player_a, player_b],
            phase: Phase::Placing(Side::A),
            cursor: [0, 0],
        }
    }

    /// Convenience constructor for the human-vs-computer setup.
    pub fn versus_computer(name: impl Into<String>) -> Self {
        Self::new(Player::human(name), Player::computer("Computer"))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// The winning side, once the match is decided.
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    /// The fleet ship `side` would place next, while it owns the placement
    /// window.
    pub fn next_ship(&self, side: Side) -> Option<ShipClass> {
        match self.phase {
            Phase::Placing(p) if p == side => FLEET.get(self.cursor[side.index()]).copied(),
            _ => None,
        }
    }

    /// Place the next fleet ship for `side` at `(row, col)`.
    ///
    /// Rejected placements leave the board and the placement cursor
    /// untouched. Accepting the fifth ship moves the match on: side A hands
    /// the placement window to side B, side B opens the battle with side A
    /// on turn.
    pub fn place_ship(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<PlacementUpdate, GameError> {
        self.check_placing(side)?;
        let i = side.index();
        let index = self.cursor[i];
        let class = FLEET[index];
        self.players[i].board_mut().place(index, row, col, orientation)?;
        self.cursor[i] += 1;
        #[cfg(feature = "std")]
        log::debug!(
            "{:?} placed {} at ({}, {}) {:?}",
            side,
            class.name(),
            row,
            col,
            orientation
        );
        if self.cursor[i] == NUM_SHIPS {
            self.phase = match side {
                Side::A => Phase::Placing(Side::B),
                Side::B => Phase::Battling(Side::A),
            };
            #[cfg(feature = "std")]
            log::info!("{:?} fleet complete, phase is now {:?}", side, self.phase);
        }
        Ok(PlacementUpdate {
            class,
            phase: self.phase,
        })
    }

    /// Clear `side`'s board and placement cursor so the fleet can be laid
    /// out again. Only valid while that side owns the placement window.
    pub fn reset_placement(&mut self, side: Side) -> Result<(), GameError> {
        self.check_placing(side)?;
        let i = side.index();
        self.players[i].board_mut().reset();
        self.cursor[i] = 0;
        Ok(())
    }

    /// Place the remainder of `side`'s fleet at random. Used for computer
    /// players and as a shortcut for humans.
    pub fn auto_place<R: Rng + ?Sized>(&mut self, side: Side, rng: &mut R) -> Result<(), GameError> {
        self.check_placing(side)?;
        while self.cursor[side.index()] < NUM_SHIPS {
            let index = self.cursor[side.index()];
            let (row, col, orientation) =
                strategy::random_placement(rng, self.players[side.index()].board(), index)?;
            self.place_ship(side, row, col, orientation)?;
        }
        Ok(())
    }

    /// Resolve an attack by `side` against the opposing board.
    ///
    /// A miss hands the turn over; a hit or a sink retains it. The attack
    /// that sinks the last opposing ship ends the match in `side`'s favor.
    pub fn attack(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
    ) -> Result<ShotOutcome, GameError> {
        match self.phase {
            Phase::Battling(owner) if owner == side => {}
            Phase::Battling(_) => return Err(GameError::NotYourTurn),
            Phase::Placing(_) => return Err(GameError::NotBattling),
            Phase::Finished(_) => return Err(GameError::MatchOver),
        }
        let outcome = {
            let (attacker, defender) = self.split_mut(side);
            attacker.make_move(defender.board_mut(), row, col)?
        };
        #[cfg(feature = "std")]
        log::debug!("{:?} fired at ({}, {}): {:?}", side, row, col, outcome);
        if self.player(side.opponent()).all_ships_sunk() {
            self.phase = Phase::Finished(side);
            #[cfg(feature = "std")]
            log::info!("{:?} wins", side);
        } else if outcome == ShotOutcome::Miss {
            self.phase = Phase::Battling(side.opponent());
        }
        Ok(outcome)
    }

    /// Select and submit a move for the computer-controlled turn owner.
    /// Returns the chosen coordinate along with the outcome.
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<((usize, usize), ShotOutcome), GameError> {
        let side = match self.phase {
            Phase::Battling(side) => side,
            Phase::Placing(_) => return Err(GameError::NotBattling),
            Phase::Finished(_) => return Err(GameError::MatchOver),
        };
        if !self.players[side.index()].is_computer() {
            return Err(GameError::NotComputer);
        }
        let defender = self.player(side.opponent());
        let (row, col) =
            strategy::random_attack(rng, defender.board()).ok_or(GameError::NoTargetsLeft)?;
        let outcome = self.attack(side, row, col)?;
        Ok(((row, col), outcome))
    }

    /// Owner-visible cell view: occupancy plus shot state on `side`'s own
    /// board.
    pub fn own_cell(&self, side: Side, row: usize, col: usize) -> OwnCell {
        let board = self.player(side).board();
        OwnCell {
            ship: board.ship_at(row, col),
            shot: board.shot(row, col),
        }
    }

    /// Opponent-facing cell view: only the shot state of the opposing
    /// board, never its occupancy.
    pub fn tracking_cell(&self, side: Side, row: usize, col: usize) -> CellShot {
        self.player(side.opponent()).board().shot(row, col)
    }

    /// Fleet status summary for `side`.
    pub fn ship_states(&self, side: Side) -> [ShipState; NUM_SHIPS] {
        self.player(side).board().ship_states()
    }

    fn check_placing(&self, side: Side) -> Result<(), GameError> {
        match self.phase {
            Phase::Placing(p) if p == side => Ok(()),
            Phase::Placing(_) => Err(GameError::NotYourTurn),
            Phase::Battling(_) => Err(GameError::NotPlacing),
            Phase::Finished(_) => Err(GameError::MatchOver),
        }
    }

    fn split_mut(&mut self, side: Side) -> (&Player, &mut Player) {
        let (left, right) = self.players.split_at_mut(1);
        match side {
            Side::A => (&left[0], &mut right[0]),
            Side::B => (&right[0], &mut left[0]),
        }
    }
}
