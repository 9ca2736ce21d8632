//! Shared outcome and error types for the game engine.

use core::fmt;

use crate::bitboard::GridError;
use crate::ship::ShipClass;

/// Resolved state of one cell in a board's shot history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellShot {
    /// Never attacked.
    Untried,
    /// Attacked and struck a ship.
    Hit,
    /// Attacked and hit only water.
    Miss,
}

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The shot hit only water.
    Miss,
    /// The shot struck a ship that still floats.
    Hit,
    /// The shot struck a ship and sank it.
    Sunk(ShipClass),
}

/// Why a candidate placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The ship would extend past the grid.
    OutOfBounds,
    /// The ship would cover a cell another ship occupies.
    Overlap,
    /// The ship would sit in the Moore neighborhood of another ship. Ships
    /// may not touch, even diagonally.
    Touching,
    /// The fleet slot was already placed.
    AlreadyPlaced,
    /// No such fleet slot.
    InvalidIndex,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "placement extends past the grid"),
            PlacementError::Overlap => write!(f, "placement overlaps another ship"),
            PlacementError::Touching => write!(f, "placement touches another ship"),
            PlacementError::AlreadyPlaced => write!(f, "ship is already placed"),
            PlacementError::InvalidIndex => write!(f, "no such fleet slot"),
        }
    }
}

impl From<GridError> for PlacementError {
    fn from(_: GridError) -> Self {
        PlacementError::OutOfBounds
    }
}

/// Why a shot could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target coordinate is off the grid.
    OutOfBounds,
    /// The cell was already attacked; shot history never changes twice.
    AlreadyShot,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "target is outside the grid"),
            ShotError::AlreadyShot => write!(f, "cell was already attacked"),
        }
    }
}

impl From<GridError> for ShotError {
    fn from(_: GridError) -> Self {
        ShotError::OutOfBounds
    }
}

/// Errors from computer move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    /// The random placement retry budget was exhausted. Fatal to the match;
    /// never retried past the budget.
    Exhausted,
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::Exhausted => write!(f, "placement retry budget exhausted"),
        }
    }
}

/// Errors from match-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The acting player does not own the current placement or battle turn.
    NotYourTurn,
    /// A winner was already decided; no further moves are accepted.
    MatchOver,
    /// Operation requires the placement phase.
    NotPlacing,
    /// Operation requires the battle phase.
    NotBattling,
    /// The turn owner is not computer-controlled.
    NotComputer,
    /// Every cell on the target board was already attacked.
    NoTargetsLeft,
    Placement(PlacementError),
    Shot(ShotError),
    Strategy(StrategyError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotYourTurn => write!(f, "not this player's turn"),
            GameError::MatchOver => write!(f, "the match is already decided"),
            GameError::NotPlacing => write!(f, "not in the placement phase"),
            GameError::NotBattling => write!(f, "not in the battle phase"),
            GameError::NotComputer => write!(f, "turn owner is not computer-controlled"),
            GameError::NoTargetsLeft => write!(f, "no untried cells remain"),
            GameError::Placement(e) => write!(f, "placement rejected: {}", e),
            GameError::Shot(e) => write!(f, "shot rejected: {}", e),
            GameError::Strategy(e) => write!(f, "strategy failed: {}", e),
        }
    }
}

impl From<PlacementError> for GameError {
    fn from(e: PlacementError) -> Self {
        GameError::Placement(e)
    }
}

impl From<ShotError> for GameError {
    fn from(e: ShotError) -> Self {
        GameError::Shot(e)
    }
}

impl From<StrategyError> for GameError {
    fn from(e: StrategyError) -> Self {
        GameError::Strategy(e)
    }
}
