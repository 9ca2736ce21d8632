//! Game board state: ship placements, hits and misses.

use crate::common::{CellShot, PlacementError, ShotError, ShotOutcome};
use crate::config::{Grid, BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::placement;
use crate::ship::{Orientation, Ship, ShipClass};
use core::fmt;

/// Snapshot of one fleet slot, for rendering and status summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub class: ShipClass,
    pub hits: u8,
    pub sunk: bool,
    /// Origin and orientation once placed.
    pub position: Option<(usize, usize, Orientation)>,
}

/// A fleet ship committed to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlacedShip {
    ship: Ship,
    row: usize,
    col: usize,
    mask: Grid,
}

/// One player's board: occupancy and shot history.
///
/// Occupancy is built during placement and never changes once battle starts;
/// shot history grows one cell per resolved attack, and a cell resolves at
/// most once.
#[derive(Clone)]
pub struct Board {
    ships: [Option<PlacedShip>; NUM_SHIPS],
    ship_map: Grid,
    hits: Grid,
    misses: Grid,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: Grid::new(),
            hits: Grid::new(),
            misses: Grid::new(),
        }
    }

    /// Return the board to its empty state.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    /// Cells attacked and hit.
    pub fn hits(&self) -> Grid {
        self.hits
    }

    /// Cells attacked and missed.
    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// Number of fleet slots placed so far.
    pub fn placed_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_some()).count()
    }

    /// True once every fleet slot has been placed.
    pub fn fleet_complete(&self) -> bool {
        self.placed_count() == NUM_SHIPS
    }

    /// Legality query for a candidate placement against the current
    /// occupancy. No side effects; suitable for hover previews.
    pub fn is_valid_placement(
        &self,
        row: usize,
        col: usize,
        len: usize,
        orientation: Orientation,
    ) -> bool {
        placement::is_valid(&self.ship_map, row, col, len, orientation)
    }

    /// Place the fleet ship at `index` with its origin at `(row, col)`.
    ///
    /// A rejected placement leaves every prior placement intact.
    pub fn place(
        &mut self,
        index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if index >= NUM_SHIPS {
            return Err(PlacementError::InvalidIndex);
        }
        if self.ships[index].is_some() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let class = FLEET[index];
        let mask = placement::footprint(row, col, class.length(), orientation)?;
        placement::clearance(&self.ship_map, &mask)?;

        self.ship_map |= mask;
        self.ships[index] = Some(PlacedShip {
            ship: Ship::new(class, orientation),
            row,
            col,
            mask,
        });
        Ok(())
    }

    /// Resolve an attack at `(row, col)`.
    ///
    /// A cell resolves at most once; re-attacking yields `AlreadyShot` and
    /// mutates nothing.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, ShotError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(ShotError::OutOfBounds);
        }
        if self.hits.contains(row, col) || self.misses.contains(row, col) {
            return Err(ShotError::AlreadyShot);
        }
        match self
            .ships
            .iter_mut()
            .flatten()
            .find(|p| p.mask.contains(row, col))
        {
            Some(placed) => {
                placed.ship.hit();
                self.hits.set(row, col)?;
                if placed.ship.is_sunk() {
                    Ok(ShotOutcome::Sunk(placed.ship.class()))
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
            None => {
                self.misses.set(row, col)?;
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// True iff the fleet is complete and every ship is sunk. A partially
    /// placed fleet never reports defeat.
    pub fn all_sunk(&self) -> bool {
        self.fleet_complete() && self.ships.iter().flatten().all(|p| p.ship.is_sunk())
    }

    /// Shot history for one cell. Off-grid coordinates read as untried.
    pub fn shot(&self, row: usize, col: usize) -> CellShot {
        if self.hits.contains(row, col) {
            CellShot::Hit
        } else if self.misses.contains(row, col) {
            CellShot::Miss
        } else {
            CellShot::Untried
        }
    }

    /// Class of the ship covering `(row, col)`, if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<ShipClass> {
        self.ships
            .iter()
            .flatten()
            .find(|p| p.mask.contains(row, col))
            .map(|p| p.ship.class())
    }

    /// Per-slot fleet status.
    pub fn ship_states(&self) -> [ShipState; NUM_SHIPS] {
        core::array::from_fn(|i| match &self.ships[i] {
            Some(p) => ShipState {
                class: p.ship.class(),
                hits: p.ship.hits(),
                sunk: p.ship.is_sunk(),
                position: Some((p.row, p.col, p.ship.orientation())),
            },
            None => ShipState {
                class: FLEET[i],
                hits: 0,
                sunk: false,
                position: None,
            },
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  states: {:?}\n}}",
            self.ship_map,
            self.hits,
            self.misses,
            self.ship_states()
        )
    }
}
