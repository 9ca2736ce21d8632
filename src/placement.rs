//! Placement legality rules.
//!
//! Pure functions over occupancy masks; no board state is touched. Legality
//! is bounds plus clearance: a candidate may not cover an occupied cell and
//! may not sit anywhere in the Moore neighborhood of one, so ships never
//! touch, even diagonally. Clearance is a single mask intersection against
//! the dilated occupancy.

use crate::common::PlacementError;
use crate::config::{Grid, BOARD_SIZE};
use crate::ship::Orientation;

/// Mask of the cells a ship of `len` would cover from `(row, col)` along
/// `orientation`, or `OutOfBounds` if any cell falls outside the grid.
pub fn footprint(
    row: usize,
    col: usize,
    len: usize,
    orientation: Orientation,
) -> Result<Grid, PlacementError> {
    match orientation {
        Orientation::Horizontal => {
            if col + len > BOARD_SIZE {
                return Err(PlacementError::OutOfBounds);
            }
        }
        Orientation::Vertical => {
            if row + len > BOARD_SIZE {
                return Err(PlacementError::OutOfBounds);
            }
        }
    }

    let mut mask = Grid::new();
    for k in 0..len {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col + k),
            Orientation::Vertical => (row + k, col),
        };
        // catches an off-grid origin on the cross axis
        mask.set(r, c)?;
    }
    Ok(mask)
}

/// Check a candidate footprint against the occupied cells: `Overlap` when it
/// covers one, `Touching` when it only neighbors one.
pub fn clearance(ship_map: &Grid, candidate: &Grid) -> Result<(), PlacementError> {
    if !(*ship_map & *candidate).is_empty() {
        return Err(PlacementError::Overlap);
    }
    if !(ship_map.dilated() & *candidate).is_empty() {
        return Err(PlacementError::Touching);
    }
    Ok(())
}

/// Side-effect-free legality query; also serves hover previews in a UI.
pub fn is_valid(
    ship_map: &Grid,
    row: usize,
    col: usize,
    len: usize,
    orientation: Orientation,
) -> bool {
    match footprint(row, col, len, orientation) {
        Ok(mask) => clearance(ship_map, &mask).is_ok(),
        Err(_) => false,
    }
}
