//! Computer move selection: random legal placements and attacks.
//!
//! Both operations are pure queries against board state; the caller commits
//! the chosen placement or shot.

use crate::board::Board;
use crate::common::StrategyError;
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::Orientation;
use rand::Rng;

/// Retry budget for one ship's random placement.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Pick a random legal origin and orientation for the fleet ship at `index`.
///
/// Samples uniformly and tests legality until a placement fits or the retry
/// budget runs out; exhaustion is fatal to the match instance and is
/// surfaced, never retried past the budget.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    index: usize,
) -> Result<(usize, usize, Orientation), StrategyError> {
    if index >= NUM_SHIPS {
        return Err(StrategyError::Exhausted);
    }
    let len = FLEET[index].length();
    for _ in 0..PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_row = match orientation {
            Orientation::Vertical => BOARD_SIZE - len,
            Orientation::Horizontal => BOARD_SIZE - 1,
        };
        let max_col = match orientation {
            Orientation::Horizontal => BOARD_SIZE - len,
            Orientation::Vertical => BOARD_SIZE - 1,
        };
        let row = rng.random_range(0..=max_row);
        let col = rng.random_range(0..=max_col);
        if board.is_valid_placement(row, col, len, orientation) {
            return Ok((row, col, orientation));
        }
    }
    Err(StrategyError::Exhausted)
}

/// Pick a uniformly random untried cell on the opponent's board.
///
/// Returns `None` when every cell is resolved. That cannot happen before a
/// winner exists (seventeen sunk cells end the match long before a hundred
/// shots), but the operation stays total.
pub fn random_attack<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<(usize, usize)> {
    let untried = !(board.hits() | board.misses());
    let n = untried.count_ones();
    if n == 0 {
        return None;
    }
    let pick = rng.random_range(0..n);
    untried.cells().nth(pick)
}
