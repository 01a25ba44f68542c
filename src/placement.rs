//! Placement validation against the board and an existing fleet.
//!
//! Both entry points are pure: they read their arguments and nothing else, so
//! any number of callers may validate concurrently.

use crate::board::Board;
use crate::common::Rejection;
use crate::ship::{Placement, Ship};

/// Smallest Chebyshev distance allowed between cells of two different ships.
pub const MIN_SEPARATION: usize = 2;

/// Check `candidate` against `board` and every ship in `existing`.
///
/// Returns the first violation found. Bounds are checked before ships, and
/// ships in fleet order.
pub fn check_placement(
    existing: &[Ship],
    candidate: &Placement,
    board: &Board,
) -> Result<(), Rejection> {
    if candidate.length() == 0 {
        return Err(Rejection::ZeroLength);
    }
    if !board.contains(candidate) {
        return Err(Rejection::OutOfBounds);
    }
    for (index, ship) in existing.iter().enumerate() {
        match candidate.distance(ship.placement()) {
            0 => return Err(Rejection::Overlaps { index }),
            d if d < MIN_SEPARATION => return Err(Rejection::Adjacent { index }),
            _ => {}
        }
    }
    Ok(())
}

/// Returns `true` only if `candidate` is fully legal.
pub fn can_place(existing: &[Ship], candidate: &Placement, board: &Board) -> bool {
    check_placement(existing, candidate, board).is_ok()
}
