//! Common types for fleet placement: rejection reasons and placement errors.

use core::fmt;

/// Why the validator refused a candidate placement.
///
/// Rejections are expected during placement; callers retry with a different
/// candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// Candidate occupies no cells.
    ZeroLength,
    /// At least one occupied cell lies outside the board.
    OutOfBounds,
    /// Candidate shares a cell with the ship at `index`.
    Overlaps { index: usize },
    /// Candidate touches the ship at `index`, edge or corner.
    Adjacent { index: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ZeroLength => write!(f, "Ship has zero length"),
            Rejection::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            Rejection::Overlaps { index } => {
                write!(f, "Ship placement overlaps ship #{}", index)
            }
            Rejection::Adjacent { index } => {
                write!(f, "Ship placement touches ship #{}", index)
            }
        }
    }
}

/// Errors returned by fleet construction and generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Board must have at least one row and one column.
    InvalidBoard { rows: usize, cols: usize },
    /// Roster contains no ships.
    EmptyRoster,
    /// Roster entry at `index` has length zero.
    ZeroLengthShip { index: usize },
    /// Roster entry at `index` cannot fit the board in either orientation.
    ShipTooLong { index: usize, length: usize },
    /// Generator was given a palette that does not match its roster.
    ColorCountMismatch { ships: usize, colors: usize },
    /// Ship at `index` was refused by the validator.
    Rejected { index: usize, reason: Rejection },
    /// No legal position found for the ship at `index` within the retry budget.
    PlacementExhausted {
        index: usize,
        length: usize,
        attempts: usize,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidBoard { rows, cols } => {
                write!(f, "Invalid board size {}x{}", rows, cols)
            }
            PlacementError::EmptyRoster => write!(f, "Roster is empty"),
            PlacementError::ZeroLengthShip { index } => {
                write!(f, "Roster entry #{} has zero length", index)
            }
            PlacementError::ShipTooLong { index, length } => write!(
                f,
                "Roster entry #{} (length {}) does not fit the board",
                index, length
            ),
            PlacementError::ColorCountMismatch { ships, colors } => {
                write!(f, "Roster has {} ships but {} colors", ships, colors)
            }
            PlacementError::Rejected { index, reason } => {
                write!(f, "Ship #{} rejected: {}", index, reason)
            }
            PlacementError::PlacementExhausted {
                index,
                length,
                attempts,
            } => write!(
                f,
                "Unable to place ship #{} (length {}) after {} attempts",
                index, length, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Rejection {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
