//! Board dimensions and the bounds check for placements.

use crate::common::PlacementError;
use crate::config::{BOARD_COLS, BOARD_ROWS};
use crate::ship::{Orientation, Placement};

/// A `rows × cols` grid. Both dimensions are at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "BoardRecord"))]
pub struct Board {
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create a board, rejecting zero-sized dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, PlacementError> {
        if rows == 0 || cols == 0 {
            return Err(PlacementError::InvalidBoard { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// The standard 10×10 board.
    pub const fn standard() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if (`row`, `col`) lies on the board.
    pub fn contains_cell(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns `true` if every cell of `placement` lies on the board.
    pub fn contains(&self, placement: &Placement) -> bool {
        let (row, col) = placement.origin();
        if !self.contains_cell(row, col) {
            return false;
        }
        let (start, limit) = match placement.orientation() {
            Orientation::Horizontal => (col, self.cols),
            Orientation::Vertical => (row, self.rows),
        };
        start
            .checked_add(placement.length())
            .is_some_and(|end| end <= limit)
    }

    /// Returns `true` if a ship of `length` fits in at least one orientation.
    pub fn fits_length(&self, length: usize) -> bool {
        length <= self.rows.max(self.cols)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Wire shape of a board before its dimensions are checked.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct BoardRecord {
    rows: usize,
    cols: usize,
}

#[cfg(feature = "std")]
impl TryFrom<BoardRecord> for Board {
    type Error = PlacementError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        Board::new(record.rows, record.cols)
    }
}
