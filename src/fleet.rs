//! An append-only fleet of ships on one board.

use alloc::vec::Vec;
use core::slice;

use crate::board::Board;
use crate::common::Rejection;
#[cfg(feature = "std")]
use crate::common::PlacementError;
use crate::placement::check_placement;
use crate::ship::{Placement, Ship, ShipColor};

/// Ships accepted onto a board, in placement order.
///
/// Every ship in a fleet passed [`check_placement`] against the ships before
/// it, so no two ships overlap or touch and all lie on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "FleetRecord"))]
pub struct Fleet {
    board: Board,
    ships: Vec<Ship>,
}

impl Fleet {
    /// Create an empty fleet on `board`.
    pub fn new(board: Board) -> Self {
        Self::with_capacity(board, 0)
    }

    pub fn with_capacity(board: Board, capacity: usize) -> Self {
        Self {
            board,
            ships: Vec::with_capacity(capacity),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Immutable view of the placed ships.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Ship> {
        self.ships.iter()
    }

    /// Validate `candidate` against this fleet without placing it.
    pub fn check(&self, candidate: &Placement) -> Result<(), Rejection> {
        check_placement(&self.ships, candidate, &self.board)
    }

    pub fn can_place(&self, candidate: &Placement) -> bool {
        self.check(candidate).is_ok()
    }

    /// Append a ship at `placement` if the validator accepts it.
    pub fn place(&mut self, placement: Placement, color: ShipColor) -> Result<&Ship, Rejection> {
        self.check(&placement)?;
        self.ships.push(Ship::new(placement, color));
        Ok(&self.ships[self.ships.len() - 1])
    }

    /// The ship occupying (`row`, `col`), with its index.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<(usize, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .find(|(_, ship)| ship.contains(row, col))
    }

    /// Lengths of the placed ships, in order.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.ships.iter().map(Ship::length)
    }

    /// Returns `true` if the fleet holds exactly `roster`, in order.
    pub fn matches_roster(&self, roster: &[usize]) -> bool {
        self.lengths().eq(roster.iter().copied())
    }

    /// Number of cells covered by all ships.
    pub fn occupied_cells(&self) -> usize {
        self.lengths().sum()
    }

    pub fn into_ships(self) -> Vec<Ship> {
        self.ships
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Ship;
    type IntoIter = slice::Iter<'a, Ship>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}

/// Wire shape of a fleet before its ships are re-validated.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct FleetRecord {
    board: Board,
    ships: Vec<Ship>,
}

#[cfg(feature = "std")]
impl TryFrom<FleetRecord> for Fleet {
    type Error = PlacementError;

    fn try_from(record: FleetRecord) -> Result<Self, Self::Error> {
        let mut fleet = Fleet::with_capacity(record.board, record.ships.len());
        for (index, ship) in record.ships.into_iter().enumerate() {
            fleet
                .place(*ship.placement(), ship.color())
                .map_err(|reason| PlacementError::Rejected { index, reason })?;
        }
        Ok(fleet)
    }
}
