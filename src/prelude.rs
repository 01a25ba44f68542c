//! Commonly used types and utilities for ease of import.

pub use crate::{
    auto_place_fleet, can_place, check_placement, Board, Fleet, FleetGenerator, Orientation,
    Placement, PlacementError, Rejection, Ship, ShipColor, STANDARD_ROSTER,
};
