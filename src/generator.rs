//! Randomized fleet generation by rejection sampling.
//!
//! Each roster entry is placed in order: draw a uniformly random origin and
//! orientation, keep the draw if the validator accepts it, otherwise draw
//! again. Accepted ships are never revisited. A per-ship retry budget bounds
//! the loop.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::PlacementError;
use crate::config::{DEFAULT_RETRY_BUDGET, STANDARD_ROSTER};
use crate::fleet::Fleet;
use crate::ship::{Orientation, Placement, ShipColor};

/// Generates complete fleets for a fixed board and roster.
///
/// The generator holds no random state; every call to [`generate`] borrows
/// the caller's source, so independent fleets can be built on separate
/// threads with separately owned RNGs.
///
/// [`generate`]: FleetGenerator::generate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FleetGenerator {
    board: Board,
    roster: Vec<usize>,
    colors: Vec<ShipColor>,
    retry_budget: usize,
    restarts: usize,
}

impl FleetGenerator {
    /// Create a generator, rejecting rosters that can never be placed.
    pub fn new(board: Board, roster: &[usize]) -> Result<Self, PlacementError> {
        validate_roster(&board, roster)?;
        Ok(Self {
            board,
            roster: roster.to_vec(),
            colors: default_colors(roster),
            retry_budget: DEFAULT_RETRY_BUDGET,
            restarts: 0,
        })
    }

    /// Standard roster on the standard 10×10 board.
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
            roster: STANDARD_ROSTER.to_vec(),
            colors: default_colors(&STANDARD_ROSTER),
            retry_budget: DEFAULT_RETRY_BUDGET,
            restarts: 0,
        }
    }

    /// Color for each roster position: the i-th color goes to the i-th ship.
    /// Without this, each position takes [`ShipColor::for_length`] of its
    /// length.
    pub fn with_colors(mut self, colors: &[ShipColor]) -> Result<Self, PlacementError> {
        if colors.len() != self.roster.len() {
            return Err(PlacementError::ColorCountMismatch {
                ships: self.roster.len(),
                colors: colors.len(),
            });
        }
        self.colors = colors.to_vec();
        Ok(self)
    }

    /// Random draws allowed per ship. At least one draw is always made.
    pub fn with_retry_budget(mut self, retry_budget: usize) -> Self {
        self.retry_budget = retry_budget.max(1);
        self
    }

    /// Whole-fleet restarts allowed after a ship exhausts its budget.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roster(&self) -> &[usize] {
        &self.roster
    }

    pub fn colors(&self) -> &[ShipColor] {
        &self.colors
    }

    pub fn retry_budget(&self) -> usize {
        self.retry_budget
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Place the whole roster, ships in roster order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Fleet, PlacementError> {
        let mut restarts_left = self.restarts;
        loop {
            match self.attempt(rng) {
                Err(err @ PlacementError::PlacementExhausted { .. }) if restarts_left > 0 => {
                    restarts_left -= 1;
                    log::info!("{}; restarting fleet ({} restarts left)", err, restarts_left);
                }
                result => return result,
            }
        }
    }

    /// Like [`generate`](Self::generate) with a fresh `SmallRng` seeded from
    /// the thread RNG.
    #[cfg(feature = "std")]
    pub fn generate_fresh(&self) -> Result<Fleet, PlacementError> {
        use rand::{rngs::SmallRng, SeedableRng};

        let mut rng = SmallRng::from_rng(&mut rand::rng());
        self.generate(&mut rng)
    }

    fn attempt<R: Rng>(&self, rng: &mut R) -> Result<Fleet, PlacementError> {
        let mut fleet = Fleet::with_capacity(self.board, self.roster.len());
        for (index, (&length, &color)) in self.roster.iter().zip(&self.colors).enumerate() {
            self.place_one(&mut fleet, rng, index, length, color)?;
        }
        log::debug!(
            "generated fleet of {} ships on {}x{} board",
            fleet.len(),
            self.board.rows(),
            self.board.cols()
        );
        Ok(fleet)
    }

    fn place_one<R: Rng>(
        &self,
        fleet: &mut Fleet,
        rng: &mut R,
        index: usize,
        length: usize,
        color: ShipColor,
    ) -> Result<(), PlacementError> {
        for attempt in 1..=self.retry_budget {
            let candidate = random_candidate(rng, &self.board, length);
            match fleet.place(candidate, color) {
                Ok(ship) => {
                    log::debug!("ship #{} accepted after {} draws: {}", index, attempt, ship);
                    return Ok(());
                }
                Err(reason) => log::trace!("ship #{} draw {} rejected: {}", index, attempt, reason),
            }
        }
        log::warn!(
            "ship #{} (length {}) exhausted {} draws",
            index,
            length,
            self.retry_budget
        );
        Err(PlacementError::PlacementExhausted {
            index,
            length,
            attempts: self.retry_budget,
        })
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

fn default_colors(roster: &[usize]) -> Vec<ShipColor> {
    roster.iter().map(|&length| ShipColor::for_length(length)).collect()
}

/// Draw an origin anywhere on the board and a fair orientation.
fn random_candidate<R: Rng>(rng: &mut R, board: &Board, length: usize) -> Placement {
    let row = rng.random_range(0..board.rows());
    let col = rng.random_range(0..board.cols());
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Placement::new((row, col), length, orientation)
}

/// Contract checks performed before any sampling.
pub fn validate_roster(board: &Board, roster: &[usize]) -> Result<(), PlacementError> {
    if board.rows() == 0 || board.cols() == 0 {
        return Err(PlacementError::InvalidBoard {
            rows: board.rows(),
            cols: board.cols(),
        });
    }
    if roster.is_empty() {
        return Err(PlacementError::EmptyRoster);
    }
    for (index, &length) in roster.iter().enumerate() {
        if length == 0 {
            return Err(PlacementError::ZeroLengthShip { index });
        }
        if !board.fits_length(length) {
            return Err(PlacementError::ShipTooLong { index, length });
        }
    }
    Ok(())
}

/// Place `lengths` on an empty `rows × cols` board using `rng`.
///
/// Uses the default retry budget and no restarts.
pub fn auto_place_fleet<R: Rng>(
    rows: usize,
    cols: usize,
    lengths: &[usize],
    rng: &mut R,
) -> Result<Fleet, PlacementError> {
    FleetGenerator::new(Board::new(rows, cols)?, lengths)?.generate(rng)
}
