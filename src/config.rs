pub const BOARD_ROWS: usize = 10;
pub const BOARD_COLS: usize = 10;
pub const NUM_SHIPS: usize = 10;

/// One length-4, two length-3, three length-2 and four length-1 ships.
pub const STANDARD_ROSTER: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Random draws allowed per ship before generation gives up.
pub const DEFAULT_RETRY_BUDGET: usize = 5_000;

/// Total number of ship segments in the standard roster.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;
