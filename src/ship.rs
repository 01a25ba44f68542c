//! Ship geometry: orientation, candidate placements and placed ships.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Presentation tag carried by each ship. Never consulted by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipColor {
    Cyan,
    Magenta,
    Blue,
    Green,
}

impl ShipColor {
    /// Default color for a ship of `length`: 1 Green, 2 Blue, 3 Magenta,
    /// 4 and longer Cyan. On the standard roster this equals assigning
    /// Cyan, Magenta ×2, Blue ×3, Green ×4 by position.
    pub const fn for_length(length: usize) -> Self {
        match length {
            0 | 1 => ShipColor::Green,
            2 => ShipColor::Blue,
            3 => ShipColor::Magenta,
            _ => ShipColor::Cyan,
        }
    }

    /// Single-letter glyph used when rendering boards as text.
    pub const fn initial(self) -> char {
        match self {
            ShipColor::Cyan => 'C',
            ShipColor::Magenta => 'M',
            ShipColor::Blue => 'B',
            ShipColor::Green => 'G',
        }
    }
}

/// A straight run of cells starting at `origin`: the candidate handed to the
/// validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    origin: (usize, usize),
    length: usize,
    orientation: Orientation,
}

impl Placement {
    pub const fn new(origin: (usize, usize), length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
        }
    }

    /// Origin of the placement (row, col).
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterator over the occupied cells, origin first.
    pub fn cells(&self) -> Cells {
        Cells {
            placement: *self,
            idx: 0,
        }
    }

    /// Returns `true` if (`row`, `col`) is one of the occupied cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let (r0, r1) = self.row_span();
        let (c0, c1) = self.col_span();
        self.length > 0 && (r0..=r1).contains(&row) && (c0..=c1).contains(&col)
    }

    /// Inclusive range of rows covered.
    pub fn row_span(&self) -> (usize, usize) {
        let (row, _) = self.origin;
        match self.orientation {
            Orientation::Horizontal => (row, row),
            Orientation::Vertical => (row, last(row, self.length)),
        }
    }

    /// Inclusive range of columns covered.
    pub fn col_span(&self) -> (usize, usize) {
        let (_, col) = self.origin;
        match self.orientation {
            Orientation::Horizontal => (col, last(col, self.length)),
            Orientation::Vertical => (col, col),
        }
    }

    /// Minimum Chebyshev distance between any cell of `self` and any cell of
    /// `other`. Zero means the placements share a cell, one means they touch.
    ///
    /// Both placements cover axis-aligned rectangles, so the minimum over all
    /// cell pairs is the larger of the row gap and the column gap. Only
    /// meaningful for non-empty placements.
    pub fn distance(&self, other: &Placement) -> usize {
        let rows = span_gap(self.row_span(), other.row_span());
        let cols = span_gap(self.col_span(), other.col_span());
        rows.max(cols)
    }
}

#[inline]
fn last(start: usize, length: usize) -> usize {
    start.saturating_add(length.saturating_sub(1))
}

#[inline]
fn span_gap(a: (usize, usize), b: (usize, usize)) -> usize {
    if a.1 < b.0 {
        b.0 - a.1
    } else if b.1 < a.0 {
        a.0 - b.1
    } else {
        0
    }
}

/// Iterator over the occupied cells of a placement.
#[derive(Clone, Copy, Debug)]
pub struct Cells {
    placement: Placement,
    idx: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.placement.length {
            return None;
        }
        let i = self.idx;
        self.idx += 1;
        let (row, col) = self.placement.origin;
        Some(match self.placement.orientation {
            Orientation::Horizontal => (row, col.saturating_add(i)),
            Orientation::Vertical => (row.saturating_add(i), col),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.placement.length - self.idx;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells {}

/// A ship accepted onto a fleet. Immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    #[cfg_attr(feature = "std", serde(flatten))]
    placement: Placement,
    color: ShipColor,
}

impl Ship {
    /// Only fleets create ships, after the validator accepted `placement`.
    pub(crate) fn new(placement: Placement, color: ShipColor) -> Self {
        Self { placement, color }
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.placement.length
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        self.placement.origin
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.placement.orientation
    }

    pub fn color(&self) -> ShipColor {
        self.color
    }

    pub fn cells(&self) -> Cells {
        self.placement.cells()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.placement.contains(row, col)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.origin();
        write!(
            f,
            "{:?} ship of length {} at ({}, {}) {:?}",
            self.color,
            self.length(),
            row,
            col,
            self.orientation()
        )
    }
}
