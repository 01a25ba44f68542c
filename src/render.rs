//! Plain-text rendering of a fleet on its board.
//!
//! Columns are labelled with letters (`A`, `B`, ...) and rows with 1-based
//! numbers. Ship cells show the initial of the ship's color, water is `.`.

use core::fmt;

use crate::fleet::Fleet;

const WATER: char = '.';

/// Letter for column `col`, or `None` past `Z`.
pub fn column_letter(col: usize) -> Option<char> {
    u8::try_from(col)
        .ok()
        .filter(|c| *c < 26)
        .map(|c| (b'A' + c) as char)
}

fn column_header(col: usize) -> char {
    column_letter(col).unwrap_or_else(|| char::from_digit((col % 10) as u32, 10).unwrap_or('?'))
}

fn digits(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.board().rows();
        let cols = self.board().cols();
        let width = digits(rows);

        write!(f, "{:width$}", "", width = width)?;
        for c in 0..cols {
            write!(f, " {}", column_header(c))?;
        }
        for r in 0..rows {
            writeln!(f)?;
            write!(f, "{:>width$}", r + 1, width = width)?;
            for c in 0..cols {
                let cell = match self.ship_at(r, c) {
                    Some((_, ship)) => ship.color().initial(),
                    None => WATER,
                };
                write!(f, " {}", cell)?;
            }
        }
        Ok(())
    }
}
