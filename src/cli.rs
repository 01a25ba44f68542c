//! Text helpers for the command-line front end.
//!
//! Coordinates are written as column letters followed by a 1-based row
//! number (`A1` is the top-left cell, `AA1` the first cell of the 27th
//! column). Placements are `COORD:LENGTH:DIR` where `DIR` is `h` or `v`.

#![cfg(feature = "std")]

use crate::ship::{Orientation, Placement};

/// Spreadsheet-style label for column `col`: `A`..`Z`, then `AA`, `AB`, ...
pub fn column_label(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    letters.iter().rev().collect()
}

/// Inverse of [`column_label`]. `None` for empty, non-letter or overflowing input.
pub fn parse_column_label(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut col: usize = 0;
    for ch in label.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return None;
        }
        let digit = (ch as u8 - b'A') as usize + 1;
        col = col.checked_mul(26)?.checked_add(digit)?;
    }
    Some(col - 1)
}

/// Format (`row`, `col`) as e.g. `C7` or `AB12`.
pub fn format_coord(row: usize, col: usize) -> String {
    format!("{}{}", column_label(col), row + 1)
}

/// Parse a coordinate such as `A5` or `AB12` into (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty coordinate".to_string());
    }
    let split = input
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (letters, row_str) = input.split_at(split);
    if letters.is_empty() {
        let found = input.chars().next().unwrap_or(' ');
        return Err(format!("Invalid column '{}' - must start with letters A-Z", found));
    }
    let col = parse_column_label(letters)
        .ok_or_else(|| format!("Column '{}' is out of range", letters))?;
    if row_str.is_empty() {
        return Err("Missing row number (e.g., A5)".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a positive number", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - rows start at 1".to_string());
    }
    Ok((row - 1, col))
}

pub fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        other => Err(format!("Invalid orientation '{}' - use h or v", other)),
    }
}

/// Parse `COORD:LENGTH:DIR`, e.g. `B2:3:v`.
pub fn parse_placement(input: &str) -> Result<Placement, String> {
    let mut parts = input.split(':');
    let (Some(coord), Some(length), Some(dir), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!(
            "Invalid placement '{}' - expected COORD:LENGTH:DIR (e.g., A1:4:h)",
            input
        ));
    };
    let origin = parse_coord(coord)?;
    let length: usize = length
        .trim()
        .parse()
        .map_err(|_| format!("Invalid length '{}'", length))?;
    let orientation = parse_orientation(dir)?;
    Ok(Placement::new(origin, length, orientation))
}

/// Parse a comma-separated roster such as `4,3,3,2`.
pub fn parse_roster(input: &str) -> Result<Vec<usize>, String> {
    input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid ship length '{}'", part.trim()))
        })
        .collect()
}
