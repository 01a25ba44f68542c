#![cfg(feature = "std")]

use battleship_placement::cli::{
    column_label, format_coord, parse_column_label, parse_coord, parse_orientation,
    parse_placement, parse_roster,
};
use battleship_placement::{Fleet, Orientation, Placement, STANDARD_ROSTER};
use std::process::Command;

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1"), Ok((0, 0)));
    assert_eq!(parse_coord("j10"), Ok((9, 9)));
    assert_eq!(parse_coord(" C7 "), Ok((6, 2)));
    assert!(parse_coord("").is_err());
    assert!(parse_coord("A").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("1A").is_err());
    assert!(parse_coord("Ax").is_err());
}

#[test]
fn test_format_coord() {
    assert_eq!(format_coord(0, 0), "A1");
    assert_eq!(format_coord(9, 9), "J10");
    assert_eq!(parse_coord(&format_coord(4, 7)), Ok((4, 7)));
    assert_eq!(format_coord(0, 26), "AA1");
    assert_eq!(format_coord(11, 27), "AB12");
}

#[test]
fn test_column_labels_past_z() {
    assert_eq!(column_label(0), "A");
    assert_eq!(column_label(25), "Z");
    assert_eq!(column_label(26), "AA");
    assert_eq!(column_label(701), "ZZ");
    assert_eq!(column_label(702), "AAA");
    assert_eq!(parse_column_label("ab"), Some(27));
    assert_eq!(parse_column_label(""), None);
    assert_eq!(parse_column_label("A1"), None);
    assert_eq!(parse_column_label(&"Z".repeat(40)), None);
    assert!(parse_coord(&format!("{}1", "Z".repeat(40))).is_err());
}

#[test]
fn test_format_coord_roundtrips_wide_boards() {
    for col in 0..1000 {
        for row in [0, 9, 99] {
            let coord = format_coord(row, col);
            assert_eq!(parse_coord(&coord), Ok((row, col)), "{}", coord);
        }
    }
}

#[test]
fn test_parse_placement_and_roster() {
    assert_eq!(
        parse_placement("B2:3:v"),
        Ok(Placement::new((1, 1), 3, Orientation::Vertical))
    );
    assert_eq!(parse_orientation("Horizontal"), Ok(Orientation::Horizontal));
    assert!(parse_orientation("x").is_err());
    assert!(parse_placement("B2:3").is_err());
    assert!(parse_placement("B2:3:h:extra").is_err());
    assert!(parse_placement("B2:three:h").is_err());

    assert_eq!(parse_roster("4,3,3,2,2,2,1,1,1,1"), Ok(STANDARD_ROSTER.to_vec()));
    assert_eq!(parse_roster(" 2 , 1 "), Ok(vec![2, 1]));
    assert!(parse_roster("4,,1").is_err());
}

#[test]
fn fleet_binary_auto_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_fleet"))
        .args(["auto", "--seed", "5", "--restarts", "3", "--json"])
        .output()
        .expect("failed to run fleet binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let fleet: Fleet = serde_json::from_str(stdout.trim()).expect("invalid fleet json");
    assert!(fleet.matches_roster(&STANDARD_ROSTER));
}

#[test]
fn fleet_binary_check() {
    let legal = Command::new(env!("CARGO_BIN_EXE_fleet"))
        .args(["check", "H8:1:h", "--ship", "F6:1:h"])
        .output()
        .expect("failed to run fleet binary");
    assert!(legal.status.success());
    assert_eq!(String::from_utf8_lossy(&legal.stdout).trim(), "legal");

    let illegal = Command::new(env!("CARGO_BIN_EXE_fleet"))
        .args(["check", "G7:1:h", "--ship", "F6:1:h"])
        .output()
        .expect("failed to run fleet binary");
    assert_eq!(illegal.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&illegal.stdout).starts_with("illegal:"));
}

#[test]
fn fleet_binary_check_wide_board() {
    // AB is the 28th column, only valid on a board wider than 26.
    let output = Command::new(env!("CARGO_BIN_EXE_fleet"))
        .args(["check", "AB1:2:v", "--cols", "30", "--ship", "Z1:1:h"])
        .output()
        .expect("failed to run fleet binary");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "legal");
}
