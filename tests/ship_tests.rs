use battleship_placement::{Board, Orientation, Placement, PlacementError, ShipColor};

#[test]
fn test_cells_horizontal_and_vertical() {
    let h = Placement::new((2, 1), 3, Orientation::Horizontal);
    assert_eq!(h.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);

    let v = Placement::new((0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = v.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    for (r, c) in cells {
        assert!(v.contains(r, c));
    }
    assert!(!v.contains(4, 0));
    assert!(!v.contains(0, 1));
    assert_eq!(v.cells().len(), 4);
}

#[test]
fn test_spans() {
    let h = Placement::new((3, 5), 4, Orientation::Horizontal);
    assert_eq!(h.row_span(), (3, 3));
    assert_eq!(h.col_span(), (5, 8));

    let v = Placement::new((3, 5), 2, Orientation::Vertical);
    assert_eq!(v.row_span(), (3, 4));
    assert_eq!(v.col_span(), (5, 5));
}

#[test]
fn test_zero_length_has_no_cells() {
    let p = Placement::new((1, 1), 0, Orientation::Horizontal);
    assert_eq!(p.cells().count(), 0);
    assert!(!p.contains(1, 1));
}

#[test]
fn test_distance_across_orientations() {
    let h = Placement::new((5, 2), 3, Orientation::Horizontal); // (5,2..=4)
    let v = Placement::new((2, 6), 3, Orientation::Vertical); // (2..=4,6)

    // Corner (5,4) to corner (4,6): rows differ by 1, cols by 2.
    assert_eq!(h.distance(&v), 2);
    assert_eq!(v.distance(&h), 2);

    let crossing = Placement::new((4, 3), 3, Orientation::Vertical);
    assert_eq!(h.distance(&crossing), 0);

    let diagonal = Placement::new((6, 5), 1, Orientation::Horizontal);
    assert_eq!(h.distance(&diagonal), 1);

    let far = Placement::new((9, 9), 1, Orientation::Vertical);
    assert_eq!(h.distance(&far), 5);
}

#[test]
fn test_color_by_length() {
    assert_eq!(ShipColor::for_length(4), ShipColor::Cyan);
    assert_eq!(ShipColor::for_length(3), ShipColor::Magenta);
    assert_eq!(ShipColor::for_length(2), ShipColor::Blue);
    assert_eq!(ShipColor::for_length(1), ShipColor::Green);
    assert_eq!(ShipColor::for_length(6), ShipColor::Cyan);
    assert_eq!(ShipColor::Magenta.initial(), 'M');
}

#[test]
fn test_board_rejects_zero_dimensions() {
    assert_eq!(
        Board::new(0, 10).unwrap_err(),
        PlacementError::InvalidBoard { rows: 0, cols: 10 }
    );
    assert_eq!(
        Board::new(10, 0).unwrap_err(),
        PlacementError::InvalidBoard { rows: 10, cols: 0 }
    );
    let board = Board::new(3, 7).unwrap();
    assert_eq!((board.rows(), board.cols()), (3, 7));
    assert_eq!(Board::default(), Board::standard());
}

#[test]
fn test_board_contains() {
    let board = Board::new(4, 6).unwrap();
    assert!(board.contains(&Placement::new((0, 2), 4, Orientation::Horizontal)));
    assert!(!board.contains(&Placement::new((0, 3), 4, Orientation::Horizontal)));
    assert!(board.contains(&Placement::new((0, 5), 4, Orientation::Vertical)));
    assert!(!board.contains(&Placement::new((1, 5), 4, Orientation::Vertical)));
    // Origin itself off the board.
    assert!(!board.contains(&Placement::new((4, 0), 1, Orientation::Horizontal)));
    assert!(!board.contains(&Placement::new((0, 6), 1, Orientation::Vertical)));
    // Length that would overflow the column index.
    assert!(!board.contains(&Placement::new((0, 1), usize::MAX, Orientation::Horizontal)));

    assert!(board.fits_length(6));
    assert!(!board.fits_length(7));
}
