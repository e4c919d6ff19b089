//! Board tests - grid access, collision, merge and line clears

use falltris::core::{shape_for, Board, Shape};
use falltris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

fn filled(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_some()).count()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert!(board.is_empty());
}

#[test]
fn test_board_get_and_set_out_of_bounds() {
    let mut board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert!(board.is_empty());
}

#[test]
fn test_board_valid_and_occupied() {
    let mut board = Board::new();
    board.set(5, 10, Some(PieceKind::T));

    assert!(!board.is_valid(5, 10));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_valid(-1, 0));
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_every_catalog_piece_fits_at_spawn_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let shape = shape_for(kind);
        let x = 5 - (shape.size() / 2) as i8;
        assert!(!board.collides(&shape, x, 0), "{:?}", kind);
    }
}

#[test]
fn test_collision_against_each_wall() {
    let board = Board::new();
    let t = shape_for(PieceKind::T);

    // T spans grid columns 0..=2 and rows 0..=1.
    assert!(!board.collides(&t, 0, 0));
    assert!(!board.collides(&t, 7, 18));
    assert!(board.collides(&t, -1, 0));
    assert!(board.collides(&t, 8, 0));
    assert!(board.collides(&t, 0, 19));
    assert!(board.collides(&t, 0, -1));
}

#[test]
fn test_custom_shape_collision_and_merge() {
    let mut board = Board::new();
    let bar = Shape::from_rows(&[[0u8, 0, 0], [7, 7, 7], [0, 0, 0]]).unwrap();

    assert!(!board.collides(&bar, 7, 18));
    board.merge(&bar, 7, 18);
    assert_eq!(board.get(7, 19), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::Z)));
    assert!(board.collides(&bar, 6, 18));
    assert_eq!(filled(&board), 3);
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clearing_with_no_full_rows_changes_nothing() {
    let mut board = Board::new();
    board.set(3, 19, Some(PieceKind::L));
    let before = board.clone();

    assert_eq!(board.clear_completed_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_board_clear_full_rows_drops_rows_above() {
    let mut board = Board::new();
    fill_row(&mut board, 18, PieceKind::I);
    fill_row(&mut board, 19, PieceKind::O);
    board.set(0, 17, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18]);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(filled(&board), 1);
}

#[test]
fn test_board_clear_separated_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    fill_row(&mut board, 10, PieceKind::I);
    fill_row(&mut board, 15, PieceKind::O);

    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    assert_eq!(board.clear_completed_lines(), 3);

    // Each marker drops by the number of cleared rows below it.
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
    assert_eq!(filled(&board), 3);
}

#[test]
fn test_full_top_row_is_cleared() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceKind::Z);

    assert_eq!(board.clear_completed_lines(), 1);
    assert!(board.is_empty());
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    board.clear();
    assert!(board.is_empty());
}

#[test]
fn test_board_rows_iterate_top_to_bottom() {
    let mut board = Board::new();
    board.set(2, 19, Some(PieceKind::O));

    let rows: Vec<_> = board.rows().collect();
    assert_eq!(rows.len(), BOARD_HEIGHT as usize);
    assert!(rows.iter().all(|row| row.len() == BOARD_WIDTH as usize));
    assert_eq!(rows[19][2], Some(PieceKind::O));
}

#[test]
fn test_clearing_rows_five_and_seven_keeps_relative_order() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    fill_row(&mut board, 7, PieceKind::T);
    // One marker in every other row, each at a distinct column pattern.
    for y in 0..BOARD_HEIGHT as i8 {
        if y != 5 && y != 7 {
            board.set(y % BOARD_WIDTH as i8, y, Some(PieceKind::ALL[y as usize % 7]));
        }
    }
    let kept: Vec<Vec<_>> = board
        .rows()
        .enumerate()
        .filter(|(y, _)| *y != 5 && *y != 7)
        .map(|(_, row)| row.to_vec())
        .collect();

    assert_eq!(board.clear_completed_lines(), 2);

    let rows: Vec<Vec<_>> = board.rows().map(|row| row.to_vec()).collect();
    assert!(rows[0].iter().all(|c| c.is_none()));
    assert!(rows[1].iter().all(|c| c.is_none()));
    assert_eq!(&rows[2..], &kept[..]);
}

#[test]
fn test_clearing_empty_board_is_a_noop() {
    let mut board = Board::new();
    assert_eq!(board.clear_completed_lines(), 0);
    assert!(board.is_empty());
}
