//! Board tests - grid access, locking and line clears

use pure_tetris::core::Board;
use pure_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: i8 = BOARD_WIDTH as i8;
const H: i8 = BOARD_HEIGHT as i8;

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..W {
        board.set_cell(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..H {
        for x in 0..W {
            assert_eq!(board.cell_at(x, y), None, "cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(W, 0), None);
    assert_eq!(board.get(0, H), None);
    assert_eq!(board.get(W - 1, H - 1), Some(None));
}

#[test]
#[should_panic(expected = "outside the 10x22 board")]
fn test_cell_at_out_of_bounds_panics() {
    let board = Board::new();
    board.cell_at(W, 0);
}

#[test]
#[should_panic]
fn test_set_cell_out_of_bounds_panics() {
    let mut board = Board::new();
    board.set_cell(0, H, Some(PieceKind::T));
}

#[test]
fn test_lock_cells_writes_only_those_cells() {
    let mut board = Board::new();
    let cells = [(3, 10), (4, 10), (3, 11), (4, 11)];
    board.lock_cells(&cells, PieceKind::O);

    for y in 0..H {
        for x in 0..W {
            let expected = cells.contains(&(x, y)).then_some(PieceKind::O);
            assert_eq!(board.cell_at(x, y), expected, "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    for x in 0..W - 1 {
        board.set_cell(x, 21, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(21));

    board.set_cell(W - 1, 21, Some(PieceKind::L));
    assert!(board.is_row_full(21));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clear_two_adjacent_rows_shifts_everything_above() {
    let mut board = Board::new();
    for y in 0..H {
        if y == 5 || y == 6 {
            fill_row(&mut board, y, PieceKind::I);
        } else {
            // one marker per row so every row is distinguishable and not full
            board.set_cell(y % W, y, Some(PieceKind::ALL[y as usize % 7]));
        }
    }
    let before: Vec<Vec<_>> = (0..H)
        .map(|y| (0..W).map(|x| board.cell_at(x, y)).collect())
        .collect();

    assert_eq!(board.clear_full_lines(), 2);

    for y in 0..2 {
        assert!((0..W).all(|x| board.cell_at(x, y).is_none()), "row {} not empty", y);
    }
    for y in 0..5 {
        for x in 0..W {
            assert_eq!(board.cell_at(x, y + 2), before[y as usize][x as usize]);
        }
    }
    for y in 7..H {
        for x in 0..W {
            assert_eq!(board.cell_at(x, y), before[y as usize][x as usize]);
        }
    }
}

#[test]
fn test_clear_non_adjacent_rows_in_one_pass() {
    let mut board = Board::new();
    fill_row(&mut board, 21, PieceKind::S);
    board.set_cell(0, 20, Some(PieceKind::T));
    fill_row(&mut board, 19, PieceKind::Z);
    board.set_cell(9, 18, Some(PieceKind::J));

    let rows = board.clear_full_rows();
    assert_eq!(rows.as_slice(), &[21, 19]);
    assert_eq!(board.cell_at(0, 21), Some(PieceKind::T));
    assert_eq!(board.cell_at(9, 20), Some(PieceKind::J));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_reports_more_than_four_rows() {
    let mut board = Board::new();
    for y in 16..H {
        fill_row(&mut board, y, PieceKind::T);
    }
    board.set_cell(7, 15, Some(PieceKind::S));

    let rows = board.clear_full_rows();
    assert_eq!(rows.as_slice(), &[21, 20, 19, 18, 17, 16]);
    assert_eq!(board.cell_at(7, 21), Some(PieceKind::S));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_clear_nothing_is_noop() {
    let mut board = Board::new();
    board.set_cell(2, 15, Some(PieceKind::L));
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    fill_row(&mut board, 3, PieceKind::O);
    board.reset();
    assert!(board.cells().iter().all(Option::is_none));
}
