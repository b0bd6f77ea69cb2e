//! Board tests - grid storage and bounds behavior

use tui_tictactoe::core::Board;
use tui_tictactoe::types::{Symbol, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[test]
fn test_board_new_empty() {
    let board = Board::new(3);
    assert_eq!(board.size(), 3);
    assert_eq!(board.cell_count(), 9);

    for pos in 0..board.cell_count() {
        assert!(board.is_empty_at(pos), "cell {} should be empty", pos);
        assert_eq!(board.get(pos), Some(None));
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(3);
    assert_eq!(board.get(9), None);
    assert_eq!(board.get(usize::MAX), None);
    assert_eq!(board.get_at(3, 0), None);
    assert_eq!(board.get_at(0, 3), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(3);

    assert!(board.set(4, Some(Symbol::X)));
    assert_eq!(board.get(4), Some(Some(Symbol::X)));
    assert_eq!(board.get_at(1, 1), Some(Some(Symbol::X)));
    assert!(!board.is_empty_at(4));

    assert!(board.set(4, None));
    assert!(board.is_empty_at(4));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(3);
    assert!(!board.set(9, Some(Symbol::O)));
    assert!(board.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_board_is_full() {
    let mut board = Board::new(3);
    for pos in 0..8 {
        board.set(pos, Some(Symbol::X));
        assert!(!board.is_full());
    }
    board.set(8, Some(Symbol::O));
    assert!(board.is_full());
}

#[test]
fn test_board_clear() {
    let mut board = Board::new(3);
    board.set(0, Some(Symbol::X));
    board.set(8, Some(Symbol::O));

    board.clear();
    assert!(board.cells().iter().all(|cell| cell.is_none()));
    assert_eq!(board.size(), 3);
}

#[test]
fn test_board_resize_changes_cell_count() {
    let mut board = Board::new(3);
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        board.resize(size);
        assert_eq!(board.size(), size);
        assert_eq!(board.cells().len(), size * size);
    }
}
