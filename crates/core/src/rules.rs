//! Rule policies - turn rotation and win detection
//!
//! Pure functions over board contents. How many marks rotate and how long a
//! winning line must be both depend on the active mode and the board side.

use arrayvec::ArrayVec;

use tui_tictactoe_types::{
    Mode, Symbol, FOUR_PLAYER_MIN_SIZE, FOUR_PLAYER_WIN_LENGTH, FREE_CHOICE_WIN_LENGTH,
    GOMOKU_WIN_LENGTH, MAX_BOARD_SIZE, SYMBOLS,
};

use crate::board::Board;

/// Cells of a winning line, in scan order.
///
/// Capacity covers the longest possible line (a full row on the largest
/// board).
pub type WinningLine = ArrayVec<usize, MAX_BOARD_SIZE>;

/// Number of marks cycling turns for the given mode and board side.
pub fn active_player_count(mode: Mode, board_size: usize) -> usize {
    match mode {
        Mode::Gomoku => 2,
        Mode::FreeChoice => 2,
        Mode::Classic | Mode::Misere => {
            if board_size >= FOUR_PLAYER_MIN_SIZE {
                4
            } else {
                2
            }
        }
    }
}

/// Length a line must reach to end the game.
///
/// Small classic boards require a full row; four-player boards play to 4,
/// the specialised modes use their fixed lengths.
pub fn win_length(mode: Mode, board_size: usize) -> usize {
    match mode {
        Mode::Gomoku => GOMOKU_WIN_LENGTH,
        Mode::FreeChoice => FREE_CHOICE_WIN_LENGTH,
        Mode::Classic | Mode::Misere => {
            if board_size >= FOUR_PLAYER_MIN_SIZE {
                FOUR_PLAYER_WIN_LENGTH
            } else {
                board_size
            }
        }
    }
}

/// Mark that moves after `current` in an `active_players`-way rotation.
pub fn next_symbol(current: Symbol, active_players: usize) -> Symbol {
    let next = (current.index() + 1) % active_players.max(1);
    SYMBOLS[next]
}

/// Scan every length-`len` window in all four orientations for a line of
/// `needle` marks.
///
/// Orientations are horizontal, vertical, diagonal (top-left to
/// bottom-right), and anti-diagonal (top-right to bottom-left). The first
/// match short-circuits and returns its cells in scan order.
pub fn find_winning_line(board: &Board, needle: Symbol, len: usize) -> Option<WinningLine> {
    let size = board.size();
    if len == 0 || len > size {
        return None;
    }
    // Largest window origin along a scanned axis.
    let last = size - len;

    // Horizontal
    for row in 0..size {
        for col in 0..=last {
            if let Some(line) = window_line(board, needle, row, col, 0, 1, len) {
                return Some(line);
            }
        }
    }

    // Vertical
    for col in 0..size {
        for row in 0..=last {
            if let Some(line) = window_line(board, needle, row, col, 1, 0, len) {
                return Some(line);
            }
        }
    }

    // Diagonal (top-left to bottom-right)
    for row in 0..=last {
        for col in 0..=last {
            if let Some(line) = window_line(board, needle, row, col, 1, 1, len) {
                return Some(line);
            }
        }
    }

    // Anti-diagonal (top-right to bottom-left)
    for row in 0..=last {
        for col in (len - 1)..size {
            if let Some(line) = window_line(board, needle, row, col, 1, -1, len) {
                return Some(line);
            }
        }
    }

    None
}

/// Check one window starting at (row, col) stepping by (dr, dc).
///
/// The caller guarantees the whole window lies on the board.
fn window_line(
    board: &Board,
    needle: Symbol,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    len: usize,
) -> Option<WinningLine> {
    let size = board.size() as isize;
    let cells = board.cells();
    let mut line = WinningLine::new();

    for i in 0..len as isize {
        let r = row as isize + dr * i;
        let c = col as isize + dc * i;
        let pos = (r * size + c) as usize;
        if cells[pos] != Some(needle) {
            return None;
        }
        line.push(pos);
    }

    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, Symbol)]) -> Board {
        let mut board = Board::new(size);
        for &(pos, symbol) in marks {
            board.set(pos, Some(symbol));
        }
        board
    }

    #[test]
    fn test_active_player_count_policy() {
        assert_eq!(active_player_count(Mode::Classic, 3), 2);
        assert_eq!(active_player_count(Mode::Classic, 4), 2);
        assert_eq!(active_player_count(Mode::Classic, 5), 4);
        assert_eq!(active_player_count(Mode::Misere, 10), 4);
        assert_eq!(active_player_count(Mode::Gomoku, 10), 2);
        assert_eq!(active_player_count(Mode::FreeChoice, 5), 2);
    }

    #[test]
    fn test_win_length_policy() {
        assert_eq!(win_length(Mode::Classic, 3), 3);
        assert_eq!(win_length(Mode::Classic, 4), 4);
        assert_eq!(win_length(Mode::Classic, 5), 4);
        assert_eq!(win_length(Mode::Misere, 19), 4);
        assert_eq!(win_length(Mode::Gomoku, 10), 5);
        assert_eq!(win_length(Mode::FreeChoice, 5), 3);
    }

    #[test]
    fn test_next_symbol_wraps_by_player_count() {
        assert_eq!(next_symbol(Symbol::X, 2), Symbol::O);
        assert_eq!(next_symbol(Symbol::O, 2), Symbol::X);
        assert_eq!(next_symbol(Symbol::O, 4), Symbol::Brackets);
        assert_eq!(next_symbol(Symbol::Hash, 4), Symbol::X);
    }

    #[test]
    fn test_find_horizontal_line() {
        let board = board_with(3, &[(0, Symbol::X), (1, Symbol::X), (2, Symbol::X)]);
        let line = find_winning_line(&board, Symbol::X, 3).expect("top row should win");
        assert_eq!(line.as_slice(), &[0, 1, 2]);
        assert!(find_winning_line(&board, Symbol::O, 3).is_none());
    }

    #[test]
    fn test_find_vertical_line() {
        let board = board_with(3, &[(1, Symbol::O), (4, Symbol::O), (7, Symbol::O)]);
        let line = find_winning_line(&board, Symbol::O, 3).expect("middle column should win");
        assert_eq!(line.as_slice(), &[1, 4, 7]);
    }

    #[test]
    fn test_find_diagonal_line() {
        let board = board_with(3, &[(0, Symbol::X), (4, Symbol::X), (8, Symbol::X)]);
        let line = find_winning_line(&board, Symbol::X, 3).expect("main diagonal should win");
        assert_eq!(line.as_slice(), &[0, 4, 8]);
    }

    #[test]
    fn test_find_anti_diagonal_line() {
        let board = board_with(3, &[(2, Symbol::O), (4, Symbol::O), (6, Symbol::O)]);
        let line = find_winning_line(&board, Symbol::O, 3).expect("anti-diagonal should win");
        assert_eq!(line.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn test_window_shorter_than_board() {
        // 5x5 board, win length 4: four in the middle of a row wins even
        // though the row is not full.
        let board = board_with(
            5,
            &[
                (5, Symbol::Brackets),
                (6, Symbol::Brackets),
                (7, Symbol::Brackets),
                (8, Symbol::Brackets),
            ],
        );
        let line = find_winning_line(&board, Symbol::Brackets, 4).expect("window should win");
        assert_eq!(line.as_slice(), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_interrupted_line_does_not_win() {
        let board = board_with(
            3,
            &[(0, Symbol::X), (1, Symbol::O), (2, Symbol::X)],
        );
        assert!(find_winning_line(&board, Symbol::X, 3).is_none());
    }

    #[test]
    fn test_anti_diagonal_near_right_edge() {
        // 5x5, win length 4, anti-diagonal starting at top-right corner.
        let board = board_with(
            5,
            &[(4, Symbol::X), (8, Symbol::X), (12, Symbol::X), (16, Symbol::X)],
        );
        let line = find_winning_line(&board, Symbol::X, 4).expect("anti-diagonal should win");
        assert_eq!(line.as_slice(), &[4, 8, 12, 16]);
    }

    #[test]
    fn test_win_length_longer_than_board_never_matches() {
        let mut board = Board::new(3);
        for pos in 0..board.cell_count() {
            board.set(pos, Some(Symbol::X));
        }
        assert!(find_winning_line(&board, Symbol::X, 5).is_none());
    }
}
