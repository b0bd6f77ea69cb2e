//! Snapshot types - plain serializable views of engine state
//!
//! Frontends render from a `GameSnapshot` instead of borrowing the engine,
//! and external tools can serialize it as JSON.

use serde::{Deserialize, Serialize};

use tui_tictactoe_types::{Cell, GameStatus, Mode, Symbol, MIN_BOARD_SIZE, SYMBOL_COUNT};

/// A copy of everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Side length of the board.
    pub board_size: usize,
    /// Row-major cells, length `board_size²`.
    pub cells: Vec<Cell>,
    pub mode: Mode,
    pub current_player: Symbol,
    pub last_move_player: Symbol,
    pub game_active: bool,
    pub winner: Option<Symbol>,
    pub status: GameStatus,
    /// Cells of the line that ended the game; empty while in progress.
    pub winning_line: Vec<usize>,
    /// Win tallies in rotation order.
    pub scores: [u32; SYMBOL_COUNT],
    pub total_games: u32,
    /// Marks cycling turns under the current mode and board size.
    pub active_players: usize,
    /// Line length required to end the game.
    pub win_length: usize,
}

impl GameSnapshot {
    /// Reset to the state of a fresh default game.
    pub fn clear(&mut self) {
        self.board_size = MIN_BOARD_SIZE;
        self.cells.clear();
        self.cells.resize(MIN_BOARD_SIZE * MIN_BOARD_SIZE, None);
        self.mode = Mode::Classic;
        self.current_player = Symbol::X;
        self.last_move_player = Symbol::X;
        self.game_active = true;
        self.winner = None;
        self.status = GameStatus::InProgress { turn: Symbol::X };
        self.winning_line.clear();
        self.scores = [0; SYMBOL_COUNT];
        self.total_games = 0;
        self.active_players = 2;
        self.win_length = MIN_BOARD_SIZE;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut snapshot = Self {
            board_size: MIN_BOARD_SIZE,
            cells: Vec::new(),
            mode: Mode::Classic,
            current_player: Symbol::X,
            last_move_player: Symbol::X,
            game_active: true,
            winner: None,
            status: GameStatus::InProgress { turn: Symbol::X },
            winning_line: Vec::new(),
            scores: [0; SYMBOL_COUNT],
            total_games: 0,
            active_players: 2,
            win_length: MIN_BOARD_SIZE,
        };
        snapshot.clear();
        snapshot
    }
}
