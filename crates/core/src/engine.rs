//! Game engine - the multi-mode tic-tac-toe state machine
//!
//! Ties together board, rule policies, and scoring. The engine owns all
//! game state; callers mutate it only through moves, resets, and mode/size
//! configuration. All operations are synchronous and non-blocking, and
//! invalid input is an ordinary negative result, never an error.

use tui_tictactoe_types::{
    Cell, GameStatus, Mode, Symbol, FREE_CHOICE_MAX_SIZE, GOMOKU_BOARD_SIZE, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};

use crate::board::Board;
use crate::rules::{active_player_count, find_winning_line, next_symbol, win_length, WinningLine};
use crate::score::ScoreBoard;
use crate::snapshot::GameSnapshot;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    mode: Mode,
    current_player: Symbol,
    /// Mark whose turn produced the most recent move. In free-choice mode
    /// this is the rotation-tracked mover, not necessarily the placed mark.
    last_move_player: Symbol,
    game_active: bool,
    winner: Option<Symbol>,
    winning_line: Option<WinningLine>,
    scores: ScoreBoard,
}

impl GameEngine {
    /// Create a 3×3 classic game with X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(MIN_BOARD_SIZE),
            mode: Mode::Classic,
            current_player: Symbol::X,
            last_move_player: Symbol::X,
            game_active: true,
            winner: None,
            winning_line: None,
            scores: ScoreBoard::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_misere_mode(&self) -> bool {
        self.mode == Mode::Misere
    }

    pub fn is_gomoku_mode(&self) -> bool {
        self.mode == Mode::Gomoku
    }

    pub fn is_free_choice_mode(&self) -> bool {
        self.mode == Mode::FreeChoice
    }

    pub fn current_player(&self) -> Symbol {
        self.current_player
    }

    pub fn last_move_player(&self) -> Symbol {
        self.last_move_player
    }

    pub fn is_active(&self) -> bool {
        self.game_active
    }

    pub fn winner(&self) -> Option<Symbol> {
        self.winner
    }

    /// Cells of the line that ended the game, if any
    pub fn winning_line(&self) -> Option<&[usize]> {
        self.winning_line.as_deref()
    }

    /// Borrow the board cells, row-major
    pub fn cells(&self) -> &[Cell] {
        self.board.cells()
    }

    /// Copy of the board cells, row-major
    pub fn game_state(&self) -> Vec<Cell> {
        self.board.cells().to_vec()
    }

    /// Marks cycling turns under the current mode and board size
    pub fn active_player_count(&self) -> usize {
        active_player_count(self.mode, self.board.size())
    }

    /// Line length required to end the game
    pub fn win_length(&self) -> usize {
        win_length(self.mode, self.board.size())
    }

    pub fn player_score(&self, symbol: Symbol) -> u32 {
        self.scores.wins(symbol)
    }

    pub fn total_games(&self) -> u32 {
        self.scores.total_games()
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Score tally line for the active players
    pub fn score_text(&self) -> String {
        self.scores.tally_text(self.active_player_count())
    }

    /// Structured status for frontends to format
    pub fn status(&self) -> GameStatus {
        if self.game_active {
            GameStatus::InProgress {
                turn: self.current_player,
            }
        } else if let Some(winner) = self.winner {
            GameStatus::Won { winner }
        } else {
            GameStatus::Draw
        }
    }

    /// Set the board side. Values outside 3..=19 are silently ignored.
    ///
    /// Accepting a new size discards the game in progress and all scores.
    pub fn set_board_size(&mut self, size: usize) {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return;
        }
        self.board.resize(size);
        self.reset_game();
        self.scores.reset();
    }

    /// Switch rule variants.
    ///
    /// Gomoku forces its own board size; free choice clamps oversized boards
    /// down to its maximum. Always resets the game and scores, even when the
    /// mode does not change.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        match mode {
            Mode::Gomoku => self.board.resize(GOMOKU_BOARD_SIZE),
            Mode::FreeChoice if self.board.size() > FREE_CHOICE_MAX_SIZE => {
                self.board.resize(FREE_CHOICE_MAX_SIZE);
            }
            _ => {}
        }
        self.reset_game();
        self.scores.reset();
    }

    /// Enable or disable Misere. Selecting a variant turns the others off;
    /// disabling falls back to Classic.
    pub fn apply_misere_mode(&mut self, enabled: bool) {
        self.set_mode(if enabled { Mode::Misere } else { Mode::Classic });
    }

    /// Enable or disable Gomoku. See [`GameEngine::apply_misere_mode`].
    pub fn apply_gomoku_mode(&mut self, enabled: bool) {
        self.set_mode(if enabled { Mode::Gomoku } else { Mode::Classic });
    }

    /// Enable or disable free choice. See [`GameEngine::apply_misere_mode`].
    pub fn apply_free_choice_mode(&mut self, enabled: bool) {
        self.set_mode(if enabled { Mode::FreeChoice } else { Mode::Classic });
    }

    /// Apply a move at `position` (linear index).
    ///
    /// `symbol` picks the placed mark in free-choice mode; everywhere else
    /// the current player's mark is placed. Returns false and leaves the
    /// state untouched when the game is over, the position is out of range,
    /// or the cell is occupied. A move that wins, draws, or continues the
    /// game all return true.
    pub fn make_move(&mut self, position: usize, symbol: Option<Symbol>) -> bool {
        // is_empty_at also rejects out-of-range positions.
        if !self.game_active || !self.board.is_empty_at(position) {
            return false;
        }

        let mover = self.current_player;
        let placed = match (self.mode, symbol) {
            (Mode::FreeChoice, Some(choice)) => choice,
            _ => mover,
        };

        self.last_move_player = mover;
        self.board.set(position, Some(placed));

        if let Some(line) = find_winning_line(&self.board, placed, self.win_length()) {
            self.game_active = false;
            let winner = if self.mode == Mode::Misere {
                // Completing a line loses; the win goes to the next mark in
                // rotation after the mover.
                next_symbol(mover, self.active_player_count())
            } else {
                mover
            };
            self.winner = Some(winner);
            self.winning_line = Some(line);
            self.scores.record_win(winner);
            return true;
        }

        if self.board.is_full() {
            self.game_active = false;
            self.scores.record_draw();
            return true;
        }

        self.current_player = next_symbol(mover, self.active_player_count());
        true
    }

    /// Start a fresh game on the same board and mode. Scores are kept.
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.current_player = Symbol::X;
        self.last_move_player = Symbol::X;
        self.game_active = true;
        self.winner = None;
        self.winning_line = None;
    }

    /// Zero all win tallies and the game counter. Game state is kept.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Fill `out` with a copy of the observable state.
    ///
    /// Callers can keep one snapshot and refill it every frame.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board_size = self.board.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.mode = self.mode;
        out.current_player = self.current_player;
        out.last_move_player = self.last_move_player;
        out.game_active = self.game_active;
        out.winner = self.winner;
        out.status = self.status();
        out.winning_line.clear();
        if let Some(line) = &self.winning_line {
            out.winning_line.extend_from_slice(line);
        }
        out.scores = self.scores.all_wins();
        out.total_games = self.scores.total_games();
        out.active_players = self.active_player_count();
        out.win_length = self.win_length();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
