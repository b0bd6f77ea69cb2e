//! Score tracking - win tallies across games
//!
//! Tallies survive game resets and are cleared by an explicit score reset or
//! any mode/size change (the engine drives both).

use tui_tictactoe_types::{Symbol, SYMBOLS, SYMBOL_COUNT};

/// Win counts for every mark plus the number of finished games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    wins: [u32; SYMBOL_COUNT],
    total_games: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Win count for one mark
    pub fn wins(&self, symbol: Symbol) -> u32 {
        self.wins[symbol.index()]
    }

    /// Win counts for all marks, in rotation order
    pub fn all_wins(&self) -> [u32; SYMBOL_COUNT] {
        self.wins
    }

    /// Number of finished games (wins and draws)
    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    /// Credit a finished game to `winner`.
    pub fn record_win(&mut self, winner: Symbol) {
        self.wins[winner.index()] += 1;
        self.total_games += 1;
    }

    /// Count a finished game with no winner.
    pub fn record_draw(&mut self) {
        self.total_games += 1;
    }

    /// Zero every tally and the game counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Tally line listing the first `active_players` marks, e.g.
    /// `"Score: X: 1 | O: 0 (Games: 1)"`.
    pub fn tally_text(&self, active_players: usize) -> String {
        let count = active_players.min(SYMBOL_COUNT);
        let mut out = String::from("Score: ");
        for (i, symbol) in SYMBOLS.iter().take(count).enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            out.push_str(symbol.as_str());
            out.push_str(": ");
            out.push_str(&self.wins(*symbol).to_string());
        }
        out.push_str(&format!(" (Games: {})", self.total_games));
        out
    }
}
