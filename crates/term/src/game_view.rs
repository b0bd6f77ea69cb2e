//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and owns all user-facing phrasing for
//! status, scores, and mode names; the engine only hands over structured
//! state.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Mode, Symbol, SYMBOLS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Frontend-owned state drawn alongside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub cursor_row: usize,
    pub cursor_col: usize,
    /// Mark picked for the next free-choice placement.
    pub picked: Option<Symbol>,
    /// Selected turn-clock duration in seconds (0 = off).
    pub clock_duration_secs: u64,
    /// Seconds left on an armed turn clock.
    pub clock_remaining_secs: Option<u64>,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            cursor_row: 0,
            cursor_col: 0,
            picked: None,
            clock_duration_secs: 0,
            clock_remaining_secs: None,
        }
    }
}

/// A lightweight terminal view of the board and HUD.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 leaves a gap between marks and fits the two-char "[]".
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

/// Row the board frame starts at; the HUD lines sit above it.
const BOARD_TOP: u16 = 5;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport on every call.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let bold = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let dim = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        fb.draw_str(1, 0, &status_text(snap), bold);
        fb.draw_str(1, 1, &score_line(snap), CellStyle::default());
        fb.draw_str(1, 2, &mode_line(snap), dim);
        fb.draw_str(1, 3, &clock_line(snap, hud), dim);

        self.draw_board(snap, hud, viewport, fb);

        if viewport.height > 0 {
            fb.draw_str(1, viewport.height - 1, HELP_LINE, dim);
        }
    }

    pub fn render(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        let size = snap.board_size as u16;
        let board_px_w = size * self.cell_w;
        let board_px_h = size * self.cell_h;
        let frame_w = board_px_w + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = BOARD_TOP;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(fb, start_x, start_y, board_px_w + 2, board_px_h + 2, border);

        for row in 0..size {
            for col in 0..size {
                let pos = (row * size + col) as usize;
                let x = start_x + 1 + col * self.cell_w;
                let y = start_y + 1 + row * self.cell_h;

                let on_cursor = snap.game_active
                    && hud.cursor_row == row as usize
                    && hud.cursor_col == col as usize;
                let on_winning_line = snap.winning_line.contains(&pos);
                let bg = if on_cursor {
                    Rgb::new(70, 70, 95)
                } else if on_winning_line {
                    Rgb::new(40, 95, 40)
                } else {
                    Rgb::new(24, 24, 32)
                };

                match snap.cells[pos] {
                    Some(symbol) => {
                        let style = CellStyle {
                            fg: symbol_color(symbol),
                            bg,
                            bold: true,
                            dim: false,
                        };
                        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
                        fb.draw_str(x, y, symbol.as_str(), style);
                    }
                    None => {
                        let style = CellStyle {
                            fg: Rgb::new(90, 90, 100),
                            bg,
                            bold: false,
                            dim: !on_cursor,
                        };
                        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
                        fb.set(x + self.cell_w / 2, y, style.into_cell('·'));
                    }
                }
            }
        }
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
    }
}

const HELP_LINE: &str =
    "arrows move · enter place · 1-4 pick · m mode · +/- size · n new · s scores · t clock · q quit";

/// User-facing status phrasing for the structured engine status.
pub fn status_text(snap: &GameSnapshot) -> String {
    match snap.status {
        GameStatus::InProgress { turn } => format!("Player {} to move", turn.as_str()),
        GameStatus::Won { winner } => match snap.mode {
            Mode::Classic => format!("Player {} wins!", winner.as_str()),
            Mode::Misere => format!("Misere: player {} wins!", winner.as_str()),
            Mode::Gomoku => format!("Gomoku: player {} wins!", winner.as_str()),
            Mode::FreeChoice => format!("Free choice: player {} wins!", winner.as_str()),
        },
        GameStatus::Draw => String::from("Draw!"),
    }
}

/// HUD score line for the active players.
pub fn score_line(snap: &GameSnapshot) -> String {
    let mut out = String::new();
    for (i, symbol) in SYMBOLS.iter().take(snap.active_players).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{} {}", symbol.as_str(), snap.scores[i]));
    }
    out.push_str(&format!("  games {}", snap.total_games));
    out
}

/// HUD mode line.
pub fn mode_line(snap: &GameSnapshot) -> String {
    format!(
        "mode {}  board {}x{}  win {} in a row",
        snap.mode.as_str(),
        snap.board_size,
        snap.board_size,
        snap.win_length
    )
}

fn clock_line(snap: &GameSnapshot, hud: &Hud) -> String {
    let mut out = if hud.clock_duration_secs == 0 {
        String::from("clock off")
    } else {
        match hud.clock_remaining_secs {
            Some(left) => format!("clock {}s ({}s left)", hud.clock_duration_secs, left),
            None => format!("clock {}s", hud.clock_duration_secs),
        }
    };
    if snap.mode == Mode::FreeChoice {
        let picked = hud.picked.map_or("-", |symbol| symbol.as_str());
        out.push_str(&format!("  pick {}", picked));
    }
    out
}

fn symbol_color(symbol: Symbol) -> Rgb {
    match symbol {
        Symbol::X => Rgb::new(225, 95, 95),
        Symbol::O => Rgb::new(95, 145, 225),
        Symbol::Brackets => Rgb::new(100, 195, 100),
        Symbol::Hash => Rgb::new(222, 192, 80),
    }
}
