//! Terminal tic-tac-toe runner (default binary).
//!
//! Keyboard-driven frontend over the game engine: a cursor on the board,
//! hotkeys for the mode/size/score controls, and an optional turn clock.
//! All rules live in the engine; this loop only forwards actions and draws.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tictactoe::core::{GameEngine, GameSnapshot};
use tui_tictactoe::input::{handle_key_event, should_quit};
use tui_tictactoe::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use tui_tictactoe::types::GameAction;

/// Selectable turn-clock durations in seconds, cycled by the clock hotkey
/// (0 = off). The clock is purely presentational: expiry abandons the game
/// with a plain reset and never touches the scores.
const CLOCK_CHOICES: [u64; 4] = [0, 15, 30, 60];

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = GameEngine::new();
    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);
    let mut hud = Hud::default();
    let mut clock_index = 0usize;
    let mut deadline: Option<Instant> = None;

    loop {
        // Turn clock: armed by the first move of a game, expiry abandons it.
        if let Some(end) = deadline {
            let now = Instant::now();
            if now >= end {
                engine.reset_game();
                deadline = None;
                hud.clock_remaining_secs = None;
            } else {
                let left = end - now;
                hud.clock_remaining_secs = Some((left.as_millis() as u64 + 999) / 1000);
            }
        }
        hud.clock_duration_secs = CLOCK_CHOICES[clock_index];

        // Render.
        engine.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input, with a short timeout so the clock stays live.
        if event::poll(Duration::from_millis(200))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(
                            &mut engine,
                            &mut hud,
                            &mut clock_index,
                            &mut deadline,
                            action,
                        );
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
    }
}

fn apply_action(
    engine: &mut GameEngine,
    hud: &mut Hud,
    clock_index: &mut usize,
    deadline: &mut Option<Instant>,
    action: GameAction,
) {
    let size = engine.board_size();
    match action {
        GameAction::CursorUp => hud.cursor_row = hud.cursor_row.saturating_sub(1),
        GameAction::CursorDown => hud.cursor_row = (hud.cursor_row + 1).min(size - 1),
        GameAction::CursorLeft => hud.cursor_col = hud.cursor_col.saturating_sub(1),
        GameAction::CursorRight => hud.cursor_col = (hud.cursor_col + 1).min(size - 1),

        GameAction::Place => {
            let position = hud.cursor_row * size + hud.cursor_col;
            let first_move = engine.cells().iter().all(|cell| cell.is_none());
            if engine.make_move(position, hud.picked) {
                let clock = CLOCK_CHOICES[*clock_index];
                if first_move && clock > 0 {
                    *deadline = Some(Instant::now() + Duration::from_secs(clock));
                }
                if !engine.is_active() {
                    *deadline = None;
                    hud.clock_remaining_secs = None;
                }
            }
        }

        GameAction::PickSymbol(symbol) => {
            // Only meaningful in free choice, and only for marks in the
            // active rotation.
            if engine.is_free_choice_mode() && symbol.index() < engine.active_player_count() {
                hud.picked = Some(symbol);
            }
        }

        GameAction::NewGame => {
            engine.reset_game();
            *deadline = None;
            hud.clock_remaining_secs = None;
        }

        GameAction::ResetScores => engine.reset_scores(),

        GameAction::CycleMode => {
            engine.set_mode(engine.mode().cycle());
            *deadline = None;
            hud.clock_remaining_secs = None;
        }

        GameAction::GrowBoard => {
            engine.set_board_size(engine.board_size() + 1);
            *deadline = None;
            hud.clock_remaining_secs = None;
        }

        GameAction::ShrinkBoard => {
            // Sizes below the minimum are ignored by the engine.
            engine.set_board_size(engine.board_size().saturating_sub(1));
            *deadline = None;
            hud.clock_remaining_secs = None;
        }

        GameAction::CycleTimer => {
            *clock_index = (*clock_index + 1) % CLOCK_CHOICES.len();
            *deadline = None;
            hud.clock_remaining_secs = None;
        }
    }

    // Keep the cursor on the board after any resize, and drop a picked mark
    // when leaving free choice.
    let size = engine.board_size();
    hud.cursor_row = hud.cursor_row.min(size - 1);
    hud.cursor_col = hud.cursor_col.min(size - 1);
    if !engine.is_free_choice_mode() {
        hud.picked = None;
    }
}
