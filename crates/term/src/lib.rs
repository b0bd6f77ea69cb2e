//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a pure view that projects engine
//! snapshots into a framebuffer, and a renderer that flushes framebuffers to
//! the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all display phrasing out of the engine
//! - Allow precise control over cell aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{mode_line, score_line, status_text, GameView, Hud, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
