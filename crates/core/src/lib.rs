//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same move sequence always produces the same game
//! - **Testable**: comprehensive unit tests for all game rules
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N×N grid with flat row-major storage
//! - [`rules`]: turn rotation, win-length policy, and the line scan
//! - [`score`]: cross-game win tallies
//! - [`engine`]: the state machine tying it all together
//! - [`snapshot`]: serializable state copies for frontends
//!
//! # Game Rules
//!
//! Four variants share one engine:
//!
//! - **Classic**: complete a line to win. Boards of 5 and up rotate four
//!   players and play to 4 in a row; smaller boards need a full line.
//! - **Misere**: completing a line *loses*; the next player in rotation is
//!   credited with the win.
//! - **Gomoku**: two players on a fixed larger board, 5 in a row.
//! - **Free choice**: either player may place either mark each turn, 3 in a
//!   row on boards of at most 5.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameEngine;
//! use tui_tictactoe_types::Symbol;
//!
//! let mut game = GameEngine::new();
//!
//! // X takes the top row.
//! for pos in [0, 3, 1, 4, 2] {
//!     assert!(game.make_move(pos, None));
//! }
//!
//! assert!(!game.is_active());
//! assert_eq!(game.winner(), Some(Symbol::X));
//! assert_eq!(game.player_score(Symbol::X), 1);
//! ```

pub mod board;
pub mod engine;
pub mod rules;
pub mod score;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::GameEngine;
pub use rules::{active_player_count, find_winning_line, next_symbol, win_length, WinningLine};
pub use score::ScoreBoard;
pub use snapshot::GameSnapshot;
