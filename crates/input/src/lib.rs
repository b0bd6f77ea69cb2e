//! Input handling for terminal gameplay.
//!
//! Turn-based play needs no auto-repeat handling; this crate is a pure
//! key-to-action mapping.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, should_quit};
