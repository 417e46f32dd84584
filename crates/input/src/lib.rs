//! Terminal input module.
//!
//! Maps `crossterm` key events, or lines of typed text, into
//! [`crate::types::Command`]s. Turn-based play needs no repeat handling: one
//! key press is one command.

pub mod map;

pub use ghost_grid_types as types;

pub use map::{handle_key_event, parse_line, should_quit};
