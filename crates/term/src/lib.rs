//! Terminal rendering for the ghost grid.
//!
//! Two frontends share this crate:
//!
//! - the full-screen view: [`GameView`] draws a [`BoardSnapshot`](core::BoardSnapshot)
//!   into a [`FrameBuffer`], and [`TerminalRenderer`] flushes it with diff redraws
//! - line mode: [`text::render_board`] turns the snapshot into emoji lines to print
//!
//! Nothing here mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use ghost_grid_core as core;
pub use ghost_grid_types as types;

pub use fb::{FrameBuffer, Rgb, ScreenCell, Style};
pub use game_view::{alias_style, GameView, SessionHud, Viewport};
pub use renderer::{clear_screen, encode_diff_into, encode_full_into, TerminalRenderer};
