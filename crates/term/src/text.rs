//! Plain-text board rendering for line-mode play.
//!
//! One display line per `x`, one glyph per `y`, no styling. This is what the
//! line frontend prints after clearing the screen.

use crate::core::BoardSnapshot;

use crate::types::DisplayAlias;

/// Emoji glyph for an alias.
pub fn glyph(alias: DisplayAlias) -> &'static str {
    match alias {
        DisplayAlias::Wall => "🔲",
        DisplayAlias::Grass => "⬜️",
        DisplayAlias::Ghost => "👻",
        DisplayAlias::Key => "🗝",
        DisplayAlias::Door => "🚪",
        DisplayAlias::Trap => "💀",
    }
}

/// Render the board, lines joined by `\n` with no trailing newline.
pub fn render_board(snap: &BoardSnapshot) -> String {
    render_with(snap, glyph)
}

/// Render the board with a custom glyph table.
pub fn render_with(snap: &BoardSnapshot, glyph: impl Fn(DisplayAlias) -> &'static str) -> String {
    let mut out = String::new();
    for (i, line) in snap.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for alias in line {
            out.push_str(glyph(*alias));
        }
    }
    out
}

/// Single ASCII letter for an alias: the layout code, `G` for the ghost.
pub fn ascii_glyph(alias: DisplayAlias) -> &'static str {
    match alias {
        DisplayAlias::Wall => "W",
        DisplayAlias::Grass => "g",
        DisplayAlias::Ghost => "G",
        DisplayAlias::Key => "K",
        DisplayAlias::Door => "D",
        DisplayAlias::Trap => "T",
    }
}

/// One-line status under the board.
pub fn status_line(snap: &BoardSnapshot) -> String {
    match snap.entity {
        Some(e) => format!(
            "HP {}  KEY {}  POS {}",
            e.health,
            if e.has_key { "yes" } else { "no" },
            e.position
        ),
        None => String::new(),
    }
}
