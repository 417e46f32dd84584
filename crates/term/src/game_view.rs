//! GameView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout on screen follows the board's display convention: each `x` is one
//! line of the board frame and each `y` one cell within the line.

use crate::core::{BoardSnapshot, SessionStatus};
use crate::fb::{FrameBuffer, Rgb, ScreenCell, Style};
use crate::types::DisplayAlias;

const BOARD_BG: Rgb = Rgb::new(20, 24, 20);

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

/// Session facts that are not part of the board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHud {
    pub turn: u32,
    pub status: SessionStatus,
}

impl Default for SessionHud {
    fn default() -> Self {
        Self {
            turn: 0,
            status: SessionStatus::Running,
        }
    }
}

/// Board renderer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Size of the bordered board frame for `snap`.
    pub fn frame_size(&self, snap: &BoardSnapshot) -> (u16, u16) {
        let w = clamp_u16(snap.rows).saturating_mul(self.cell_w).saturating_add(2);
        let h = clamp_u16(snap.cols).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        hud: &SessionHud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(ScreenCell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Cells past the viewport edge are clipped.
        let visible_lines = clamp_u16(snap.cols).min(viewport.height);
        let visible_cols = clamp_u16(snap.rows).min(viewport.width);
        for (line, aliases) in snap.lines().take(visible_lines as usize).enumerate() {
            for (col, alias) in aliases.iter().take(visible_cols as usize).enumerate() {
                self.draw_board_cell(fb, start_x, start_y, col as u16, line as u16, *alias);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        let overlay = match hud.status {
            SessionStatus::Escaped => Some("ESCAPED"),
            SessionStatus::Dead => Some("GAME OVER"),
            SessionStatus::Running | SessionStatus::Quit => None,
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, hud: &SessionHud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..(w - 1).min(fb.width()) {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..(h - 1).min(fb.height()) {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        line: u16,
        alias: DisplayAlias,
    ) {
        let (ch, style) = alias_style(alias);
        let px = start_x
            .saturating_add(1)
            .saturating_add(col.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(line.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        hud: &SessionHud,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        if let Some(e) = snap.entity {
            fb.put_str(panel_x, y, "HP", label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, e.health, value);
            y = y.saturating_add(2);

            fb.put_str(panel_x, y, "KEY", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, if e.has_key { "yes" } else { "no" }, value);
            y = y.saturating_add(2);

            fb.put_str(panel_x, y, "POS", label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, e.position.x as u32, value);
            fb.put_char(panel_x + 3, y, ',', value);
            fb.put_u32(panel_x + 5, y, e.position.y as u32, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "TURN", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.turn, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Glyph and style for a board cell.
pub fn alias_style(alias: DisplayAlias) -> (char, Style) {
    let style = |r, g, b| Style::new(Rgb::new(r, g, b), BOARD_BG);
    match alias {
        DisplayAlias::Wall => ('█', style(120, 120, 130)),
        DisplayAlias::Grass => ('·', style(90, 160, 90).dim()),
        DisplayAlias::Key => ('¤', style(240, 220, 80).bold()),
        DisplayAlias::Door => ('▓', style(170, 110, 60)),
        DisplayAlias::Trap => ('×', style(220, 80, 80).bold()),
        DisplayAlias::Ghost => ('@', style(230, 230, 255).bold()),
    }
}
