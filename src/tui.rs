//! Full-screen frontend: raw mode, one key press per turn.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use ghost_grid::core::{BoardSnapshot, Session, SessionStatus};
use ghost_grid::input::handle_key_event;
use ghost_grid::term::{FrameBuffer, GameView, SessionHud, TerminalRenderer, Viewport};

pub fn run(session: &mut Session) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = play(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn play(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        session.snapshot_into(&mut snap);
        let hud = SessionHud {
            turn: session.turn(),
            status: session.status(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if session.is_over() {
                    // Final frame stays up until any key.
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(command) => {
                        if session.apply(command) == SessionStatus::Quit {
                            return Ok(());
                        }
                    }
                    None => debug!(code = ?key.code, "unmapped key"),
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
