//! Line frontend: clear, print the board, read one command per line.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use ghost_grid::core::{Session, SessionStatus};
use ghost_grid::input::parse_line;
use ghost_grid::term::clear_screen;
use ghost_grid::term::text::{render_board, status_line};

pub fn run(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        clear_screen(&mut stdout)?;
        let snap = session.snapshot();
        writeln!(stdout, "{}", render_board(&snap))?;
        writeln!(stdout, "{}", status_line(&snap))?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("stdin closed");
            break;
        };
        match parse_line(&line) {
            Some(command) => {
                session.apply(command);
            }
            None => debug!(input = %line, "unrecognized command"),
        }
    }

    match session.status() {
        SessionStatus::Escaped => writeln!(stdout, "You escaped!")?,
        SessionStatus::Dead => writeln!(stdout, "Game over.")?,
        SessionStatus::Running | SessionStatus::Quit => {}
    }
    Ok(())
}
