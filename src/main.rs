//! Ghost grid runner (default binary).
//!
//! Builds a session from `GHOST_GRID_*` environment variables and plays it in
//! the terminal. `GHOST_GRID_FRONTEND=line` selects the line-by-line prompt
//! instead of the full-screen view.

mod line;
mod logging;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};

use ghost_grid::core::{GameConfig, Session};

/// How the session is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frontend {
    Tui,
    Line,
}

impl Frontend {
    fn from_env() -> Self {
        match std::env::var("GHOST_GRID_FRONTEND").as_deref() {
            Ok("line") | Ok("plain") => Frontend::Line,
            _ => Frontend::Tui,
        }
    }
}

fn main() -> Result<()> {
    let log_dir = std::env::var_os("GHOST_GRID_LOG_DIR").map(PathBuf::from);
    let (_guard, _log_path) = logging::init(log_dir)?;

    let config = GameConfig::from_env();
    let mut session = Session::from_config(&config).context("invalid board layout")?;

    let frontend = Frontend::from_env();
    tracing::info!(?frontend, "starting");

    match frontend {
        Frontend::Tui => tui::run(&mut session)?,
        Frontend::Line => line::run(&mut session)?,
    }

    tracing::info!(
        status = session.status().as_str(),
        turns = session.turn(),
        "finished"
    );
    Ok(())
}
