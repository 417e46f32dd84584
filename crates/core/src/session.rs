//! Session module - the turn loop's state machine
//!
//! A session owns the board (and through it the ghost) and accepts one
//! [`Command`] per turn. It ends on quit, death or escape; once over, every
//! further command is ignored.

use tracing::{debug, info};

use crate::board::{Board, MoveOutcome};
use crate::config::GameConfig;
use crate::error::LayoutError;
use crate::snapshot::BoardSnapshot;
use crate::types::Command;

/// Where a session stands after a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Accepting commands
    Running,
    /// The ghost carried the key through the door
    Escaped,
    /// Damage would have taken the ghost's health to zero
    Dead,
    /// The player asked to stop
    Quit,
}

impl SessionStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, SessionStatus::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Running => "running",
            SessionStatus::Escaped => "escaped",
            SessionStatus::Dead => "dead",
            SessionStatus::Quit => "quit",
        }
    }
}

/// A single game
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    status: SessionStatus,
    /// Commands that reached the board
    turn: u32,
    last_outcome: Option<MoveOutcome>,
}

impl Session {
    pub fn new(board: Board) -> Self {
        let status = if board.entity().is_some_and(|e| e.escaped()) {
            SessionStatus::Escaped
        } else {
            SessionStatus::Running
        };

        info!(
            cols = board.cols(),
            rows = board.rows(),
            start = %board.entity_position(),
            "session started"
        );

        Self {
            board,
            status,
            turn: 0,
            last_outcome: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, LayoutError> {
        Board::from_config(config).map(Self::new)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Outcome of the most recent move that did not kill the ghost
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    /// Apply one command and return the resulting status.
    pub fn apply(&mut self, command: Command) -> SessionStatus {
        if self.is_over() {
            debug!(
                command = command.as_str(),
                status = self.status.as_str(),
                "session over, command ignored"
            );
            return self.status;
        }

        match command {
            Command::Quit => self.finish(SessionStatus::Quit),
            Command::Move(direction) => {
                self.turn += 1;
                match self.board.move_entity(direction) {
                    Ok(outcome) => {
                        self.last_outcome = Some(outcome);
                        if self.board.entity().is_some_and(|e| e.escaped()) {
                            self.finish(SessionStatus::Escaped);
                        }
                    }
                    Err(died) => {
                        debug!(%died, "fatal move");
                        self.finish(SessionStatus::Dead);
                    }
                }
            }
        }

        self.status
    }

    /// Apply commands in order, stopping at the first terminal status.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) -> SessionStatus {
        for command in commands {
            if self.apply(command).is_over() {
                break;
            }
        }
        self.status
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        self.board.snapshot_into(out);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    fn finish(&mut self, status: SessionStatus) {
        self.status = status;
        let health = self.board.entity().map(|e| e.health());
        info!(status = status.as_str(), turn = self.turn, ?health, "session over");
    }
}
