//! Error types raised by the core.
//!
//! Blocked and out-of-bounds moves are not errors: they are reported as
//! [`MoveOutcome`](crate::board::MoveOutcome) variants. Only death leaves a
//! move as an error, and only a bad layout fails construction.

use thiserror::Error;

use crate::types::Position;

/// Damage would have brought the entity's health to zero or below.
///
/// Health is left untouched when this is returned; the session treats it as
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entity died: {damage} damage against {health} health")]
pub struct EntityDied {
    pub health: u32,
    pub damage: u32,
}

/// A tile code string could not be turned into a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("board must have at least one cell (cols={cols}, rows={rows})")]
    EmptyBoard { cols: usize, rows: usize },

    #[error("board of {cols}x{rows} cells is too large")]
    TooLarge { cols: usize, rows: usize },

    #[error("layout has {actual} tiles, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("unknown tile code {code:?} at index {index}")]
    UnknownTile { code: char, index: usize },

    #[error("layout has no start tile 'G'")]
    MissingStart,

    #[error("layout has more than one start tile: {first} and {second}")]
    DuplicateStart { first: Position, second: Position },
}
