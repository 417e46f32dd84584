//! Board construction from tile codes.
//!
//! Codes are consumed in column-major order: for each `x` in `0..cols`, for
//! each `y` in `0..rows`. Whitespace is skipped, so a layout may be written
//! one display line per source line:
//!
//! ```
//! use ghost_grid_core::{parse_layout, GameConfig};
//! use ghost_grid_core::types::{DisplayAlias, Position};
//!
//! let board = parse_layout(
//!     "WWW
//!      WGK
//!      WDW",
//!     3,
//!     3,
//!     &GameConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(board.entity_position(), Position::new(1, 1));
//! assert_eq!(board.alias_at(Position::new(1, 2)), Some(DisplayAlias::Key));
//! ```

use tracing::warn;

use crate::board::Board;
use crate::cell::Cell;
use crate::config::GameConfig;
use crate::entity::Entity;
use crate::error::LayoutError;
use crate::terrain::Terrain;
use crate::types::{Position, TileKind};

/// Layout code marking grass with the ghost's start.
pub const START_CODE: char = 'G';

/// Build a board from `codes`.
///
/// `G` places a ghost with the configured health and defence; `T` tiles deal
/// the configured trap damage.
pub fn parse_layout(
    codes: &str,
    cols: usize,
    rows: usize,
    config: &GameConfig,
) -> Result<Board, LayoutError> {
    let result = build(codes, cols, rows, config);
    if let Err(err) = &result {
        warn!(%err, cols, rows, "rejected layout");
    }
    result
}

fn build(codes: &str, cols: usize, rows: usize, config: &GameConfig) -> Result<Board, LayoutError> {
    if cols == 0 || rows == 0 {
        return Err(LayoutError::EmptyBoard { cols, rows });
    }

    let expected = cols
        .checked_mul(rows)
        .ok_or(LayoutError::TooLarge { cols, rows })?;
    let mut cells = Vec::with_capacity(expected.min(codes.len()));
    let mut start: Option<Position> = None;

    for (index, code) in codes.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let pos = Position::new(index / rows, index % rows);
        let cell = if code == START_CODE {
            if let Some(first) = start {
                return Err(LayoutError::DuplicateStart { first, second: pos });
            }
            start = Some(pos);
            let ghost = Entity::new(config.ghost.health.max(1), pos)
                .with_defence(config.ghost.defence);
            Cell::with_occupant(Terrain::Grass, ghost)
        } else {
            let kind = TileKind::from_code(code).ok_or(LayoutError::UnknownTile { code, index })?;
            Cell::new(Terrain::from_kind(kind, config.trap_damage))
        };
        cells.push(cell);
    }

    if cells.len() != expected {
        return Err(LayoutError::SizeMismatch {
            expected,
            actual: cells.len(),
        });
    }

    Board::from_cells(cols, rows, cells)
}

impl Board {
    /// Board described by `config.layout`.
    pub fn from_config(config: &GameConfig) -> Result<Self, LayoutError> {
        parse_layout(&config.layout.codes, config.layout.cols, config.layout.rows, config)
    }
}
