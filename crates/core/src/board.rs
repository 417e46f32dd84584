//! Board module - the grid and the movement state machine
//!
//! The board is a `cols x rows` grid of [`Cell`]s indexed `[x][y]`, stored as
//! a flat vector in x-major order (`x * rows + y`). Every accessor is bounds
//! checked; there is no wraparound.
//!
//! Exactly one cell holds the entity. A move resolves to exactly one of:
//!
//! - [`MoveOutcome::OutOfBounds`]: target off the grid, nothing changes
//! - [`MoveOutcome::Blocked`]: target not walkable, nothing changes
//! - [`MoveOutcome::Moved`]: terrain effect applied, entity transferred
//! - `Err(EntityDied)`: fatal terrain, nothing moves

use tracing::{debug, error};

use crate::cell::Cell;
use crate::entity::Entity;
use crate::error::{EntityDied, LayoutError};
use crate::snapshot::BoardSnapshot;
use crate::terrain::StepResult;
use crate::types::{Direction, DisplayAlias, Position};

/// Result of a move that did not kill the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target outside the grid
    OutOfBounds,
    /// Target terrain not walkable
    Blocked,
    /// Entity now stands on `to`
    Moved {
        from: Position,
        to: Position,
        effect: StepResult,
    },
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: usize,
    rows: usize,
    /// Flat cells, x-major (x * rows + y)
    cells: Vec<Cell>,
    /// Where the entity currently stands
    cursor: Position,
}

impl Board {
    /// Build a board from x-major cells.
    ///
    /// Exactly one cell must carry an occupant; its recorded position is
    /// overwritten with the cell's coordinates.
    pub fn from_cells(cols: usize, rows: usize, mut cells: Vec<Cell>) -> Result<Self, LayoutError> {
        if cols == 0 || rows == 0 {
            return Err(LayoutError::EmptyBoard { cols, rows });
        }
        let expected = cols
            .checked_mul(rows)
            .ok_or(LayoutError::TooLarge { cols, rows })?;
        if cells.len() != expected {
            return Err(LayoutError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let mut cursor: Option<Position> = None;
        for (idx, cell) in cells.iter_mut().enumerate() {
            let pos = Position::new(idx / rows, idx % rows);
            if let Some(entity) = cell.occupant_mut() {
                if let Some(first) = cursor {
                    return Err(LayoutError::DuplicateStart { first, second: pos });
                }
                entity.set_position(pos);
                cursor = Some(pos);
            }
        }

        let cursor = cursor.ok_or(LayoutError::MissingStart)?;
        Ok(Self {
            cols,
            rows,
            cells,
            cursor,
        })
    }

    /// Extent of `x`
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Extent of `y`
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x >= self.cols || pos.y >= self.rows {
            return None;
        }
        Some(pos.x * self.rows + pos.y)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Cell at `pos`, or `None` when out of bounds
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index(pos).map(move |idx| &mut self.cells[idx])
    }

    /// All cells, x-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells with their coordinates, x-major
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (Position::new(idx / rows, idx % rows), cell))
    }

    pub fn alias_at(&self, pos: Position) -> Option<DisplayAlias> {
        self.cell(pos).map(Cell::alias)
    }

    pub fn entity_position(&self) -> Position {
        self.cursor
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.cell(self.cursor).and_then(Cell::occupant)
    }

    pub fn move_up(&mut self) -> Result<MoveOutcome, EntityDied> {
        self.move_entity(Direction::Up)
    }

    pub fn move_down(&mut self) -> Result<MoveOutcome, EntityDied> {
        self.move_entity(Direction::Down)
    }

    pub fn move_left(&mut self) -> Result<MoveOutcome, EntityDied> {
        self.move_entity(Direction::Left)
    }

    pub fn move_right(&mut self) -> Result<MoveOutcome, EntityDied> {
        self.move_entity(Direction::Right)
    }

    /// Move the entity one cell in `direction`.
    pub fn move_entity(&mut self, direction: Direction) -> Result<MoveOutcome, EntityDied> {
        let from = self.cursor;
        let outcome = match from.step(direction) {
            Some(to) => self.attempt_move(from, to),
            None => Ok(MoveOutcome::OutOfBounds),
        };

        match &outcome {
            Ok(o) => debug!(direction = direction.as_str(), ?from, outcome = ?o, "move resolved"),
            Err(died) => debug!(direction = direction.as_str(), ?from, %died, "move was fatal"),
        }
        outcome
    }

    fn attempt_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, EntityDied> {
        let (Some(src), Some(dst)) = (self.index(from), self.index(to)) else {
            return Ok(MoveOutcome::OutOfBounds);
        };

        let terrain = self.cells[dst].terrain();
        let Some(entity) = self.cells[src].occupant_mut() else {
            // Only reachable when the occupant was taken out through `cell_mut`.
            debug_assert!(false, "no entity at cursor {from}");
            error!(cursor = %from, "no entity at cursor, move ignored");
            return Ok(MoveOutcome::Blocked);
        };

        let effect = terrain.step_on(entity)?;
        if effect == StepResult::Blocked {
            debug!(at = %to, tile = terrain.kind().as_str(), "bumped");
            return Ok(MoveOutcome::Blocked);
        }

        entity.set_position(to);
        let (from_cell, to_cell) = pair_mut(&mut self.cells, src, dst);
        from_cell.transfer_occupant_to(to_cell);
        self.cursor = to;

        Ok(MoveOutcome::Moved { from, to, effect })
    }

    /// Fill `out` with the current display state, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.cols = self.cols;
        out.rows = self.rows;
        out.aliases.clear();
        out.aliases.extend(self.cells.iter().map(Cell::alias));
        out.entity = self.entity().map(Into::into);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Two distinct mutable cells out of one slice.
fn pair_mut(cells: &mut [Cell], a: usize, b: usize) -> (&mut Cell, &mut Cell) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = cells.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = cells.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Terrain;

    /// 3x3 grass board with the entity in the middle.
    fn open_board() -> Board {
        let mut cells = vec![Cell::new(Terrain::Grass); 9];
        cells[4].set_occupant(Entity::new(3, Position::default()));
        Board::from_cells(3, 3, cells).unwrap()
    }

    #[test]
    fn index_is_x_major() {
        let board = open_board();
        assert_eq!(board.index(Position::new(0, 0)), Some(0));
        assert_eq!(board.index(Position::new(0, 2)), Some(2));
        assert_eq!(board.index(Position::new(1, 0)), Some(3));
        assert_eq!(board.index(Position::new(2, 2)), Some(8));
        assert_eq!(board.index(Position::new(3, 0)), None);
        assert_eq!(board.index(Position::new(0, 3)), None);
    }

    #[test]
    fn from_cells_records_entity_position() {
        let board = open_board();
        assert_eq!(board.entity_position(), Position::new(1, 1));
        assert_eq!(board.entity().unwrap().position(), Position::new(1, 1));
    }

    #[test]
    fn from_cells_rejects_bad_shapes() {
        assert_eq!(
            Board::from_cells(0, 3, Vec::new()),
            Err(LayoutError::EmptyBoard { cols: 0, rows: 3 })
        );
        assert_eq!(
            Board::from_cells(2, 2, vec![Cell::default(); 3]),
            Err(LayoutError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Board::from_cells(2, 2, vec![Cell::default(); 4]),
            Err(LayoutError::MissingStart)
        );

        let ghost = Entity::new(3, Position::default());
        let mut cells = vec![Cell::default(); 4];
        cells[1].set_occupant(ghost.clone());
        cells[2].set_occupant(ghost);
        assert_eq!(
            Board::from_cells(2, 2, cells),
            Err(LayoutError::DuplicateStart {
                first: Position::new(0, 1),
                second: Position::new(1, 0)
            })
        );
    }

    #[test]
    fn from_cells_rejects_overflowing_size() {
        assert_eq!(
            Board::from_cells(usize::MAX, 2, Vec::new()),
            Err(LayoutError::TooLarge {
                cols: usize::MAX,
                rows: 2
            })
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no entity at cursor")]
    fn missing_entity_at_cursor_is_not_a_wall_bump() {
        let mut board = open_board();
        let cursor = board.entity_position();
        board.cell_mut(cursor).unwrap().take_occupant();
        let _ = board.move_up();
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut cells = vec![Cell::new(Terrain::Grass), Cell::new(Terrain::Wall)];
        let (a, b) = pair_mut(&mut cells, 1, 0);
        assert_eq!(a.terrain(), Terrain::Wall);
        assert_eq!(b.terrain(), Terrain::Grass);
    }

    #[test]
    fn moves_follow_direction_deltas() {
        let mut board = open_board();
        let outcome = board.move_up().unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::new(1, 1),
                to: Position::new(0, 1),
                effect: StepResult::Ok
            }
        );

        board.move_right().unwrap();
        assert_eq!(board.entity_position(), Position::new(0, 2));
        board.move_down().unwrap();
        board.move_left().unwrap();
        assert_eq!(board.entity_position(), Position::new(1, 1));
        assert_eq!(board.alias_at(Position::new(1, 1)), Some(DisplayAlias::Ghost));
        assert_eq!(board.alias_at(Position::new(0, 2)), Some(DisplayAlias::Grass));
    }

    #[test]
    fn edge_moves_are_no_ops() {
        let mut cells = vec![Cell::new(Terrain::Grass); 4];
        cells[0].set_occupant(Entity::new(3, Position::default()));
        let mut board = Board::from_cells(2, 2, cells).unwrap();
        let before = board.clone();

        assert_eq!(board.move_up(), Ok(MoveOutcome::OutOfBounds));
        assert_eq!(board.move_left(), Ok(MoveOutcome::OutOfBounds));
        assert_eq!(board, before);

        board.move_down().unwrap();
        board.move_right().unwrap();
        let corner = board.clone();
        assert_eq!(board.move_down(), Ok(MoveOutcome::OutOfBounds));
        assert_eq!(board.move_right(), Ok(MoveOutcome::OutOfBounds));
        assert_eq!(board, corner);
    }

    #[test]
    fn fatal_move_leaves_board_untouched() {
        let mut cells = vec![Cell::new(Terrain::Grass), Cell::new(Terrain::trap())];
        cells[0].set_occupant(Entity::new(1, Position::default()));
        let mut board = Board::from_cells(1, 2, cells).unwrap();
        let before = board.clone();

        assert!(board.move_right().is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn snapshot_into_reuses_buffer() {
        let board = open_board();
        let mut snap = BoardSnapshot::default();
        board.snapshot_into(&mut snap);
        board.snapshot_into(&mut snap);
        assert_eq!(snap.aliases.len(), 9);
        assert_eq!(snap, board.snapshot());
        assert_eq!(snap.alias(Position::new(1, 1)), Some(DisplayAlias::Ghost));
    }
}
