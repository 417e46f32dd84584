use crate::entity::Entity;
use crate::types::{DisplayAlias, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntitySnapshot {
    pub position: Position,
    pub health: u32,
    pub has_key: bool,
    pub escaped: bool,
}

impl From<&Entity> for EntitySnapshot {
    fn from(value: &Entity) -> Self {
        Self {
            position: value.position(),
            health: value.health(),
            has_key: value.has_key(),
            escaped: value.escaped(),
        }
    }
}

/// Read-only display state of a board.
///
/// `aliases` is x-major like the board itself: one display line per `x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    pub cols: usize,
    pub rows: usize,
    pub aliases: Vec<DisplayAlias>,
    pub entity: Option<EntitySnapshot>,
}

impl BoardSnapshot {
    pub fn alias(&self, pos: Position) -> Option<DisplayAlias> {
        if pos.x >= self.cols || pos.y >= self.rows {
            return None;
        }
        self.aliases.get(pos.x * self.rows + pos.y).copied()
    }

    /// One slice per display line (`x`), each `rows` long.
    pub fn lines(&self) -> impl Iterator<Item = &[DisplayAlias]> + '_ {
        // chunks() panics on zero; an empty snapshot has no lines anyway.
        self.aliases.chunks(self.rows.max(1))
    }

    pub fn escaped(&self) -> bool {
        self.entity.is_some_and(|e| e.escaped)
    }
}
