//! Board slot: terrain plus an optional occupant.

use crate::entity::Entity;
use crate::terrain::Terrain;
use crate::types::DisplayAlias;

/// One grid slot.
///
/// The occupant is held by value and moves between cells on transfer, so a
/// cell can only ever hold the entity whose recorded position is this cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    terrain: Terrain,
    occupant: Option<Entity>,
}

impl Cell {
    pub fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            occupant: None,
        }
    }

    pub fn with_occupant(terrain: Terrain, occupant: Entity) -> Self {
        Self {
            terrain,
            occupant: Some(occupant),
        }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Put grass back on this cell.
    pub fn reset_terrain(&mut self) {
        self.terrain = Terrain::default();
    }

    pub fn replace_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }

    pub fn occupant(&self) -> Option<&Entity> {
        self.occupant.as_ref()
    }

    pub fn occupant_mut(&mut self) -> Option<&mut Entity> {
        self.occupant.as_mut()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn set_occupant(&mut self, entity: Entity) {
        self.occupant = Some(entity);
    }

    pub fn take_occupant(&mut self) -> Option<Entity> {
        self.occupant.take()
    }

    /// Move the occupant into `target`.
    ///
    /// One-shot terrain is consumed here, when the entity leaves, so a key
    /// stays on the board for as long as the ghost stands on it.
    pub fn transfer_occupant_to(&mut self, target: &mut Cell) {
        if let Some(entity) = self.take_occupant() {
            target.set_occupant(entity);
        }

        if !self.terrain.is_rewalkable() {
            self.reset_terrain();
        }
    }

    /// Display alias: `Ghost` when occupied, otherwise the terrain's.
    pub fn alias(&self) -> DisplayAlias {
        if self.is_occupied() {
            DisplayAlias::Ghost
        } else {
            self.terrain.alias()
        }
    }
}
