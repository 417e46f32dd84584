//! Terrain module - tile types and their entry effects
//!
//! The set of tile kinds is closed, so terrain is a plain enum and every
//! effect is resolved with an exhaustive `match`:
//!
//! | Terrain | Walkable | Rewalkable | Entry effect |
//! |---------|----------|------------|--------------|
//! | Wall    | no       | yes        | blocked, nothing changes |
//! | Grass   | yes      | yes        | none |
//! | Key     | yes      | no         | grants the key |
//! | Door    | yes      | yes        | escape, if the key is carried |
//! | Trap    | yes      | yes        | damage, unless within defence |
//!
//! A non-rewalkable tile is replaced by grass once the entity leaves it
//! (see [`Cell::transfer_occupant_to`](crate::cell::Cell::transfer_occupant_to)).

use crate::entity::Entity;
use crate::error::EntityDied;
use crate::types::{DisplayAlias, TileKind, DEFAULT_TRAP_DAMAGE};

/// What happened when an entity stepped onto a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Entry allowed, nothing else happened
    Ok,
    /// Tile is not walkable; nothing was mutated
    Blocked,
    /// The entity picked up the key
    KeyCollected,
    /// The entity carried the key through the door
    Escaped,
    /// The entity took this much damage and survived
    Damaged(u32),
}

/// A tile type together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Wall,
    Grass,
    Key,
    Door,
    Trap { damage: u32 },
}

impl Terrain {
    /// A trap dealing the default damage.
    pub const fn trap() -> Self {
        Terrain::Trap {
            damage: DEFAULT_TRAP_DAMAGE,
        }
    }

    /// Build terrain of the given kind. Traps get `trap_damage`.
    pub fn from_kind(kind: TileKind, trap_damage: u32) -> Self {
        match kind {
            TileKind::Wall => Terrain::Wall,
            TileKind::Grass => Terrain::Grass,
            TileKind::Key => Terrain::Key,
            TileKind::Door => Terrain::Door,
            TileKind::Trap => Terrain::Trap {
                damage: trap_damage,
            },
        }
    }

    pub fn kind(&self) -> TileKind {
        match self {
            Terrain::Wall => TileKind::Wall,
            Terrain::Grass => TileKind::Grass,
            Terrain::Key => TileKind::Key,
            Terrain::Door => TileKind::Door,
            Terrain::Trap { .. } => TileKind::Trap,
        }
    }

    pub fn alias(&self) -> DisplayAlias {
        self.kind().into()
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, Terrain::Wall)
    }

    /// Whether the tile survives being stepped on.
    pub fn is_rewalkable(&self) -> bool {
        !matches!(self, Terrain::Key)
    }

    /// Apply this tile's entry effect to `entity`.
    ///
    /// Walls return [`StepResult::Blocked`] without touching the entity.
    /// A fatal trap returns [`EntityDied`] with the entity unchanged.
    pub fn step_on(&self, entity: &mut Entity) -> Result<StepResult, EntityDied> {
        match *self {
            Terrain::Wall => Ok(StepResult::Blocked),
            Terrain::Grass => Ok(StepResult::Ok),
            Terrain::Key => {
                entity.set_key(true);
                Ok(StepResult::KeyCollected)
            }
            Terrain::Door => {
                if entity.has_key() {
                    entity.set_escaped();
                    Ok(StepResult::Escaped)
                } else {
                    Ok(StepResult::Ok)
                }
            }
            Terrain::Trap { damage } => {
                let before = entity.health();
                entity.apply_damage(damage)?;
                match before - entity.health() {
                    0 => Ok(StepResult::Ok),
                    taken => Ok(StepResult::Damaged(taken)),
                }
            }
        }
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Terrain::Grass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn ghost() -> Entity {
        Entity::new(3, Position::new(1, 1))
    }

    #[test]
    fn walkability_table() {
        assert!(!Terrain::Wall.is_walkable());
        assert!(Terrain::Grass.is_walkable());
        assert!(Terrain::Key.is_walkable());
        assert!(Terrain::Door.is_walkable());
        assert!(Terrain::trap().is_walkable());

        assert!(!Terrain::Key.is_rewalkable());
        assert!(Terrain::Wall.is_rewalkable());
        assert!(Terrain::Grass.is_rewalkable());
        assert!(Terrain::Door.is_rewalkable());
        assert!(Terrain::trap().is_rewalkable());
    }

    #[test]
    fn wall_blocks_without_mutation() {
        let mut e = ghost();
        let before = e.clone();
        assert_eq!(Terrain::Wall.step_on(&mut e), Ok(StepResult::Blocked));
        assert_eq!(e, before);
    }

    #[test]
    fn key_grants_key() {
        let mut e = ghost();
        assert_eq!(Terrain::Key.step_on(&mut e), Ok(StepResult::KeyCollected));
        assert!(e.has_key());
    }

    #[test]
    fn door_needs_key() {
        let mut e = ghost();
        assert_eq!(Terrain::Door.step_on(&mut e), Ok(StepResult::Ok));
        assert!(!e.escaped());

        e.set_key(true);
        assert_eq!(Terrain::Door.step_on(&mut e), Ok(StepResult::Escaped));
        assert!(e.escaped());
    }

    #[test]
    fn trap_damages_and_respects_defence() {
        let mut e = ghost();
        assert_eq!(Terrain::trap().step_on(&mut e), Ok(StepResult::Damaged(1)));
        assert_eq!(e.health(), 2);

        let mut armored = ghost().with_defence(Some(1));
        assert_eq!(Terrain::trap().step_on(&mut armored), Ok(StepResult::Ok));
        assert_eq!(armored.health(), 3);

        let heavy = Terrain::Trap { damage: 2 };
        assert_eq!(heavy.step_on(&mut armored), Ok(StepResult::Damaged(2)));
        assert_eq!(armored.health(), 1);
    }

    #[test]
    fn fatal_trap_reports_death() {
        let mut e = Entity::new(1, Position::new(0, 0));
        let err = Terrain::trap().step_on(&mut e).unwrap_err();
        assert_eq!(err.damage, 1);
        assert_eq!(e.health(), 1);
    }

    #[test]
    fn kind_and_alias_follow_variant() {
        assert_eq!(Terrain::from_kind(TileKind::Trap, 4), Terrain::Trap { damage: 4 });
        assert_eq!(Terrain::Trap { damage: 4 }.kind(), TileKind::Trap);
        assert_eq!(Terrain::Door.alias(), DisplayAlias::Door);
        assert_eq!(Terrain::default(), Terrain::Grass);
    }
}
