//! The controllable actor.

use crate::error::EntityDied;
use crate::types::Position;

/// Mutable actor state: health, position, key possession and escape flag.
///
/// The entity never validates its own position; the board owns bounds and
/// terrain checks and writes the coordinates after a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    health: u32,
    position: Position,
    has_key: bool,
    escaped: bool,
    /// Damage at or below this value is ignored.
    defence: Option<u32>,
}

impl Entity {
    /// Create an entity without key, defence or escape.
    ///
    /// `health` must be positive for a live entity.
    pub fn new(health: u32, position: Position) -> Self {
        debug_assert!(health > 0, "entity must start alive");
        Self {
            health,
            position,
            has_key: false,
            escaped: false,
            defence: None,
        }
    }

    pub fn with_defence(mut self, defence: Option<u32>) -> Self {
        self.defence = defence;
        self
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn is_at(&self, position: Position) -> bool {
        self.position == position
    }

    pub fn has_key(&self) -> bool {
        self.has_key
    }

    pub fn set_key(&mut self, has_key: bool) {
        self.has_key = has_key;
    }

    pub fn escaped(&self) -> bool {
        self.escaped
    }

    pub fn set_escaped(&mut self) {
        self.escaped = true;
    }

    pub fn defence(&self) -> Option<u32> {
        self.defence
    }

    /// Apply `amount` damage.
    ///
    /// Damage not exceeding the defence is ignored. Fatal damage returns
    /// [`EntityDied`] and leaves health unchanged.
    pub fn apply_damage(&mut self, amount: u32) -> Result<(), EntityDied> {
        if matches!(self.defence, Some(defence) if amount <= defence) {
            return Ok(());
        }

        if amount >= self.health {
            return Err(EntityDied {
                health: self.health,
                damage: amount,
            });
        }

        self.health -= amount;
        Ok(())
    }
}
