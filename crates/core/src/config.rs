//! Game configuration.
use std::env;

use crate::types::{
    DEFAULT_HEALTH, DEFAULT_TRAP_DAMAGE, REFERENCE_COLS, REFERENCE_LAYOUT, REFERENCE_ROWS,
};

/// Parameters of a game: the board layout and the ghost's stats.
///
/// The default is the reference build: the 10x5 layout, health 3, traps
/// dealing 1 damage and no defence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub layout: LayoutConfig,
    pub ghost: GhostConfig,
    /// Damage dealt by every `T` tile.
    pub trap_damage: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            ghost: GhostConfig::default(),
            trap_damage: DEFAULT_TRAP_DAMAGE,
        }
    }
}

impl GameConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables (unparsable values are ignored):
    /// - `GHOST_GRID_HEALTH` - Starting health (default: 3, minimum 1)
    /// - `GHOST_GRID_DEFENCE` - Damage absorbed per hit (default: none)
    /// - `GHOST_GRID_TRAP_DAMAGE` - Damage per trap (default: 1)
    /// - `GHOST_GRID_LAYOUT` - Tile codes, column-major (default: reference layout)
    /// - `GHOST_GRID_COLS` - Extent of x (default: 10)
    /// - `GHOST_GRID_ROWS` - Extent of y (default: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned());
        let mut config = Self::default();

        if let Some(health) = read("GHOST_GRID_HEALTH").and_then(|v| v.parse::<u32>().ok()) {
            config.ghost.health = health.max(1);
        }
        if let Some(defence) = read("GHOST_GRID_DEFENCE").and_then(|v| v.parse::<u32>().ok()) {
            config.ghost.defence = Some(defence);
        }
        if let Some(damage) = read("GHOST_GRID_TRAP_DAMAGE").and_then(|v| v.parse::<u32>().ok()) {
            config.trap_damage = damage;
        }
        if let Some(codes) = read("GHOST_GRID_LAYOUT").filter(|v| !v.is_empty()) {
            config.layout.codes = codes;
        }
        if let Some(cols) = read("GHOST_GRID_COLS").and_then(|v| v.parse::<usize>().ok()) {
            config.layout.cols = cols;
        }
        if let Some(rows) = read("GHOST_GRID_ROWS").and_then(|v| v.parse::<usize>().ok()) {
            config.layout.rows = rows;
        }

        config
    }
}

/// Board layout source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub codes: String,
    pub cols: usize,
    pub rows: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            codes: REFERENCE_LAYOUT.to_owned(),
            cols: REFERENCE_COLS,
            rows: REFERENCE_ROWS,
        }
    }
}

/// Stats the ghost starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GhostConfig {
    pub health: u32,
    pub defence: Option<u32>,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            health: DEFAULT_HEALTH,
            defence: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_reference_build() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.ghost.health, 3);
        assert_eq!(config.trap_damage, 1);
        assert_eq!(config.layout.cols * config.layout.rows, config.layout.codes.len());
    }

    #[test]
    fn overrides_apply() {
        let config = GameConfig::from_lookup(lookup(&[
            ("GHOST_GRID_HEALTH", "7"),
            ("GHOST_GRID_DEFENCE", " 1 "),
            ("GHOST_GRID_TRAP_DAMAGE", "2"),
            ("GHOST_GRID_LAYOUT", "WGD"),
            ("GHOST_GRID_COLS", "1"),
            ("GHOST_GRID_ROWS", "3"),
        ]));

        assert_eq!(config.ghost.health, 7);
        assert_eq!(config.ghost.defence, Some(1));
        assert_eq!(config.trap_damage, 2);
        assert_eq!(config.layout.codes, "WGD");
        assert_eq!((config.layout.cols, config.layout.rows), (1, 3));
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = GameConfig::from_lookup(lookup(&[
            ("GHOST_GRID_HEALTH", "lots"),
            ("GHOST_GRID_DEFENCE", "-1"),
            ("GHOST_GRID_LAYOUT", "   "),
        ]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn health_has_floor_of_one() {
        let config = GameConfig::from_lookup(lookup(&[("GHOST_GRID_HEALTH", "0")]));
        assert_eq!(config.ghost.health, 1);
    }
}
