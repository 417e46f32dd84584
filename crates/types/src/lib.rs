//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the workspace.
//! Nothing in here knows about terminals, key events or game rules, so the
//! types can be shared by the core state machine, input mapping and rendering.
//!
//! # Coordinates
//!
//! The board is indexed `[x][y]`:
//!
//! - **x**: `0..cols`, drawn as one display line per value (`up` is `x - 1`)
//! - **y**: `0..rows`, drawn as one glyph per value within a line (`left` is `y - 1`)
//!
//! # Reference Build
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `REFERENCE_COLS` | 10 | Extent of `x` |
//! | `REFERENCE_ROWS` | 5 | Extent of `y` |
//! | `DEFAULT_HEALTH` | 3 | Starting health of the ghost |
//! | `DEFAULT_TRAP_DAMAGE` | 1 | Damage dealt by a trap |
//!
//! # Examples
//!
//! ```
//! use ghost_grid_types::{Command, Direction, Position};
//!
//! // Parse a command typed by the player
//! assert_eq!(Command::from_str("w"), Some(Command::Move(Direction::Up)));
//! assert_eq!(Command::from_str("exit"), Some(Command::Quit));
//! assert_eq!(Command::from_str("jump"), None);
//!
//! // Step a position
//! let pos = Position::new(2, 3);
//! assert_eq!(pos.step(Direction::Down), Some(Position::new(3, 3)));
//! assert_eq!(Position::new(0, 0).step(Direction::Up), None);
//! ```

/// Extent of `x` in the reference layout.
pub const REFERENCE_COLS: usize = 10;

/// Extent of `y` in the reference layout.
pub const REFERENCE_ROWS: usize = 5;

/// Reference layout, column-major (`x` outer, `y` inner).
///
/// `W` wall, `g` grass, `T` trap, `K` key, `D` door, `G` grass with the ghost.
pub const REFERENCE_LAYOUT: &str = "WWWWWWWWWWWggGgggggWWgTTTggDgWWKggggTggWWWWWWWWWWW";

/// Starting health of the ghost.
pub const DEFAULT_HEALTH: u32 = 3;

/// Damage dealt by a trap tile.
pub const DEFAULT_TRAP_DAMAGE: u32 = 1;


/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Position one step in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the board's business.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(dx, dy)` applied to a [`Position`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ghost_grid_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (0, 1));
    /// ```
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Commands accepted by a session, one per turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the ghost one cell
    Move(Direction),
    /// End the session
    Quit,
}

impl Command {
    /// Parse a command typed on a line.
    ///
    /// Accepts the classic `w`/`a`/`s`/`d` letters, direction names and
    /// `stop`/`exit`/`quit`/`q` (case-insensitive, surrounding whitespace
    /// ignored). Anything else is `None` and should be treated as a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghost_grid_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str(" A "), Some(Command::Move(Direction::Left)));
    /// assert_eq!(Command::from_str("right"), Some(Command::Move(Direction::Right)));
    /// assert_eq!(Command::from_str("stop"), Some(Command::Quit));
    /// assert_eq!(Command::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "w" | "up" => Some(Command::Move(Direction::Up)),
            "s" | "down" => Some(Command::Move(Direction::Down)),
            "a" | "left" => Some(Command::Move(Direction::Left)),
            "d" | "right" => Some(Command::Move(Direction::Right)),
            "stop" | "exit" | "quit" | "q" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(dir) => dir.as_str(),
            Command::Quit => "quit",
        }
    }
}

/// Terrain kinds a tile can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Grass,
    Key,
    Door,
    Trap,
}

impl TileKind {
    /// Single-character layout code.
    ///
    /// Grass is `g`; the uppercase `G` marks grass holding the ghost and is
    /// handled by the layout parser, not here.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(TileKind::Wall),
            'g' => Some(TileKind::Grass),
            'K' => Some(TileKind::Key),
            'D' => Some(TileKind::Door),
            'T' => Some(TileKind::Trap),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Wall => "wall",
            TileKind::Grass => "grass",
            TileKind::Key => "key",
            TileKind::Door => "door",
            TileKind::Trap => "trap",
        }
    }
}

/// What a renderer should draw for a cell.
///
/// An occupied cell is always `Ghost`, whatever its terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayAlias {
    Wall,
    Grass,
    Key,
    Door,
    Trap,
    Ghost,
}

impl From<TileKind> for DisplayAlias {
    fn from(kind: TileKind) -> Self {
        match kind {
            TileKind::Wall => DisplayAlias::Wall,
            TileKind::Grass => DisplayAlias::Grass,
            TileKind::Key => DisplayAlias::Key,
            TileKind::Door => DisplayAlias::Door,
            TileKind::Trap => DisplayAlias::Trap,
        }
    }
}
