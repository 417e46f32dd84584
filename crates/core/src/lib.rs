//! Core game logic module - the terrain/cell/movement state machine
//!
//! A single ghost walks a fixed-size board of terrain cells. Everything with
//! rules lives here; terminal input and rendering are separate crates that
//! call into the core and read [`BoardSnapshot`]s back out.
//!
//! The core performs no I/O. It only emits `tracing` events, which are
//! dropped unless the binary installs a subscriber.
//!
//! # Module Structure
//!
//! - [`terrain`]: tile types and their entry effects
//! - [`entity`]: the ghost (health, position, key, escape, defence)
//! - [`cell`]: terrain plus optional occupant, occupant transfer
//! - [`board`]: the grid and the movement state machine
//! - [`layout`]: building a board from tile codes
//! - [`snapshot`]: read-only display state
//! - [`session`]: turn-based command loop state
//! - [`config`]: game parameters with environment overrides
//!
//! # Rules
//!
//! - **Walls** block; nothing changes.
//! - **Keys** grant the key and turn into grass once the ghost walks off.
//! - **Doors** let a ghost carrying the key escape; otherwise they are floor.
//! - **Traps** deal damage every time, unless it is within the ghost's defence.
//! - Damage that would take health to zero is death: health stays as it
//!   was, the ghost stays where it was, and the session ends.
//! - Moves off the edge of the board are ignored.
//!
//! # Example
//!
//! ```
//! use ghost_grid_core::{GameConfig, Session, SessionStatus};
//! use ghost_grid_core::types::{Command, Direction};
//!
//! let mut session = Session::from_config(&GameConfig::default()).unwrap();
//!
//! // Two traps cost two health.
//! session.apply(Command::Move(Direction::Down));
//! session.apply(Command::Move(Direction::Down));
//! session.apply(Command::Move(Direction::Right));
//! assert_eq!(session.board().entity().unwrap().health(), 1);
//!
//! // The third one is fatal.
//! assert_eq!(session.apply(Command::Move(Direction::Left)), SessionStatus::Dead);
//! ```

pub mod board;
pub mod cell;
pub mod config;
pub mod entity;
pub mod error;
pub mod layout;
pub mod session;
pub mod snapshot;
pub mod terrain;

pub use ghost_grid_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome};
pub use cell::Cell;
pub use config::{GameConfig, GhostConfig, LayoutConfig};
pub use entity::Entity;
pub use error::{EntityDied, LayoutError};
pub use layout::parse_layout;
pub use session::{Session, SessionStatus};
pub use snapshot::{BoardSnapshot, EntitySnapshot};
pub use terrain::{StepResult, Terrain};
