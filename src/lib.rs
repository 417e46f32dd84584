//! Ghost Grid (workspace facade crate).
//!
//! Re-exports the workspace crates as `ghost_grid::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use ghost_grid_core as core;
pub use ghost_grid_input as input;
pub use ghost_grid_term as term;
pub use ghost_grid_types as types;
