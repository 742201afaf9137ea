//! Flappy Board (workspace facade crate).
//!
//! Re-exports the workspace crates under one `flappy_board::{core,engine,scores,types}`
//! namespace. The game-state engine lives in `core`; `engine` drives it from a clock.

pub use flappy_board_core as core;
pub use flappy_board_engine as engine;
pub use flappy_board_scores as scores;
pub use flappy_board_types as types;
