//! Session driver (engine-facing).
//!
//! Everything between a wall clock and a [`Board`](flappy_board_core::Board):
//! the fixed-cadence [`TickClock`], the [`Session`] that owns a board and hands
//! the final score to a [`ScoreStore`](flappy_board_scores::ScoreStore), and an
//! [`Autopilot`] that plays headless games.

pub mod autopilot;
pub mod clock;
pub mod session;

pub use flappy_board_core as core;
pub use flappy_board_scores as scores;
pub use flappy_board_types as types;

pub use autopilot::Autopilot;
pub use clock::{TickClock, DEFAULT_MAX_CATCH_UP};
pub use session::{GameResult, Session, DEFAULT_USERNAME};
