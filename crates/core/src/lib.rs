//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole game-state engine: entities, collision rules,
//! the pipe stream, the power-up scheduler and the per-tick coordinator. It has
//! no dependencies on rendering, timers or I/O:
//!
//! - **Deterministic**: every random draw goes through [`Dice`]; the same seed
//!   replays the same game
//! - **Testable**: [`ScriptedDice`] forces power-up rolls and pipe heights
//! - **Fast**: `tick()` and `move_bird()` do not allocate in steady state
//!
//! # Module Structure
//!
//! - [`bird`]: the player entity (vertical kinematics only)
//! - [`pipe`]: a top/bottom obstacle pair and its random offset
//! - [`pipe_stream`]: spawning, scrolling and retiring pipes; crossing detection
//! - [`collision`]: the three collision policies
//! - [`power_up`]: random boosts, their timers and the post-boost shield
//! - [`board`]: the coordinator that ties everything together
//! - [`dice`]: the randomness seam
//! - [`snapshot`]: plain-data copies of board state for observers
//!
//! # Game Rules
//!
//! - **Flap**: adds an upward impulse to the bird's velocity
//! - **Pipes**: scroll left at a fixed speed; one point per pipe that passes the bird
//! - **Bird boost**: pipes rush by and the bird passes through them; one point
//!   per 60 boosted ticks
//! - **Gravity boost**: heavier fall; the top pipe is passable above its cap
//! - **Shield**: 55 intangible ticks after every boost
//!
//! # Example
//!
//! ```
//! use flappy_board_core::Board;
//! use flappy_board_types::Direction;
//!
//! let mut board = Board::new(12345);
//! board.move_bird(Direction::Up);
//! assert!(board.running());
//!
//! board.tick();
//! assert!(board.bird().y() < 320);
//! assert!(!board.game_over());
//! ```
//!
//! # Timing
//!
//! The board has no clock of its own. Call [`Board::tick`] at 60 Hz
//! ([`TICK_INTERVAL_US`](types::TICK_INTERVAL_US)); all durations are counted
//! in ticks.

pub mod bird;
pub mod board;
pub mod collision;
pub mod dice;
pub mod pipe;
pub mod pipe_stream;
pub mod power_up;
pub mod snapshot;

pub use flappy_board_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use board::{Board, BoardListener, EventQueue};
pub use collision::CollisionPolicy;
pub use dice::{Dice, GameDice, ScriptedDice};
pub use pipe::Pipe;
pub use pipe_stream::PipeStream;
pub use power_up::{Phase, PowerUpScheduler, StepOutcome};
pub use snapshot::{BirdSnapshot, BoardSnapshot, PipeSnapshot};
