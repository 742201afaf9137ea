//! A simple flap controller.
//!
//! Aims just above the bottom cap of the next pipe the bird still has to clear
//! and flaps whenever the bird's next position would sink below that line.

use flappy_board_core::types::{Direction, PIPE_WIDTH};
use flappy_board_core::{Board, Dice};

/// Distance kept above the bottom cap
pub const DEFAULT_MARGIN: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autopilot {
    margin: i32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }

    pub fn with_margin(margin: i32) -> Self {
        Self { margin }
    }

    /// Altitude the bird should stay above
    pub fn target_y<D: Dice>(&self, board: &Board<D>) -> i32 {
        let bird_x = board.bird().x();
        let line = board
            .pipe_iter()
            .find(|p| p.x() + PIPE_WIDTH >= bird_x)
            .map(|p| p.bottom_start() - self.margin)
            .unwrap_or((board.ceiling() + board.floor()) / 2);
        line.min(board.floor() - self.margin)
    }

    /// Input for the coming tick, if any
    pub fn decide<D: Dice>(&self, board: &Board<D>) -> Option<Direction> {
        if board.game_over() {
            return None;
        }
        if !board.running() {
            return Some(Direction::Up);
        }
        let bird = board.bird();
        let predicted = bird.y() as f64 + bird.velocity() + board.gravity();
        (predicted > self.target_y(board) as f64).then_some(Direction::Up)
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}
