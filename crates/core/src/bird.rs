//! Bird module - the player entity
//!
//! The bird only moves vertically. Its column is fixed once the board places
//! it, and its vertical position is never clamped here: the active collision
//! policy decides what happens at the ceiling and the floor.

use crate::types::{PowerUp, BIRD_HEIGHT, BIRD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    x: i32,
    y: i32,
    velocity: f64,
    width: i32,
    height: i32,
    regime: PowerUp,
}

impl Bird {
    /// Create an unplaced bird at the origin with no velocity
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            velocity: 0.0,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            regime: PowerUp::Normal,
        }
    }

    /// Create a bird at an explicit position
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::new()
        }
    }

    pub(crate) fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Regime tag used to tint the bird
    pub fn regime(&self) -> PowerUp {
        self.regime
    }

    pub(crate) fn set_regime(&mut self, regime: PowerUp) {
        self.regime = regime;
    }

    /// Add to the vertical velocity (gravity, flaps, ceiling nudges)
    pub fn accelerate(&mut self, dv: f64) {
        self.velocity += dv;
    }

    /// Move by the current velocity, truncated toward zero
    pub fn integrate(&mut self) {
        self.y += self.velocity as i32;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}
