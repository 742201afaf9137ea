//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing/formatting, so they
//! can be shared by the core engine, the session driver and any presentation layer.
//!
//! # Field Dimensions
//!
//! The playfield is measured in pixels with the origin at the top-left corner
//! and Y growing downward:
//!
//! - **Width**: 360
//! - **Height**: 640
//! - **Ceiling**: y = 0
//! - **Floor**: y = 540 (a 100px ground band at the bottom)
//!
//! # Kinematics
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_GRAVITY` | 1.0 | Velocity added to the bird every tick |
//! | `GRAVITY_BOOST_FACTOR` | 1.5 | Gravity multiplier while gravity boost is active |
//! | `FLAP_IMPULSE` | -13 | Velocity added on a flap (negative = upward) |
//! | `CEILING_NUDGE` | 3 | Downward velocity added when an intangible bird hits the ceiling |
//! | `BASE_PIPE_SPEED` | -5 | Pipe X step per tick in normal flight |
//! | `BOOST_PIPE_SPEED` | -30 | Pipe X step per tick during bird boost |
//!
//! # Power-Up Timing
//!
//! All durations are in ticks (60 ticks per second):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POWER_UP_ROLL_RANGE` | 2500 | Size of the per-tick activation roll |
//! | `BIRD_BOOST_THRESHOLD` | 1 | Rolls below this start a bird boost |
//! | `GRAVITY_BOOST_THRESHOLD` | 2495 | Rolls above this start a gravity boost |
//! | `BIRD_BOOST_TICKS` | 200..600 | Bird boost duration range |
//! | `GRAVITY_BOOST_TICKS` | 100..300 | Gravity boost duration range |
//! | `SHIELD_TICKS` | 55 | Post-boost shield duration |
//! | `BOOST_SCORE_INTERVAL` | 60 | One point per this many boosted ticks |
//!
//! # Examples
//!
//! ```
//! use flappy_board_types::{Direction, PowerUp, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(PowerUp::from_str("gravity"), Some(PowerUp::GravityBoost));
//! assert_eq!(PowerUp::BirdBoost.as_str(), "birdBoost");
//! assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
//!
//! assert_eq!(FIELD_WIDTH, 360);
//! assert_eq!(FIELD_HEIGHT, 640);
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Field width in pixels
pub const FIELD_WIDTH: i32 = 360;

/// Field height in pixels
pub const FIELD_HEIGHT: i32 = 640;

/// Y coordinate of the ceiling
pub const CEILING_Y: i32 = 0;

/// Height of the ground band at the bottom of the field
pub const FLOOR_BAND: i32 = 100;

/// Y coordinate of the floor
pub const FLOOR_Y: i32 = FIELD_HEIGHT - FLOOR_BAND;

/// Bird sprite width
pub const BIRD_WIDTH: i32 = 30;

/// Bird sprite height
pub const BIRD_HEIGHT: i32 = 24;

/// Fixed bird column (an eighth of the field width)
pub const BIRD_X: i32 = FIELD_WIDTH / 8;

/// Bird spawn row (vertical center of the field)
pub const BIRD_START_Y: i32 = FIELD_HEIGHT / 2;

/// Velocity change applied by a flap. Accumulates onto the current velocity.
pub const FLAP_IMPULSE: f64 = -13.0;

/// Baseline gravity (velocity change per tick)
pub const BASE_GRAVITY: f64 = 1.0;

/// Gravity multiplier while the gravity boost is active
pub const GRAVITY_BOOST_FACTOR: f64 = 1.5;

/// Downward velocity added when an intangible bird is pinned to the ceiling
pub const CEILING_NUDGE: f64 = 3.0;

/// Pipe segment width
pub const PIPE_WIDTH: i32 = 64;

/// Pipe segment height
pub const PIPE_HEIGHT: i32 = 464;

/// Vertical gap between the top and bottom segment
pub const PIPE_GAP: i32 = 140;

/// Height of the cap ("mushroom") on top of the bottom segment.
///
/// Narrows the effective gap and forms the fatal band in gravity boost.
pub const PIPE_MUSHROOM: i32 = 29;

/// A new pipe spawns once the newest pipe's X drops below this
pub const PIPE_MARGIN: i32 = 90;

/// Offsets at or below this are replaced with `-PIPE_HEIGHT`
pub const PIPE_MIN_OFFSET: i32 = -335;

/// Pipe X step per tick in normal flight
pub const BASE_PIPE_SPEED: f64 = -5.0;

/// Pipe X step per tick during bird boost
pub const BOOST_PIPE_SPEED: f64 = -30.0;

/// Exclusive upper bound of the per-tick power-up roll
pub const POWER_UP_ROLL_RANGE: u32 = 2500;

/// Rolls strictly below this start a bird boost
pub const BIRD_BOOST_THRESHOLD: u32 = 1;

/// Rolls strictly above this start a gravity boost
pub const GRAVITY_BOOST_THRESHOLD: u32 = 2495;

/// Bird boost duration in ticks (half-open)
pub const BIRD_BOOST_TICKS: Range<u32> = 200..600;

/// Gravity boost duration in ticks (half-open)
pub const GRAVITY_BOOST_TICKS: Range<u32> = 100..300;

/// Shield duration after any boost expires
pub const SHIELD_TICKS: u32 = 55;

/// Boosted ticks per awarded point
pub const BOOST_SCORE_INTERVAL: u32 = 60;

/// Minimum pipe speed deviation from baseline for boost scoring
pub const BOOST_SPEED_TOLERANCE: f64 = 1.0;

/// Fixed tick rate
pub const TICKS_PER_SECOND: u32 = 60;

/// Fixed tick interval in microseconds (≈16.67ms)
pub const TICK_INTERVAL_US: u64 = 1_000_000 / TICKS_PER_SECOND as u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_game_parity_defaults() {
        assert_eq!(FLOOR_Y, 540);
        assert_eq!(BIRD_X, 45);
        assert_eq!(BIRD_START_Y, 320);
        assert_eq!(PIPE_GAP, 140);
        assert_eq!(PIPE_MUSHROOM, 29);
        assert_eq!(PIPE_MARGIN, 90);
        assert_eq!(SHIELD_TICKS, 55);
        assert_eq!(BIRD_BOOST_TICKS, 200..600);
        assert_eq!(GRAVITY_BOOST_TICKS, 100..300);
        assert_eq!(TICK_INTERVAL_US, 16_666);
        assert!((BOOST_PIPE_SPEED - -30.0).abs() < f64::EPSILON);
        assert!((BASE_PIPE_SPEED - -5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn spawn_column_reaches_bird_column_in_whole_steps() {
        // Scoring relies on pipes stepping onto the bird column at baseline speed.
        let step = (-BASE_PIPE_SPEED) as i32;
        assert_eq!((FIELD_WIDTH - BIRD_X) % step, 0);
    }

    #[test]
    fn power_up_round_trip_strings() {
        for p in [PowerUp::Normal, PowerUp::BirdBoost, PowerUp::GravityBoost] {
            assert_eq!(PowerUp::from_str(p.as_str()), Some(p));
        }
        assert_eq!(PowerUp::from_str("bogus"), None);
    }
}

/// Power-up regime tag exposed for presentation (bird tint).
///
/// - **Normal**: default collisions, baseline speed and gravity
/// - **BirdBoost**: intangible to pipes, pipes rush by at boost speed
/// - **GravityBoost**: heavier fall, the top pipe is passable above its cap
///
/// The post-boost shield reports `BirdBoost` since it shares the intangible policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerUp {
    #[default]
    Normal,
    BirdBoost,
    GravityBoost,
}

impl PowerUp {
    /// Parse a regime tag (case-insensitive, short aliases accepted)
    ///
    /// # Examples
    ///
    /// ```
    /// use flappy_board_types::PowerUp;
    ///
    /// assert_eq!(PowerUp::from_str("normal"), Some(PowerUp::Normal));
    /// assert_eq!(PowerUp::from_str("BirdBoost"), Some(PowerUp::BirdBoost));
    /// assert_eq!(PowerUp::from_str("super"), Some(PowerUp::BirdBoost));
    /// assert_eq!(PowerUp::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" | "regular" => Some(PowerUp::Normal),
            "birdboost" | "super" => Some(PowerUp::BirdBoost),
            "gravityboost" | "gravity" => Some(PowerUp::GravityBoost),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUp::Normal => "normal",
            PowerUp::BirdBoost => "birdBoost",
            PowerUp::GravityBoost => "gravityBoost",
        }
    }

    pub fn is_boosted(&self) -> bool {
        !matches!(self, PowerUp::Normal)
    }
}

/// Vertical extent and size of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldBounds {
    pub ceiling_y: i32,
    pub floor_y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            ceiling_y: CEILING_Y,
            floor_y: FLOOR_Y,
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// Discrete movement command accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Flap upward
    Up,
}

impl Direction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "flap" => Some(Direction::Up),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
        }
    }
}

/// Change notification emitted by the board.
///
/// Events are queued while a tick runs and drained once the tick has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// State advanced; redraw
    BoardChanged,
    /// Regime changed; the bird tint should follow
    BirdChanged(PowerUp),
}
