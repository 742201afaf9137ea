//! Dice module - the randomness seam of the engine
//!
//! Every random draw the board makes (power-up rolls, boost durations, pipe
//! offsets) goes through the [`Dice`] trait. The default [`GameDice`] wraps a
//! seeded `rand` generator so the same seed replays the same game; the
//! [`ScriptedDice`] replays hand-written draws for deterministic testing.

use std::collections::VecDeque;
use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws
pub trait Dice {
    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    fn roll(&mut self, bound: u32) -> u32;

    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform integer in a half-open range
    fn roll_range(&mut self, range: Range<u32>) -> u32 {
        range.start + self.roll(range.end.saturating_sub(range.start))
    }
}

/// `rand`-backed dice
#[derive(Debug, Clone)]
pub struct GameDice<R = SmallRng> {
    rng: R,
}

impl GameDice<SmallRng> {
    /// Create dice with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create dice seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl<R: Rng> GameDice<R> {
    /// Wrap an existing generator
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for GameDice<SmallRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Rng> Dice for GameDice<R> {
    fn roll(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Dice that replay queued draws, then fall back to fixed values.
///
/// Integer draws are clamped into `[0, bound)`. The default fallback roll
/// (1000) never triggers a power-up; the default fallback unit (0.5) yields a
/// mid-height pipe.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    units: VecDeque<f64>,
    fallback_roll: u32,
    fallback_unit: f64,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self {
            rolls: VecDeque::new(),
            units: VecDeque::new(),
            fallback_roll: 1000,
            fallback_unit: 0.5,
        }
    }

    /// Queue integer draws in order
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue float draws in order
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    pub fn with_fallback_roll(mut self, roll: u32) -> Self {
        self.fallback_roll = roll;
        self
    }

    pub fn with_fallback_unit(mut self, unit: f64) -> Self {
        self.fallback_unit = unit;
        self
    }

    pub fn push_roll(&mut self, roll: u32) {
        self.rolls.push_back(roll);
    }

    pub fn push_unit(&mut self, unit: f64) {
        self.units.push_back(unit);
    }

    /// Number of queued integer draws not yet consumed
    pub fn pending_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl Default for ScriptedDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let raw = self.rolls.pop_front().unwrap_or(self.fallback_roll);
        raw.min(bound - 1)
    }

    fn unit(&mut self) -> f64 {
        let raw = self.units.pop_front().unwrap_or(self.fallback_unit);
        raw.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
