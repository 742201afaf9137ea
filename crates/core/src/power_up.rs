//! Power-up module - random boosts, their timers and the post-boost shield
//!
//! The scheduler is a small state machine driven purely by tick counts:
//!
//! ```text
//!          roll < 1                boost timer hits 0          shield timer hits 0
//!   Idle ───────────▶ Boosted(BirdBoost) ──────────▶ Shielded ───────────▶ Idle
//!     │   roll > 2495                                   ▲
//!     └───────────▶ Boosted(GravityBoost) ─────────────┘
//! ```
//!
//! While a boost or the shield runs, new boosts are disabled. Each transition
//! swaps the active [`CollisionPolicy`] and the kinematic parameters it comes
//! with, and is reported back to the board as a regime change.

use log::debug;

use crate::collision::CollisionPolicy;
use crate::dice::Dice;
use crate::pipe_stream::PipeStream;
use crate::types::{
    PowerUp, BASE_GRAVITY, BASE_PIPE_SPEED, BIRD_BOOST_THRESHOLD, BIRD_BOOST_TICKS,
    BOOST_PIPE_SPEED, BOOST_SCORE_INTERVAL, BOOST_SPEED_TOLERANCE, GRAVITY_BOOST_FACTOR,
    GRAVITY_BOOST_THRESHOLD, GRAVITY_BOOST_TICKS, POWER_UP_ROLL_RANGE, SHIELD_TICKS,
};

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Boosted(PowerUp),
    Shielded,
}

/// What one scheduler step changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Points earned from boosted flight this tick
    pub bonus: u32,
    /// New regime tag, if the policy was swapped
    pub regime_change: Option<PowerUp>,
}

#[derive(Debug, Clone)]
pub struct PowerUpScheduler {
    policy: CollisionPolicy,
    phase: Phase,
    gravity: f64,
    boost_ticks: u32,
    shield_ticks: u32,
    disabled: bool,
}

impl PowerUpScheduler {
    pub fn new() -> Self {
        Self {
            policy: CollisionPolicy::Default,
            phase: Phase::Idle,
            gravity: BASE_GRAVITY,
            boost_ticks: 0,
            shield_ticks: 0,
            disabled: false,
        }
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn regime(&self) -> PowerUp {
        self.policy.regime_tag()
    }

    /// Current gravity (velocity added per tick)
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn boost_ticks(&self) -> u32 {
        self.boost_ticks
    }

    pub fn shield_ticks(&self) -> u32 {
        self.shield_ticks
    }

    /// Whether new boosts are blocked
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Run one tick: maybe activate a boost, then count down timers.
    pub fn step<D: Dice>(&mut self, dice: &mut D, pipes: &mut PipeStream) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        if !self.disabled {
            let roll = dice.roll(POWER_UP_ROLL_RANGE);
            let boost = if roll < BIRD_BOOST_THRESHOLD {
                Some(PowerUp::BirdBoost)
            } else if roll > GRAVITY_BOOST_THRESHOLD {
                Some(PowerUp::GravityBoost)
            } else {
                None
            };
            if let Some(kind) = boost {
                let range = match kind {
                    PowerUp::GravityBoost => GRAVITY_BOOST_TICKS,
                    _ => BIRD_BOOST_TICKS,
                };
                let duration = dice.roll_range(range);
                self.activate(kind, duration, pipes);
                outcome.regime_change = Some(self.regime());
            }
        }

        if self.boost_ticks > 0 {
            if self.boost_ticks % BOOST_SCORE_INTERVAL == 0
                && (pipes.speed() - BASE_PIPE_SPEED).abs() > BOOST_SPEED_TOLERANCE
            {
                outcome.bonus += 1;
            }
            self.boost_ticks -= 1;
            if self.boost_ticks == 0 {
                self.raise_shield(pipes);
                outcome.regime_change = Some(self.regime());
            }
        } else if self.shield_ticks > 0 {
            self.shield_ticks -= 1;
        } else if self.phase != Phase::Idle {
            self.settle();
            outcome.regime_change = Some(self.regime());
        }

        outcome
    }

    /// Start a boost of `kind` lasting `duration` ticks.
    ///
    /// `PowerUp::Normal` is not a boost and is ignored.
    pub fn activate(&mut self, kind: PowerUp, duration: u32, pipes: &mut PipeStream) {
        if kind == PowerUp::Normal || duration == 0 {
            return;
        }
        self.disabled = true;
        self.phase = Phase::Boosted(kind);
        self.policy = CollisionPolicy::for_boost(kind);
        self.boost_ticks = duration;
        match kind {
            PowerUp::BirdBoost => pipes.set_speed(BOOST_PIPE_SPEED),
            PowerUp::GravityBoost => self.gravity = BASE_GRAVITY * GRAVITY_BOOST_FACTOR,
            PowerUp::Normal => {}
        }
        debug!("power-up {} for {} ticks", kind.as_str(), duration);
    }

    fn raise_shield(&mut self, pipes: &mut PipeStream) {
        self.phase = Phase::Shielded;
        self.policy = CollisionPolicy::Intangible;
        self.shield_ticks = SHIELD_TICKS;
        self.gravity = BASE_GRAVITY;
        pipes.reset_speed();
        debug!("boost expired, shield for {} ticks", SHIELD_TICKS);
    }

    fn settle(&mut self) {
        self.phase = Phase::Idle;
        self.policy = CollisionPolicy::Default;
        self.disabled = false;
        debug!("shield expired, back to normal");
    }
}

impl Default for PowerUpScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn setup() -> (PowerUpScheduler, PipeStream) {
        (PowerUpScheduler::new(), PipeStream::new())
    }

    #[test]
    fn test_new_scheduler_is_idle() {
        let (s, _) = setup();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.policy(), CollisionPolicy::Default);
        assert_eq!(s.regime(), PowerUp::Normal);
        assert!(!s.is_disabled());
        assert_eq!(s.gravity(), BASE_GRAVITY);
    }

    #[test]
    fn test_neutral_rolls_do_nothing() {
        let (mut s, mut pipes) = setup();
        let mut dice = ScriptedDice::new().with_rolls([1, 1250, 2495]);
        for _ in 0..3 {
            assert_eq!(s.step(&mut dice, &mut pipes), StepOutcome::default());
        }
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_roll_zero_starts_bird_boost() {
        let (mut s, mut pipes) = setup();
        let mut dice = ScriptedDice::new().with_rolls([0, 100]);

        let outcome = s.step(&mut dice, &mut pipes);

        assert_eq!(outcome.regime_change, Some(PowerUp::BirdBoost));
        assert_eq!(s.phase(), Phase::Boosted(PowerUp::BirdBoost));
        assert_eq!(s.policy(), CollisionPolicy::Intangible);
        assert_eq!(pipes.speed(), BOOST_PIPE_SPEED);
        assert!(s.is_disabled());
        // 300 drawn, one tick already counted down
        assert_eq!(s.boost_ticks(), 299);
    }

    #[test]
    fn test_high_roll_starts_gravity_boost() {
        let (mut s, mut pipes) = setup();
        let mut dice = ScriptedDice::new().with_rolls([2496, 50]);

        let outcome = s.step(&mut dice, &mut pipes);

        assert_eq!(outcome.regime_change, Some(PowerUp::GravityBoost));
        assert_eq!(s.policy(), CollisionPolicy::UpperPipeIntangible);
        assert_eq!(pipes.speed(), BASE_PIPE_SPEED);
        assert!((s.gravity() - 1.5).abs() < f64::EPSILON);
        assert_eq!(s.boost_ticks(), 149);
    }

    #[test]
    fn test_no_activation_while_disabled() {
        let (mut s, mut pipes) = setup();
        let mut dice = ScriptedDice::new().with_rolls([0, 0]);
        s.step(&mut dice, &mut pipes);
        let remaining = s.boost_ticks();

        // A second zero roll must not be consumed
        dice.push_roll(0);
        let outcome = s.step(&mut dice, &mut pipes);
        assert_eq!(outcome.regime_change, None);
        assert_eq!(s.boost_ticks(), remaining - 1);
        assert_eq!(dice.pending_rolls(), 1);
    }

    #[test]
    fn test_full_cycle_tick_count() {
        let (mut s, mut pipes) = setup();
        let mut dice = ScriptedDice::new().with_rolls([0, 0]);
        s.step(&mut dice, &mut pipes);
        let duration = BIRD_BOOST_TICKS.start;

        let mut ticks = 0;
        while s.phase() != Phase::Idle {
            assert!(s.is_disabled());
            s.step(&mut dice, &mut pipes);
            ticks += 1;
        }
        assert_eq!(ticks, duration + SHIELD_TICKS);
        assert!(!s.is_disabled());
        assert_eq!(s.policy(), CollisionPolicy::Default);
    }

    #[test]
    fn test_boost_expiry_raises_shield() {
        let (mut s, mut pipes) = setup();
        let mut dice = ScriptedDice::new().with_rolls([2499, 0]);
        s.step(&mut dice, &mut pipes);

        let mut last = StepOutcome::default();
        while s.boost_ticks() > 0 {
            last = s.step(&mut dice, &mut pipes);
        }
        assert_eq!(last.regime_change, Some(PowerUp::BirdBoost));
        assert_eq!(s.phase(), Phase::Shielded);
        assert_eq!(s.policy(), CollisionPolicy::Intangible);
        assert_eq!(s.shield_ticks(), SHIELD_TICKS);
        assert_eq!(s.gravity(), BASE_GRAVITY);
        assert_eq!(pipes.speed(), BASE_PIPE_SPEED);
    }

    #[test]
    fn test_bird_boost_awards_points_every_sixty_ticks() {
        let (mut s, mut pipes) = setup();
        // Duration 240: bonus at 240, 180, 120, 60
        let mut dice = ScriptedDice::new().with_rolls([0, 40]);

        let mut bonus = 0;
        loop {
            bonus += s.step(&mut dice, &mut pipes).bonus;
            if s.phase() != Phase::Boosted(PowerUp::BirdBoost) {
                break;
            }
        }
        assert_eq!(bonus, 4);
    }

    #[test]
    fn test_gravity_boost_awards_no_time_points() {
        let (mut s, mut pipes) = setup();
        let mut dice = ScriptedDice::new().with_rolls([2499, 140]);

        let mut bonus = 0;
        for _ in 0..300 {
            bonus += s.step(&mut dice, &mut pipes).bonus;
        }
        assert_eq!(bonus, 0);
    }

    #[test]
    fn test_activate_ignores_normal() {
        let (mut s, mut pipes) = setup();
        s.activate(PowerUp::Normal, 100, &mut pipes);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.is_disabled());
    }
}
