//! Board module - the per-tick coordinator
//!
//! The board owns the bird, the pipe stream, the power-up scheduler and the
//! dice, and advances them in a fixed order every tick:
//!
//! 1. gravity, then integrate the bird's position
//! 2. evaluate the active collision policy (a hit ends the game)
//! 3. scheduler step (activation, countdowns, regime swaps, boost bonus)
//! 4. pipe stream step (maintain, then advance)
//! 5. score pipes that crossed the bird's column at baseline speed
//! 6. queue a `BoardChanged` event
//!
//! A collision does not cut the tick short; every later tick is a no-op.
//! Events are queued in a fixed-capacity buffer and drained after the tick
//! settles, so `tick()` never allocates.

use arrayvec::ArrayVec;
use log::debug;

use crate::bird::Bird;
use crate::collision::CollisionPolicy;
use crate::dice::{Dice, GameDice};
use crate::pipe::Pipe;
use crate::pipe_stream::PipeStream;
use crate::power_up::PowerUpScheduler;
use crate::snapshot::{BirdSnapshot, BoardSnapshot, PipeSnapshot};
use crate::types::{
    BoardEvent, Direction, FieldBounds, PowerUp, BIRD_START_Y, BIRD_X, FLAP_IMPULSE,
};

/// At most one regime change and one board change per tick
pub const EVENT_CAPACITY: usize = 4;

pub type EventQueue = ArrayVec<BoardEvent, EVENT_CAPACITY>;

/// Receiver of drained board events
pub trait BoardListener {
    fn on_event(&mut self, event: BoardEvent);
}

impl<F: FnMut(BoardEvent)> BoardListener for F {
    fn on_event(&mut self, event: BoardEvent) {
        self(event)
    }
}

#[derive(Debug, Clone)]
pub struct Board<D: Dice = GameDice> {
    bird: Bird,
    pipes: PipeStream,
    power_ups: PowerUpScheduler,
    dice: D,
    bounds: FieldBounds,
    score: u32,
    tick_count: u64,
    running: bool,
    game_over: bool,
    events: EventQueue,
}

impl Board<GameDice> {
    /// Create a board whose random draws come from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_dice(GameDice::new(seed))
    }
}

impl<D: Dice> Board<D> {
    /// Create a board drawing from the given dice.
    ///
    /// The bird is placed at its start position and one pipe is pre-spawned
    /// at the right edge.
    pub fn with_dice(mut dice: D) -> Self {
        let mut bird = Bird::new();
        bird.place(BIRD_X, BIRD_START_Y);
        let pipes = PipeStream::with_first_pipe(&mut dice);

        Self {
            bird,
            pipes,
            power_ups: PowerUpScheduler::new(),
            dice,
            bounds: FieldBounds::default(),
            score: 0,
            tick_count: 0,
            running: false,
            game_over: false,
            events: EventQueue::new(),
        }
    }

    /// Advance the world by one tick.
    ///
    /// Returns `false` without touching any state once the game is over.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.events.clear();
        self.tick_count += 1;

        self.bird.accelerate(self.power_ups.gravity());
        self.bird.integrate();

        let policy = self.power_ups.policy();
        if policy.evaluate(&self.pipes, &self.bounds, &mut self.bird) {
            self.game_over = true;
            debug!(
                "game over at tick {} (score={}, y={}, policy={:?})",
                self.tick_count,
                self.score,
                self.bird.y(),
                policy
            );
        }

        let outcome = self.power_ups.step(&mut self.dice, &mut self.pipes);
        self.score += outcome.bonus;
        if let Some(regime) = outcome.regime_change {
            self.bird.set_regime(regime);
            self.push_event(BoardEvent::BirdChanged(regime));
        }

        self.pipes.step(&mut self.dice);

        if self.pipes.at_base_speed() {
            self.score += self.pipes.crossed(self.bird.x()) as u32;
        }

        self.push_event(BoardEvent::BoardChanged);
        true
    }

    /// Apply player input. Ignored once the game is over.
    pub fn move_bird(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }
        self.running = true;
        match direction {
            Direction::Up => self.bird.accelerate(FLAP_IMPULSE),
        }
    }

    fn push_event(&mut self, event: BoardEvent) {
        let _ = self.events.try_push(event);
    }

    /// Events queued by the last tick
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Drain the events queued by the last tick
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    /// Drain the events queued by the last tick into `listener`, in order
    pub fn notify<L: BoardListener + ?Sized>(&mut self, listener: &mut L) {
        for event in self.events.drain(..) {
            listener.on_event(event);
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &PipeStream {
        &self.pipes
    }

    /// Pipes oldest first
    pub fn pipe_iter(&self) -> impl Iterator<Item = &Pipe> + '_ {
        self.pipes.iter()
    }

    pub fn power_ups(&self) -> &PowerUpScheduler {
        &self.power_ups
    }

    pub fn bounds(&self) -> &FieldBounds {
        &self.bounds
    }

    pub fn ceiling(&self) -> i32 {
        self.bounds.ceiling_y
    }

    pub fn floor(&self) -> i32 {
        self.bounds.floor_y
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Active collision policy
    pub fn policy(&self) -> CollisionPolicy {
        self.power_ups.policy()
    }

    /// Presentation tag of the active regime
    pub fn regime(&self) -> PowerUp {
        self.power_ups.regime()
    }

    pub fn gravity(&self) -> f64 {
        self.power_ups.gravity()
    }

    pub fn pipe_speed(&self) -> f64 {
        self.pipes.speed()
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.bird = BirdSnapshot::from(self.bird);
        out.pipes.clear();
        for pipe in self.pipes.iter().take(out.pipes.capacity()) {
            out.pipes.push(PipeSnapshot::from(*pipe));
        }
        out.bounds = self.bounds;
        out.score = self.score;
        out.tick_count = self.tick_count;
        out.running = self.running;
        out.game_over = self.game_over;
        out.regime = self.regime();
        out.gravity = self.gravity();
        out.pipe_speed = self.pipe_speed();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Board<GameDice> {
    fn default() -> Self {
        Self::new(1)
    }
}
