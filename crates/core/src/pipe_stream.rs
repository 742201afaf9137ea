//! Pipe stream module - spawning, scrolling and retiring pipes
//!
//! Pipes are kept oldest-first. Spawning always appends at the right edge and
//! retiring always pops from the front, so X strictly increases from the oldest
//! pipe to the newest.
//!
//! Scroll speed belongs to the stream, not to individual pipes: every live pipe
//! moves by the same step, and a speed change applies to all of them at once.

use std::collections::VecDeque;

use log::trace;

use crate::dice::Dice;
use crate::pipe::Pipe;
use crate::types::{BASE_PIPE_SPEED, FIELD_WIDTH, PIPE_MARGIN};

/// Reserved slots; the live count never exceeds 3 with the reference margin.
const PIPE_CAPACITY: usize = 8;

#[derive(Debug, Clone)]
pub struct PipeStream {
    pipes: VecDeque<Pipe>,
    speed: f64,
    spawn_x: i32,
}

impl PipeStream {
    /// Create an empty stream at baseline speed
    pub fn new() -> Self {
        Self {
            pipes: VecDeque::with_capacity(PIPE_CAPACITY),
            speed: BASE_PIPE_SPEED,
            spawn_x: FIELD_WIDTH,
        }
    }

    /// Create a stream with one pipe already at the right edge
    pub fn with_first_pipe<D: Dice>(dice: &mut D) -> Self {
        let mut stream = Self::new();
        stream.spawn(dice);
        stream
    }

    /// Append one pipe at the right edge
    pub fn spawn<D: Dice>(&mut self, dice: &mut D) {
        let pipe = Pipe::spawn(self.spawn_x, dice);
        trace!("spawn pipe offset={} live={}", pipe.offset(), self.pipes.len() + 1);
        self.pipes.push_back(pipe);
    }

    /// Append a specific pipe (used to stage scenarios)
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push_back(pipe);
    }

    /// Move every pipe by the current speed
    pub fn advance(&mut self) {
        let dx = self.step_size();
        for pipe in self.pipes.iter_mut() {
            pipe.shift(dx);
        }
    }

    /// Spawn once the newest pipe clears the margin, then retire the oldest
    /// pipe if it had already left the field.
    pub fn maintain<D: Dice>(&mut self, dice: &mut D) {
        let (Some(newest), Some(oldest)) = (self.pipes.back(), self.pipes.front()) else {
            self.spawn(dice);
            return;
        };
        let newest_x = newest.x();
        let oldest_x = oldest.x();

        if newest_x < PIPE_MARGIN {
            self.spawn(dice);
            if oldest_x < 0 {
                self.pipes.pop_front();
                trace!("retire pipe at x={} live={}", oldest_x, self.pipes.len());
            }
        }
    }

    /// One tick of stream upkeep: maintenance, then scrolling
    pub fn step<D: Dice>(&mut self, dice: &mut D) {
        self.maintain(dice);
        self.advance();
    }

    /// Number of pipes that moved onto or past `column` during the last advance.
    ///
    /// A pipe counts when `x <= column < x + |step|`, so each pipe is counted on
    /// exactly one tick regardless of the step size.
    pub fn crossed(&self, column: i32) -> usize {
        let stride = self.step_size().abs();
        if stride == 0 {
            return 0;
        }
        self.pipes
            .iter()
            .filter(|p| p.x() <= column && column < p.x() + stride)
            .count()
    }

    /// Integer X step applied per tick
    pub fn step_size(&self) -> i32 {
        self.speed as i32
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn reset_speed(&mut self) {
        self.speed = BASE_PIPE_SPEED;
    }

    /// Whether pipes scroll at the baseline speed
    pub fn at_base_speed(&self) -> bool {
        self.step_size() == BASE_PIPE_SPEED as i32
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> + '_ {
        self.pipes.iter()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn newest(&self) -> Option<&Pipe> {
        self.pipes.back()
    }

    pub fn oldest(&self) -> Option<&Pipe> {
        self.pipes.front()
    }
}

impl Default for PipeStream {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a PipeStream {
    type Item = &'a Pipe;
    type IntoIter = std::collections::vec_deque::Iter<'a, Pipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.pipes.iter()
    }
}
