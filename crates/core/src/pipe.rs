//! Pipe module - a top/bottom obstacle pair
//!
//! A pipe is drawn as a top segment hanging from `offset` and a bottom segment
//! starting `PIPE_GAP` below the top segment's end. The bottom segment carries a
//! cap ("mushroom") that narrows the gap by `PIPE_MUSHROOM`.
//!
//! ```text
//!   offset ──┐ ██
//!            │ ██   top segment (PIPE_HEIGHT tall)
//!  top_end ──┘ ██
//!                   gap
//!  bottom_start ─ ▀▀▀▀ mushroom cap
//!                  ██
//! ```

use crate::bird::Bird;
use crate::dice::Dice;
use crate::types::{PIPE_GAP, PIPE_HEIGHT, PIPE_MIN_OFFSET, PIPE_MUSHROOM, PIPE_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pipe {
    x: i32,
    offset: i32,
}

impl Pipe {
    pub fn new(x: i32, offset: i32) -> Self {
        Self { x, offset }
    }

    /// Create a pipe at `x` with a randomly drawn top-segment offset
    pub fn spawn<D: Dice>(x: i32, dice: &mut D) -> Self {
        Self::new(x, random_offset(dice))
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y of the top segment's upper edge (zero or negative)
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn width(&self) -> i32 {
        PIPE_WIDTH
    }

    pub fn height(&self) -> i32 {
        PIPE_HEIGHT
    }

    /// Y of the top segment's lower edge
    pub fn top_end(&self) -> i32 {
        self.offset + PIPE_HEIGHT
    }

    /// Y of the bottom segment's upper edge (the mushroom cap)
    pub fn bottom_start(&self) -> i32 {
        self.top_end() + PIPE_GAP - PIPE_MUSHROOM
    }

    /// Whether the pipe's columns overlap the bird's columns
    pub fn overlaps(&self, bird: &Bird) -> bool {
        bird.x() - PIPE_WIDTH <= self.x && self.x <= bird.x() + bird.width()
    }

    pub(crate) fn shift(&mut self, dx: i32) {
        self.x += dx;
    }
}

/// Draw a top-segment offset in `(-PIPE_HEIGHT, 0]`.
///
/// Draws at or below `PIPE_MIN_OFFSET` collapse to `-PIPE_HEIGHT`, which parks
/// the top segment entirely above the field.
pub fn random_offset<D: Dice>(dice: &mut D) -> i32 {
    let offset = -(PIPE_HEIGHT as f64 * dice.unit()) as i32;
    if offset > PIPE_MIN_OFFSET {
        offset
    } else {
        -PIPE_HEIGHT
    }
}
