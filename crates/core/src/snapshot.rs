use arrayvec::ArrayVec;

use crate::bird::Bird;
use crate::pipe::Pipe;
use crate::types::{FieldBounds, PowerUp, BASE_GRAVITY, BASE_PIPE_SPEED};

/// Pipes kept in a snapshot; the live stream never holds more.
pub const SNAPSHOT_PIPES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSnapshot {
    pub x: i32,
    pub y: i32,
    pub velocity: f64,
    pub width: i32,
    pub height: i32,
    pub regime: PowerUp,
}

impl From<Bird> for BirdSnapshot {
    fn from(value: Bird) -> Self {
        Self {
            x: value.x(),
            y: value.y(),
            velocity: value.velocity(),
            width: value.width(),
            height: value.height(),
            regime: value.regime(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipeSnapshot {
    pub x: i32,
    pub offset: i32,
    pub top_end: i32,
    pub bottom_start: i32,
}

impl From<Pipe> for PipeSnapshot {
    fn from(value: Pipe) -> Self {
        Self {
            x: value.x(),
            offset: value.offset(),
            top_end: value.top_end(),
            bottom_start: value.bottom_start(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub bird: BirdSnapshot,
    pub pipes: ArrayVec<PipeSnapshot, SNAPSHOT_PIPES>,
    pub bounds: FieldBounds,
    pub score: u32,
    pub tick_count: u64,
    pub running: bool,
    pub game_over: bool,
    pub regime: PowerUp,
    pub gravity: f64,
    pub pipe_speed: f64,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.bird = BirdSnapshot::from(Bird::new());
        self.pipes.clear();
        self.bounds = FieldBounds::default();
        self.score = 0;
        self.tick_count = 0;
        self.running = false;
        self.game_over = false;
        self.regime = PowerUp::Normal;
        self.gravity = BASE_GRAVITY;
        self.pipe_speed = BASE_PIPE_SPEED;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            bird: BirdSnapshot::from(Bird::new()),
            pipes: ArrayVec::new(),
            bounds: FieldBounds::default(),
            score: 0,
            tick_count: 0,
            running: false,
            game_over: false,
            regime: PowerUp::Normal,
            gravity: BASE_GRAVITY,
            pipe_speed: BASE_PIPE_SPEED,
        }
    }
}
