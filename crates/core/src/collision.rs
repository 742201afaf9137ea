//! Collision module - the three bird-vs-world policies
//!
//! The set of policies is closed, so they are a plain enum dispatched with a
//! `match`. Each policy is a predicate over the current state except
//! [`CollisionPolicy::Intangible`], which pins a bird that flew above the
//! ceiling back onto it and nudges it downward.

use crate::bird::Bird;
use crate::pipe::Pipe;
use crate::types::{FieldBounds, PowerUp, CEILING_NUDGE, PIPE_MUSHROOM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionPolicy {
    /// Ceiling, floor and both pipe segments are fatal
    #[default]
    Default,
    /// Only the floor is fatal; the ceiling holds the bird in the field
    Intangible,
    /// Like `Default`, but the top segment is only fatal at its cap band
    UpperPipeIntangible,
}

impl CollisionPolicy {
    /// Check the bird against the field and every pipe.
    ///
    /// Returns `true` on a fatal collision.
    pub fn evaluate<'a, I>(&self, pipes: I, bounds: &FieldBounds, bird: &mut Bird) -> bool
    where
        I: IntoIterator<Item = &'a Pipe>,
    {
        match self {
            CollisionPolicy::Default => {
                let bird = &*bird;
                touches_bounds(bounds, bird)
                    || pipes
                        .into_iter()
                        .any(|pipe| pipe.overlaps(bird) && hits_pipe(pipe, bird))
            }
            CollisionPolicy::Intangible => {
                if bird.y() >= bounds.floor_y {
                    return true;
                }
                if bird.y() <= bounds.ceiling_y {
                    bird.set_y(bounds.ceiling_y);
                    bird.accelerate(CEILING_NUDGE);
                }
                false
            }
            CollisionPolicy::UpperPipeIntangible => {
                let bird = &*bird;
                touches_bounds(bounds, bird)
                    || pipes
                        .into_iter()
                        .any(|pipe| pipe.overlaps(bird) && hits_pipe_cap(pipe, bird))
            }
        }
    }

    /// Presentation tag for this policy
    pub fn regime_tag(&self) -> PowerUp {
        match self {
            CollisionPolicy::Default => PowerUp::Normal,
            CollisionPolicy::Intangible => PowerUp::BirdBoost,
            CollisionPolicy::UpperPipeIntangible => PowerUp::GravityBoost,
        }
    }

    /// Policy that backs a boost regime
    pub fn for_boost(regime: PowerUp) -> Self {
        match regime {
            PowerUp::Normal => CollisionPolicy::Default,
            PowerUp::BirdBoost => CollisionPolicy::Intangible,
            PowerUp::GravityBoost => CollisionPolicy::UpperPipeIntangible,
        }
    }
}

fn touches_bounds(bounds: &FieldBounds, bird: &Bird) -> bool {
    bird.y() <= bounds.ceiling_y || bird.y() >= bounds.floor_y
}

fn hits_pipe(pipe: &Pipe, bird: &Bird) -> bool {
    bird.y() <= pipe.top_end() || bird.y() >= pipe.bottom_start()
}

// Above the cap band the top segment is passable.
fn hits_pipe_cap(pipe: &Pipe, bird: &Bird) -> bool {
    let top_end = pipe.top_end();
    (top_end - PIPE_MUSHROOM..=top_end).contains(&bird.y()) || bird.y() >= pipe.bottom_start()
}
