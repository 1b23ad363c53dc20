//! The player-controlled flyer
//!
//! Only vertical motion is simulated; the flyer sits at a fixed x while the
//! pipes scroll past it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    /// Top edge of the sprite box
    pub y: f32,
    /// Vertical velocity per tick (positive = downward)
    pub vel: f32,
    /// Display tilt in degrees (positive = nose up); no gameplay effect
    pub tilt: f32,
}

impl Flyer {
    /// Spawn at the vertical center, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            y: tuning.flyer_start_y(),
            vel: 0.0,
            tilt: 0.0,
        }
    }

    /// Override velocity with the jump impulse (no cooldown)
    pub fn jump(&mut self, tuning: &Tuning) {
        self.vel = tuning.jump_velocity;
    }

    /// Integrate one step of `dt` ticks
    pub fn advance(&mut self, dt: f32, tuning: &Tuning) {
        self.vel += tuning.gravity * dt;
        self.y += self.vel * dt;
        self.tilt = tilt_for_velocity(self.vel, tuning);
    }

    /// Top-left draw position
    pub fn pos(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(tuning.flyer_x, self.y)
    }

    /// Unrotated hit box; the drawn sprite may be tilted but collision ignores it
    pub fn bounding_box(&self, tuning: &Tuning) -> Rect {
        Rect {
            pos: self.pos(tuning),
            size: tuning.flyer_size(),
        }
    }

    /// True once the flyer has reached the ground line
    pub fn is_grounded(&self, tuning: &Tuning) -> bool {
        self.y >= tuning.ground_line()
    }
}

/// Nose up while rising, down while falling, clamped to ±max_tilt
pub fn tilt_for_velocity(vel: f32, tuning: &Tuning) -> f32 {
    (-vel * tuning.tilt_scale).clamp(-tuning.max_tilt, tuning.max_tilt)
}
