//! Data-driven game balance
//!
//! Every physics and geometry constant the simulation reads lives here so a
//! settings file can rebalance the game without recompiling.

use anyhow::{Result, bail};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation balance values (per-tick units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,

    pub flyer_x: f32,
    pub flyer_width: f32,
    pub flyer_height: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub tilt_scale: f32,
    pub max_tilt: f32,

    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub pipe_sprite_height: f32,
    pub pipe_speed: f32,
    pub pipe_spacing: f32,
    pub initial_pipes: usize,
    pub gap_top_min: f32,
    pub gap_bottom_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,

            flyer_x: FLYER_X,
            flyer_width: FLYER_WIDTH,
            flyer_height: FLYER_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            tilt_scale: TILT_SCALE,
            max_tilt: MAX_TILT,

            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            pipe_sprite_height: PIPE_SPRITE_HEIGHT,
            pipe_speed: PIPE_SPEED,
            pipe_spacing: PIPE_SPACING,
            initial_pipes: INITIAL_PIPES,
            gap_top_min: GAP_TOP_MIN,
            gap_bottom_margin: GAP_BOTTOM_MARGIN,
        }
    }
}

impl Tuning {
    /// Y coordinate of the ground line (flyer at or below it has crashed)
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Starting flyer y (integer halving, like the sprite grid)
    pub fn flyer_start_y(&self) -> f32 {
        (self.screen_height / 2.0).floor()
    }

    pub fn flyer_size(&self) -> Vec2 {
        Vec2::new(self.flyer_width, self.flyer_height)
    }

    /// Inclusive integer range for a pipe's gap top
    pub fn gap_top_range(&self) -> (i32, i32) {
        (
            self.gap_top_min as i32,
            (self.screen_height - self.gap_bottom_margin) as i32,
        )
    }

    /// x below which the rightmost pipe triggers a new spawn
    pub fn spawn_threshold(&self) -> f32 {
        self.screen_width - self.pipe_spacing
    }

    /// Check the values can drive a simulation without panicking or stalling
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("flyer_width", self.flyer_width),
            ("flyer_height", self.flyer_height),
            ("pipe_gap", self.pipe_gap),
            ("pipe_width", self.pipe_width),
            ("pipe_speed", self.pipe_speed),
            ("pipe_spacing", self.pipe_spacing),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                bail!("{name} must be positive, got {value}");
            }
        }

        if !self.gravity.is_finite() || !self.jump_velocity.is_finite() {
            bail!("gravity and jump_velocity must be finite");
        }
        if !(self.max_tilt >= 0.0) {
            bail!("max_tilt must not be negative, got {}", self.max_tilt);
        }
        if self.ground_height < 0.0 || self.ground_height >= self.screen_height {
            bail!(
                "ground_height {} must lie within the screen height {}",
                self.ground_height,
                self.screen_height
            );
        }

        let (lo, hi) = self.gap_top_range();
        if lo > hi {
            bail!("empty gap range [{lo}, {hi}]");
        }

        if self.initial_pipes == 0 {
            bail!("initial_pipes must be at least 1");
        }
        // Spacing beyond the screen width would leave no spawn threshold on screen
        if self.pipe_spacing > self.screen_width {
            bail!(
                "pipe_spacing {} exceeds screen_width {}",
                self.pipe_spacing,
                self.screen_width
            );
        }

        Ok(())
    }
}
