//! Pipe Flyer - A side-scrolling pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flyer physics, pipes, collisions, game state)
//! - `platform`: Render/audio seam between the simulation and the host
//! - `audio`: Sound cues and volume gating
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences loaded from JSON

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use audio::{AudioManager, Cue};
pub use platform::{DrawCommand, FrameClock, Platform, RecordingPlatform};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical ticks per second
    pub const TICK_RATE: u32 = 30;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Physics step handed to entities each tick (measured in ticks)
    pub const TICK: f32 = 1.0;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 1000.0;
    pub const GROUND_HEIGHT: f32 = 30.0;

    /// Flyer defaults
    pub const FLYER_X: f32 = 80.0;
    pub const FLYER_WIDTH: f32 = 34.0;
    pub const FLYER_HEIGHT: f32 = 24.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -8.0;
    /// Degrees of tilt per unit of velocity
    pub const TILT_SCALE: f32 = 3.0;
    pub const MAX_TILT: f32 = 30.0;

    /// Pipe defaults
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_WIDTH: f32 = 100.0;
    pub const PIPE_SPRITE_HEIGHT: f32 = 500.0;
    /// Leftward scroll per tick
    pub const PIPE_SPEED: f32 = 3.0;
    /// Horizontal distance between consecutive pipes
    pub const PIPE_SPACING: f32 = 400.0;
    pub const INITIAL_PIPES: usize = 3;
    /// Gap top is drawn from [GAP_TOP_MIN, SCREEN_HEIGHT - GAP_BOTTOM_MARGIN]
    pub const GAP_TOP_MIN: f32 = 100.0;
    pub const GAP_BOTTOM_MARGIN: f32 = 200.0;

    /// HUD placement
    pub const SCORE_TEXT_POS: (f32, f32) = (10.0, 10.0);
}
