//! Platform abstraction layer
//!
//! The simulation never touches a window or an audio device. Each tick it is
//! handed a [`Platform`] and issues draw commands and sound cues through it:
//! - Draw commands arrive in painter's order
//! - Cues are fire-and-forget
//! - Frame timing is converted to whole ticks by [`FrameClock`]

pub mod frame_clock;

pub use frame_clock::FrameClock;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::Cue;

/// A single draw request, positions are top-left screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Full-screen background image
    Background,
    /// Flyer sprite rotated by `angle` degrees (positive = nose up)
    Flyer { pos: Vec2, angle: f32 },
    /// Upright pipe sprite below the gap
    PipeBottom { pos: Vec2 },
    /// Vertically mirrored pipe sprite above the gap
    PipeTop { pos: Vec2 },
    /// In-game score overlay
    ScoreText { score: u32, pos: Vec2 },
    /// Game over banner with the final score and restart/quit prompt
    GameOverText { score: u32, pos: Vec2 },
}

impl DrawCommand {
    /// Text for the command, if it draws text
    pub fn text(&self) -> Option<String> {
        match self {
            DrawCommand::ScoreText { score, .. } => Some(format!("Score: {score}")),
            DrawCommand::GameOverText { score, .. } => Some(format!(
                "Game Over! Score: {score} | Y = Restart | N = Quit"
            )),
            _ => None,
        }
    }
}

/// Host services the simulation needs each tick
pub trait Platform {
    fn render(&mut self, cmd: DrawCommand);
    fn play_sound(&mut self, cue: Cue);
}

/// Platform that keeps everything it is given (tests, replays)
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    pub commands: Vec<DrawCommand>,
    pub cues: Vec<Cue>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded draw commands (cues are kept for whole-run assertions)
    pub fn clear_frame(&mut self) {
        self.commands.clear();
    }

    pub fn cue_count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|&&c| c == cue).count()
    }
}

impl Platform for RecordingPlatform {
    fn render(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    fn play_sound(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
