//! Sound cues and volume gating
//!
//! The simulation only names cues; the host decides whether and how loud to
//! play them. There is no native mixer, so accepted cues are logged and counted.

use serde::{Deserialize, Serialize};

/// Sound effect cues raised by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Flyer jumped
    Flap,
    /// A pipe was cleared
    Score,
    /// Flyer crashed
    Hit,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Flap, Cue::Score, Cue::Hit];

    /// Asset the host should play for this cue
    pub fn asset_path(&self) -> &'static str {
        match self {
            Cue::Flap => "sounds/flap.wav",
            Cue::Score => "sounds/score.wav",
            Cue::Hit => "sounds/hit.wav",
        }
    }

    fn index(&self) -> usize {
        match self {
            Cue::Flap => 0,
            Cue::Score => 1,
            Cue::Hit => 2,
        }
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Cues accepted for playback, indexed by `Cue::index`
    played: [u32; 3],
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            played: [0; 3],
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound cue. Returns the volume it was played at, or `None` if silenced.
    pub fn play(&mut self, cue: Cue) -> Option<f32> {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return None;
        }

        self.played[cue.index()] += 1;
        log::trace!("play {} at volume {:.2}", cue.asset_path(), vol);
        Some(vol)
    }

    /// How many times a cue has been played
    pub fn play_count(&self, cue: Cue) -> u32 {
        self.played[cue.index()]
    }
}
