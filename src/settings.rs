//! Game settings and preferences
//!
//! Read from a JSON file at startup. A missing or broken file never stops the
//! game: the problem is logged and defaults are used instead.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::audio::AudioManager;
use crate::consts::TICK_RATE;
use crate::tuning::Tuning;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "PIPE_FLYER_SETTINGS";
/// Settings file used when the environment variable is unset
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Fixed run seed (random if unset)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_rate == 0 {
            bail!("tick_rate must be at least 1");
        }
        self.tuning.validate().context("invalid tuning")
    }

    /// Load settings from a file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `$PIPE_FLYER_SETTINGS`, or `settings.json` in the working directory
    pub fn load() -> Self {
        let path = std::env::var(SETTINGS_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Audio manager configured with these preferences
    pub fn audio_manager(&self) -> AudioManager {
        let mut audio = AudioManager::new();
        audio.set_master_volume(self.master_volume);
        audio.set_sfx_volume(self.sfx_volume);
        audio.set_muted(self.muted);
        audio
    }
}
