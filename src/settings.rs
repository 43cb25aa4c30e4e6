//! Game settings and preferences
//!
//! Stored as JSON next to the binary. Any field may be omitted.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_DT, MUSIC_VOLUME};

/// Environment variable naming the settings file
pub const SETTINGS_ENV_VAR: &str = "FOREST_RUN_SETTINGS";
/// Settings file used when the environment variable is unset
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound and music on at startup
    pub audio_enabled: bool,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Fixed RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    /// Headless runner: give up after this many frames
    pub max_frames: u32,
    /// Headless runner: steer the hero automatically
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            music_volume: MUSIC_VOLUME,
            seed: None,
            max_frames: (60.0 / FRAME_DT).round() as u32,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Configured seed, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings in {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load from the path in `FOREST_RUN_SETTINGS`, or `settings.json`
    pub fn load_from_env() -> Self {
        let path = std::env::var(SETTINGS_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        Self::load(Path::new(&path))
    }
}
