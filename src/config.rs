//! Runtime settings.
//!
//! Read once at startup from a JSON file; every field is optional.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::entities::Playfield;
use crate::persistence::FileHighScore;
use crate::Result;

/// Environment variable naming an alternative settings file.
pub const CONFIG_ENV: &str = "SEAGULL_SON_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical playfield size in pixels
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Simulation frames per second
    pub fps: u32,
    /// Ring the terminal bell for cues
    pub sound: bool,
    /// Where the high score is kept
    pub high_score_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            fps: 60,
            sound: true,
            high_score_path: FileHighScore::default_path(),
        }
    }
}

impl Settings {
    /// Parse a settings file.  A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// `$SEAGULL_SON_CONFIG`, else `~/.seagull_son.json`.
    pub fn default_path() -> PathBuf {
        if let Ok(p) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(p);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".seagull_son.json")
    }

    /// Load from the default location, falling back to defaults on error.
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::from_file(&path) {
            Ok(settings) => {
                info!("settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Playfield with degenerate sizes replaced by the defaults.
    pub fn playfield(&self) -> Playfield {
        let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Playfield {
            width: pick(self.playfield_width, PLAYFIELD_WIDTH),
            height: pick(self.playfield_height, PLAYFIELD_HEIGHT),
        }
    }

    /// Frame duration, with at least one frame per second.
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "fps": 30 }"#).unwrap();
        assert_eq!(s.fps, 30);
        assert_eq!(s.playfield_height, PLAYFIELD_HEIGHT);
        assert!(s.sound);
    }

    #[test]
    fn degenerate_playfield_falls_back() {
        let s = Settings {
            playfield_width: 0.0,
            playfield_height: -5.0,
            ..Settings::default()
        };
        assert_eq!(s.playfield(), Playfield::default());
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        let s = Settings { fps: 0, ..Settings::default() };
        assert_eq!(s.frame_duration(), std::time::Duration::from_secs(1));
    }
}
