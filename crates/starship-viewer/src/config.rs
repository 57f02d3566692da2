use std::path::{Path, PathBuf};

use glam::DVec3;
use serde::{Deserialize, Serialize};
use starship_core::constants::TARGET_FPS;
use starship_core::Color;

use crate::error::ViewerError;
use crate::input::{ScriptedKey, Speeds};

/// Viewer settings. Every field is optional in the RON source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub model_path: PathBuf,
    pub camera_position: [f64; 3],
    pub ship_position: [f64; 3],
    /// Ship rotation about its Y axis, radians per second.
    pub ship_spin: f64,
    pub target_fps: u32,
    /// Stop after this many frames. 0 runs until a scripted Quit.
    pub frames: u64,
    /// Sleep to hold `target_fps`. When false every frame advances by exactly 1 / target_fps.
    pub realtime: bool,
    /// Where the last frame is written as PNG, if anywhere.
    pub snapshot: Option<PathBuf>,
    pub clear_color: Color,
    pub move_speed: f64,
    pub turn_speed: f64,
    pub script: Vec<ScriptedKey>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            model_path: PathBuf::from("data/ship.bin"),
            camera_position: [0.0, 10.0, -30.0],
            ship_position: [0.0, 0.0, 20.0],
            ship_spin: 0.5,
            target_fps: TARGET_FPS,
            frames: 300,
            realtime: true,
            snapshot: Some(PathBuf::from("frame.png")),
            clear_color: Color::BLACK,
            move_speed: 10.0,
            turn_speed: 1.0,
            script: Vec::new(),
        }
    }
}

impl ViewerConfig {
    pub fn from_ron_str(ron_str: &str) -> Result<Self, ViewerError> {
        let options = ron::Options::default();
        options
            .from_str(ron_str)
            .map_err(|e| ViewerError::ConfigParse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let text = std::fs::read_to_string(path).map_err(|source| ViewerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ViewerError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("Config {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn camera_position(&self) -> DVec3 {
        DVec3::from_array(self.camera_position)
    }

    pub fn ship_position(&self) -> DVec3 {
        DVec3::from_array(self.ship_position)
    }

    pub fn speeds(&self) -> Speeds {
        Speeds {
            move_speed: self.move_speed,
            turn_speed: self.turn_speed,
        }
    }
}
