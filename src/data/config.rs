use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: String,
    pub ui_fps: u32,

    /// Interval between playback position ticks.
    #[serde(default = "default_time_update_ms")]
    pub time_update_ms: u64,

    /// Window during which programmatic scrubber writes skip the fill redraw.
    #[serde(default = "default_value_debounce_ms")]
    pub value_debounce_ms: u64,

    #[serde(default = "default_initial_volume")]
    pub initial_volume: f32,

    #[serde(default)]
    pub autoplay: bool,

    #[serde(default)]
    pub transparent_background: bool,
}

fn default_time_update_ms() -> u64 {
    250
}

fn default_value_debounce_ms() -> u64 {
    1000
}

fn default_initial_volume() -> f32 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "mocha".to_string(),
            ui_fps: 60,
            time_update_ms: default_time_update_ms(),
            value_debounce_ms: default_value_debounce_ms(),
            initial_volume: default_initial_volume(),
            autoplay: false,
            transparent_background: false,
        }
    }
}

impl Config {
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Self::parse(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring invalid config {}: {e}", path.display());
            Self::default()
        }))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "scrubdeck").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn time_update(&self) -> Duration {
        Duration::from_millis(self.time_update_ms.max(1))
    }

    pub fn value_debounce(&self) -> Duration {
        Duration::from_millis(self.value_debounce_ms)
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(1000 / self.ui_fps.max(1) as u64)
    }
}
