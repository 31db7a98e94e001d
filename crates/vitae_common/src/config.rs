//! User configuration.
//!
//! Config file: ~/.config/vitae/config.toml. A missing file means
//! defaults; a malformed file is a real error and is reported as one.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::DEFAULT_CONTINUATION_CHANCE;
use crate::error::VitaeError;

/// Simulated typing delay bounds, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingConfig {
    #[serde(default = "default_min_delay")]
    pub min_delay_ms: u64,
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,
}

fn default_min_delay() -> u64 {
    800
}

fn default_max_delay() -> u64 {
    2000
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self { min_delay_ms: default_min_delay(), max_delay_ms: default_max_delay() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitaeConfig {
    #[serde(default)]
    pub typing: TypingConfig,

    /// Probability of steering a fallback turn back to the last topic
    #[serde(default = "default_continuation_chance")]
    pub continuation_chance: f64,

    /// Optional path to a JSON résumé profile; built-in profile otherwise
    #[serde(default)]
    pub profile: Option<PathBuf>,
}

fn default_continuation_chance() -> f64 {
    DEFAULT_CONTINUATION_CHANCE
}

impl Default for VitaeConfig {
    fn default() -> Self {
        Self {
            typing: TypingConfig::default(),
            continuation_chance: default_continuation_chance(),
            profile: None,
        }
    }
}

impl VitaeConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("vitae").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist
    pub fn load() -> Result<Self, VitaeError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, VitaeError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Normalized delay bounds: always a valid low..=high range
    pub fn delay_range(&self) -> (u64, u64) {
        let lo = self.typing.min_delay_ms.min(self.typing.max_delay_ms);
        let hi = self.typing.min_delay_ms.max(self.typing.max_delay_ms);
        (lo, hi)
    }
}
