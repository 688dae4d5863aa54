//! Configuration management (~/.config/nether-shapes/config.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::procedural::DEFAULT_FLAT_EPSILON;
use crate::shape::DEFAULT_SIDE_PER_UNIT;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Tessellation defaults for new shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Sides per unit of scaled radius
    #[serde(default = "default_side_per_unit")]
    pub side_per_unit: f32,
    /// Heights below this draw flat two-sided shapes
    #[serde(default = "default_flat_epsilon")]
    pub flat_epsilon: f32,
}

fn default_side_per_unit() -> f32 { DEFAULT_SIDE_PER_UNIT }
fn default_flat_epsilon() -> f32 { DEFAULT_FLAT_EPSILON }

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            side_per_unit: DEFAULT_SIDE_PER_UNIT,
            flat_epsilon: DEFAULT_FLAT_EPSILON,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "nethercore", "nether-shapes")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load the user config, falling back to defaults if it is missing or broken
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    match Config::load_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            tracing::warn!("ignoring {}: {e}", path.display());
            Config::default()
        }
    }
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    config.save_to(&path)
}
