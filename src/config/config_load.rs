// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ChainConfig, ChainSettings, StyleConfig, WindowConfig};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub chain: ChainSettings,
    pub style: StyleConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then the working
    /// directory. Falls back to defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("no {} found, using default settings", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validated, immutable settings for the chain and renderer.
    pub fn chain_config(&self) -> Result<ChainConfig, ConfigError> {
        ChainConfig::from_settings(&self.chain, &self.style)
    }

    fn locate() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));
        if let Some(path) = exe_config {
            if path.exists() {
                return Some(path);
            }
        }

        let cwd_config = PathBuf::from(CONFIG_FILE);
        cwd_config.exists().then_some(cwd_config)
    }
}
