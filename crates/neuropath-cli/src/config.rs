//! Configuration management for the Neuropath CLI.

use anyhow::{Context, Result};
use neuropath::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "neuropath.toml";
pub const DATA_DIR: &str = ".neuropath";

/// Neuropath project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub activation: ActivationConfig,
    #[serde(default)]
    pub risk: RiskConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Owner recorded on a freshly created network.
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// State file, relative to the working directory.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

fn default_user_id() -> String { "default".to_string() }
fn default_state_file() -> PathBuf { Path::new(DATA_DIR).join("state.json") }

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            state_file: default_state_file(),
        }
    }
}

impl Config {
    /// Load config from neuropath.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .engine()
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Engine parameters carried by this config.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            activation: self.activation.clone(),
            risk: self.risk.clone(),
        }
    }
}

/// Find neuropath.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
