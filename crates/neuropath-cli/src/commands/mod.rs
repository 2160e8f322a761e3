//! CLI command implementations.

pub mod init;
pub mod demo;
pub mod node;
pub mod connect;
pub mod pathway;
pub mod activate;
pub mod strengthen;
pub mod snapshot;
pub mod assess;

use anyhow::{bail, Context, Result};
use colored::{ColoredString, Colorize};
use neuropath::prelude::*;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;

/// Resolved settings shared by every command.
pub struct Session {
    pub config: Config,
    pub state_path: PathBuf,
}

impl Session {
    pub fn new(config: Config, state_override: Option<PathBuf>) -> Self {
        let state_path = state_override.unwrap_or_else(|| config.session.state_file.clone());
        Self { config, state_path }
    }

    /// Load the saved network, or start an empty one.
    pub fn open(&self) -> Result<NeuralEngine> {
        if self.state_path.exists() {
            let state = load_state(&self.state_path)
                .with_context(|| format!("Failed to load state: {}", self.state_path.display()))?;
            NeuralEngine::from_state(state, self.config.engine())
                .with_context(|| format!("Corrupt state: {}", self.state_path.display()))
        } else {
            let user = UserId::new(self.config.session.user_id.clone());
            Ok(NeuralEngine::with_config(user, self.config.engine())?)
        }
    }

    /// Load the saved network; fail if there is none yet.
    pub fn open_existing(&self) -> Result<NeuralEngine> {
        if !self.state_path.exists() {
            bail!("No network found. Run {} first.", "neuropath node add".cyan());
        }
        self.open()
    }

    pub fn save(&self, engine: &NeuralEngine) -> Result<()> {
        save_state(&engine.export_state(), &self.state_path)
            .with_context(|| format!("Failed to save state: {}", self.state_path.display()))?;
        debug!(path = %self.state_path.display(), "state saved");
        Ok(())
    }
}

/// Resolve a pathway by numeric id or by name.
pub fn resolve_pathway(engine: &NeuralEngine, key: &str) -> Result<PathwayId> {
    let found = match key.parse::<u64>() {
        Ok(n) => engine.pathway(PathwayId(n)),
        Err(_) => engine.pathway_by_name(key),
    };
    match found {
        Some(p) => Ok(p.id),
        None => bail!("Pathway not found: {}", key),
    }
}

pub fn paint_risk(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => level.as_str().green(),
        RiskLevel::Medium => level.as_str().yellow(),
        RiskLevel::High => level.as_str().red(),
        RiskLevel::Critical => level.as_str().red().bold(),
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
