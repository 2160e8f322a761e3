//! Engine configuration.
//!
//! Every field has a serde default, so a partial TOML or JSON document
//! overrides only what it names.

use neuropath_core::error::{NeuroError, Result};
use serde::{Deserialize, Serialize};

/// Tunable parameters of the activation and risk engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub activation: ActivationConfig,
    #[serde(default)]
    pub risk: RiskConfig,
}

/// Parameters for firing pathways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// Amount added to each fired node's activation level (default: 0.1).
    #[serde(default = "default_activation_step")]
    pub activation_step: f64,
    /// Hebbian learning rate; strength moves by `rate * weight` (default: 0.05).
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// |weight| above this classifies a connection as strengthening or
    /// weakening (default: 0.3).
    #[serde(default = "default_polarity_threshold")]
    pub polarity_threshold: f64,
}

/// Thresholds for crisis classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Mean strength above which a harmful pathway may be critical (default: 0.8).
    #[serde(default = "default_critical_strength")]
    pub critical_strength: f64,
    /// Mean strength above which a harmful pathway is high (default: 0.6).
    #[serde(default = "default_high_strength")]
    pub high_strength: f64,
    /// Activations a harmful pathway must exceed to be critical (default: 3).
    #[serde(default = "default_critical_frequency")]
    pub critical_frequency: u64,
    /// More high pathways than this escalates the aggregate to high (default: 2).
    #[serde(default = "default_high_pathway_count")]
    pub high_pathway_count: usize,
}

// Default value functions
fn default_activation_step() -> f64 { 0.1 }
fn default_learning_rate() -> f64 { 0.05 }
fn default_polarity_threshold() -> f64 { 0.3 }
fn default_critical_strength() -> f64 { 0.8 }
fn default_high_strength() -> f64 { 0.6 }
fn default_critical_frequency() -> u64 { 3 }
fn default_high_pathway_count() -> usize { 2 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            activation: ActivationConfig::default(),
            risk: RiskConfig::default(),
        }
    }
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            activation_step: default_activation_step(),
            learning_rate: default_learning_rate(),
            polarity_threshold: default_polarity_threshold(),
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            critical_strength: default_critical_strength(),
            high_strength: default_high_strength(),
            critical_frequency: default_critical_frequency(),
            high_pathway_count: default_high_pathway_count(),
        }
    }
}

impl EngineConfig {
    /// Reject values that would break the range invariants.
    pub fn validate(&self) -> Result<()> {
        let a = &self.activation;
        unit("activation.activation_step", a.activation_step)?;
        unit("activation.learning_rate", a.learning_rate)?;
        unit("activation.polarity_threshold", a.polarity_threshold)?;

        let r = &self.risk;
        unit("risk.critical_strength", r.critical_strength)?;
        unit("risk.high_strength", r.high_strength)?;
        if r.high_strength > r.critical_strength {
            return Err(NeuroError::InvalidConfig(format!(
                "risk.high_strength ({}) exceeds risk.critical_strength ({})",
                r.high_strength, r.critical_strength
            )));
        }
        Ok(())
    }
}

fn unit(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(NeuroError::InvalidConfig(format!(
            "{} must be within 0.0-1.0, got {}",
            field, value
        )))
    }
}
