//! Error types for Neuropath operations.
//!
//! Validation failures are returned to the caller, never coerced.

use crate::types::{ConnectionId, NodeId, PathwayId};
use thiserror::Error;

/// Result type for Neuropath operations.
pub type Result<T> = std::result::Result<T, NeuroError>;

/// Errors that can occur while building or mutating a network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeuroError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(ConnectionId),

    #[error("Pathway not found: {0}")]
    PathwayNotFound(PathwayId),

    #[error("{field} out of range: {value} (must be {min} to {max})")]
    InvalidRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A restored state document contradicts itself.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for NeuroError {
    fn from(e: std::io::Error) -> Self {
        NeuroError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for NeuroError {
    fn from(e: serde_json::Error) -> Self {
        NeuroError::Serialization(e.to_string())
    }
}

impl NeuroError {
    pub fn invalid_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        NeuroError::InvalidRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }
}

/// Check that `value` lies within `[min, max]`. NaN is rejected.
pub fn ensure_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(NeuroError::invalid_range(field, value, min, max))
    }
}
