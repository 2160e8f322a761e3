//! Neuropath Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use neuropath_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    NodeId, ConnectionId, PathwayId, UserId,
    Position, NodeType, NodeData,
    PathwayType, ConnectionData,
    RiskLevel, SnapshotRiskLevel,
    Pathway, TriggerType, StrengthChange, PathwayActivation,
    BrainNetworkSnapshot,
    dominant_emotion, NEUTRAL_EMOTION,
};

// Re-export the content lexicon
pub use crate::lexicon::{ContentTag, HARMFUL_MARKERS, PROTECTIVE_MARKERS};

// Re-export the NeuralRegistry trait
pub use crate::registry::NeuralRegistry;

// Re-export error types
pub use crate::error::{NeuroError, Result};
