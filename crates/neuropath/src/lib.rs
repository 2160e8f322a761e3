//! # Neuropath
//!
//! Models a person's recurring emotional and behavioral patterns as a
//! directed, weighted graph of nodes (emotions, memories, triggers,
//! responses, patterns) joined by connections, grouped into named
//! pathways.
//!
//! Firing a pathway raises its nodes' activation and reinforces its
//! connections with a signed Hebbian rule. The network can be summarized
//! in a snapshot, graded for crisis risk and asked for healthier
//! counter-pathways.
//!
//! ## Quick Start
//!
//! ```rust
//! use neuropath::prelude::*;
//!
//! let mut engine = NeuralEngine::new(UserId::new("user-1"));
//!
//! let trigger = engine.add_node(NodeType::Trigger, "exam", Position::new(0.0, 0.0)).id;
//! let fear = engine.add_node(NodeType::Emotion, "fear", Position::new(1.0, 0.0)).id;
//! engine.connect_nodes(trigger, fear, 0.5, 0.8).unwrap();
//!
//! let pathway = engine.create_pathway("exam fear", &[trigger, fear]).unwrap();
//! let record = engine
//!     .activate_pathway(pathway.id, TriggerType::Message, "exam tomorrow")
//!     .unwrap();
//! assert_eq!(record.fired_nodes, vec![trigger, fear]);
//!
//! let snapshot = engine.network_snapshot();
//! assert_eq!(snapshot.dominant_emotion, "fear");
//! assert_eq!(engine.assess_crisis_risk(), RiskLevel::Low);
//! ```
//!
//! ## Architecture
//!
//! - [`neuropath_core`] - Shared types, content lexicon, errors and the
//!   `NeuralRegistry` trait
//! - [`neuropath_runtime`] - petgraph registry, activation, metrics, risk
//!   and suggestion engines, and `NeuralEngine`
//!
//! ## Two severities
//!
//! | Measure | Source | Levels |
//! |---------|--------|--------|
//! | `BrainNetworkSnapshot::crisis_risk_level` | creation-time pathway levels | low, high |
//! | `NeuralEngine::assess_crisis_risk` | live strength and frequency | low, medium, high, critical |
//!
//! ## State Persistence
//!
//! ```rust,ignore
//! use neuropath::prelude::*;
//! use std::path::Path;
//!
//! let engine = NeuralEngine::new(UserId::new("user-1"));
//! save_state(&engine.export_state(), Path::new("state.json")).unwrap();
//!
//! let state = load_state(Path::new("state.json")).unwrap();
//! let restored = NeuralEngine::from_state(state, EngineConfig::default()).unwrap();
//! ```

// Re-export all subcrates
pub use neuropath_core as core;
pub use neuropath_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use neuropath::prelude::*;
/// ```
pub mod prelude {
    pub use neuropath_runtime::prelude::*;
}
