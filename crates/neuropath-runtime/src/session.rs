//! State persistence: export and restore a whole engine.
//!
//! Serializes every node, connection, pathway and activation record to
//! JSON so a user's network survives across sessions. Restoring checks
//! referential integrity and value ranges before anything is rebuilt.

use crate::clock::SystemClock;
use crate::config::EngineConfig;
use crate::engine::NeuralEngine;
use crate::registry_impl::PetRegistry;
use chrono::{DateTime, Utc};
use neuropath_core::error::{ensure_range, NeuroError, Result};
use neuropath_core::registry::NeuralRegistry;
use neuropath_core::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Serializable snapshot of an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub metadata: StateMetadata,
    pub nodes: Vec<NodeData>,
    pub connections: Vec<ConnectionData>,
    pub pathways: Vec<Pathway>,
    #[serde(default)]
    pub activations: Vec<PathwayActivation>,
}

/// State metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMetadata {
    pub state_id: String,
    pub user_id: UserId,
    pub node_count: usize,
    pub connection_count: usize,
    pub pathway_count: usize,
    pub exported_at: DateTime<Utc>,
}

impl NeuralEngine {
    /// Copy the full engine state out.
    pub fn export_state(&self) -> EngineState {
        let nodes: Vec<NodeData> = self.registry.nodes().into_iter().cloned().collect();
        let connections: Vec<ConnectionData> =
            self.registry.connections().into_iter().cloned().collect();

        EngineState {
            metadata: StateMetadata {
                state_id: uuid::Uuid::new_v4().to_string(),
                user_id: self.user_id.clone(),
                node_count: nodes.len(),
                connection_count: connections.len(),
                pathway_count: self.pathways.len(),
                exported_at: self.clock.now(),
            },
            nodes,
            connections,
            pathways: self.pathways.clone(),
            activations: self.history.clone(),
        }
    }

    /// Rebuild an engine from exported state.
    ///
    /// Fails with `NodeNotFound`/`ConnectionNotFound`/`PathwayNotFound`
    /// for dangling references, `InvalidRange` for out-of-range values and
    /// `InvalidState` for duplicate ids, misnumbered pathways or a pathway
    /// connection whose endpoints are not both members.
    /// The restored engine reads the system clock; use `with_clock` to
    /// replace it.
    pub fn from_state(state: EngineState, config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let mut registry = PetRegistry::new();
        for node in state.nodes {
            ensure_range("activation_level", node.activation_level, 0.0, 1.0)?;
            if registry.node(&node.id).is_some() {
                return Err(NeuroError::InvalidState(format!("duplicate node id {}", node.id)));
            }
            registry.insert_node(node);
        }
        for conn in state.connections {
            ensure_range("strength", conn.strength, 0.0, 1.0)?;
            ensure_range("weight", conn.weight, -1.0, 1.0)?;
            if registry.connection(&conn.id).is_some() {
                return Err(NeuroError::InvalidState(format!(
                    "duplicate connection id {}",
                    conn.id
                )));
            }
            registry.insert_connection(conn)?;
        }

        for (i, pathway) in state.pathways.iter().enumerate() {
            // Pathway ids index the pathway list.
            if pathway.id != PathwayId(i as u64) {
                return Err(NeuroError::InvalidState(format!(
                    "pathway at position {} has id {}",
                    i, pathway.id
                )));
            }
            if let Some(missing) = pathway.node_ids.iter().find(|id| registry.node(id).is_none()) {
                return Err(NeuroError::NodeNotFound(*missing));
            }
            for cid in &pathway.connection_ids {
                let conn = registry
                    .connection(cid)
                    .ok_or(NeuroError::ConnectionNotFound(*cid))?;
                if !pathway.contains_node(&conn.source) || !pathway.contains_node(&conn.target) {
                    return Err(NeuroError::InvalidState(format!(
                        "{} joins {} to {} outside pathway {}",
                        cid, conn.source, conn.target, pathway.id
                    )));
                }
            }
        }
        if let Some(orphan) = state
            .activations
            .iter()
            .find(|a| a.pathway_id.0 as usize >= state.pathways.len())
        {
            return Err(NeuroError::PathwayNotFound(orphan.pathway_id));
        }

        info!(
            user = %state.metadata.user_id,
            nodes = registry.node_count(),
            connections = registry.connection_count(),
            pathways = state.pathways.len(),
            "engine state restored"
        );

        Ok(Self {
            user_id: state.metadata.user_id,
            registry,
            pathways: state.pathways,
            history: state.activations,
            config,
            clock: Box::new(SystemClock),
        })
    }
}

/// Write state to a pretty-printed JSON file, creating parent directories.
pub fn save_state(state: &EngineState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}

/// Load state from JSON.
pub fn load_state(path: &Path) -> Result<EngineState> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
