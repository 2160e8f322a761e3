//! Pathway aggregation: grouping nodes into a named induced subgraph.
//!
//! A pathway is built once from an explicit node list. Its connection set
//! is the induced subgraph at that moment and is not recomputed when later
//! connections are added between its members.

use crate::config::RiskConfig;
use chrono::{DateTime, Utc};
use neuropath_core::error::{NeuroError, Result};
use neuropath_core::registry::NeuralRegistry;
use neuropath_core::types::*;
use std::collections::HashSet;

/// Build a pathway over `node_ids`.
///
/// Duplicate ids are collapsed, keeping the first occurrence. Fails with
/// `NodeNotFound` if any id is not registered.
pub fn build_pathway<R: NeuralRegistry + ?Sized>(
    registry: &R,
    id: PathwayId,
    user_id: UserId,
    name: impl Into<String>,
    node_ids: &[NodeId],
    risk: &RiskConfig,
    now: DateTime<Utc>,
) -> Result<Pathway> {
    let mut seen = HashSet::new();
    let mut members = Vec::with_capacity(node_ids.len());
    for node_id in node_ids {
        if registry.node(node_id).is_none() {
            return Err(NeuroError::NodeNotFound(*node_id));
        }
        if seen.insert(*node_id) {
            members.push(*node_id);
        }
    }

    let connection_ids = registry.induced_connections(&members);
    let member_nodes: Vec<&NodeData> = members.iter().filter_map(|n| registry.node(n)).collect();
    let dominant = dominant_emotion(member_nodes.iter().copied());
    let crisis_risk_level = initial_risk_level(registry, &member_nodes, &connection_ids, risk);

    Ok(Pathway {
        id,
        user_id,
        name: name.into(),
        node_ids: members,
        connection_ids,
        dominant_emotion: dominant,
        crisis_risk_level,
        activation_frequency: 0,
        created_at: now,
        last_activated: now,
    })
}

/// Creation-time classification of a pathway.
///
/// Low without a harmful node; otherwise graded by the mean strength of
/// the induced connections.
pub fn initial_risk_level<R: NeuralRegistry + ?Sized>(
    registry: &R,
    nodes: &[&NodeData],
    connection_ids: &[ConnectionId],
    risk: &RiskConfig,
) -> RiskLevel {
    if !nodes.iter().any(|n| n.tag.is_harmful()) {
        return RiskLevel::Low;
    }
    let mean = mean_strength(registry, connection_ids);
    if mean > risk.critical_strength {
        RiskLevel::Critical
    } else if mean > risk.high_strength {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

/// Mean current strength of the given connections; 0 when empty.
pub fn mean_strength<R: NeuralRegistry + ?Sized>(registry: &R, ids: &[ConnectionId]) -> f64 {
    let strengths: Vec<f64> = ids
        .iter()
        .filter_map(|id| registry.connection(id))
        .map(|c| c.strength)
        .collect();
    if strengths.is_empty() {
        0.0
    } else {
        strengths.iter().sum::<f64>() / strengths.len() as f64
    }
}

/// Whether any node of the pathway satisfies `predicate`.
pub fn has_node_where<R, F>(registry: &R, pathway: &Pathway, predicate: F) -> bool
where
    R: NeuralRegistry + ?Sized,
    F: Fn(&NodeData) -> bool,
{
    pathway
        .node_ids
        .iter()
        .filter_map(|id| registry.node(id))
        .any(predicate)
}
