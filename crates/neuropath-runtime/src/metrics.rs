//! Network-wide statistics for point-in-time snapshots.
//!
//! Computes density, mean activation and strength, the dominant emotion,
//! the coarse snapshot risk flag and a plasticity score from a set of
//! nodes, connections and pathways. Empty input yields zeros and the
//! neutral emotion rather than an error.

use chrono::{DateTime, Utc};
use neuropath_core::types::*;
use std::borrow::Borrow;
use std::collections::HashSet;

/// Build an immutable snapshot of the given network state.
pub fn create_network_snapshot<N, C>(
    user_id: UserId,
    nodes: &[N],
    connections: &[C],
    pathways: &[Pathway],
    now: DateTime<Utc>,
) -> BrainNetworkSnapshot
where
    N: Borrow<NodeData>,
    C: Borrow<ConnectionData>,
{
    let nodes: Vec<&NodeData> = nodes.iter().map(|n| n.borrow()).collect();
    let strengths: Vec<f64> = connections.iter().map(|c| c.borrow().strength).collect();
    let activations: Vec<f64> = nodes.iter().map(|n| n.activation_level).collect();

    let crisis_indicators: Vec<String> = pathways
        .iter()
        .filter(|p| p.crisis_risk_level.is_elevated())
        .map(|p| p.name.clone())
        .collect();
    let crisis_risk_level = if crisis_indicators.is_empty() {
        SnapshotRiskLevel::Low
    } else {
        SnapshotRiskLevel::High
    };

    BrainNetworkSnapshot {
        user_id,
        total_nodes: nodes.len(),
        total_connections: strengths.len(),
        active_pathways: pathways.iter().filter(|p| p.activation_frequency > 0).count(),
        network_density: network_density(nodes.len(), strengths.len()),
        average_activation: mean(&activations),
        average_connection_strength: mean(&strengths),
        dominant_emotion: dominant_emotion(nodes.iter().copied()),
        crisis_risk_level,
        crisis_indicators,
        plasticity_score: plasticity_score(&nodes, &strengths),
        timestamp: now,
    }
}

/// `connections / (nodes * (nodes - 1) / 2)`; 0 with fewer than two nodes.
///
/// Uses the undirected simple-graph denominator, so a dense directed
/// network can score above 1.
pub fn network_density(node_count: usize, connection_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let max_edges = node_count * (node_count - 1) / 2;
    connection_count as f64 / max_edges as f64
}

/// Average of structural diversity and reinforcement balance, in [0, 1].
///
/// Diversity is `(distinct node types + distinct emotion labels) /
/// (nodes + 1)`. Balance is `1 - min(1, variance of strengths)`. Returns 0
/// for an empty network.
pub fn plasticity_score(nodes: &[&NodeData], strengths: &[f64]) -> f64 {
    if nodes.is_empty() {
        return 0.0;
    }
    let types: HashSet<NodeType> = nodes.iter().map(|n| n.node_type).collect();
    let emotions: HashSet<&str> = nodes
        .iter()
        .filter(|n| n.node_type == NodeType::Emotion)
        .map(|n| n.label.as_str())
        .collect();

    let diversity = (types.len() + emotions.len()) as f64 / (nodes.len() + 1) as f64;
    let balance = 1.0 - variance(strengths).min(1.0);
    clamp_unit((diversity + balance) / 2.0)
}

/// Arithmetic mean; 0 when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population variance; 0 when empty.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}
