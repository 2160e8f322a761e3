//! Shared types used across the registries, engines and crates.

use crate::lexicon::ContentTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a node in the registry.
///
/// Ids are dense and sequential within one engine instance, so two engines
/// fed the same calls hand out the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Identifier for a connection (synapse) in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection#{}", self.0)
    }
}

/// Identifier for a pathway owned by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathwayId(pub u64);

impl fmt::Display for PathwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pathway#{}", self.0)
    }
}

/// Identifier of the user who owns a pathway. Assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A display position. Carries no semantics for activation or metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

/// Kinds of nodes in the associative graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Emotion,
    Memory,
    Trigger,
    Response,
    Pattern,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Emotion => "emotion",
            NodeType::Memory => "memory",
            NodeType::Trigger => "trigger",
            NodeType::Response => "response",
            NodeType::Pattern => "pattern",
        }
    }

    /// Parse a lowercase type name as used in state files and the CLI.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "emotion" => Some(NodeType::Emotion),
            "memory" => Some(NodeType::Memory),
            "trigger" => Some(NodeType::Trigger),
            "response" => Some(NodeType::Response),
            "pattern" => Some(NodeType::Pattern),
            _ => None,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data stored in a registry node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: NodeId,
    pub node_type: NodeType,
    pub label: String,
    /// Harmful/protective classification, fixed at creation.
    pub tag: ContentTag,
    /// Always within [0, 1].
    pub activation_level: f64,
    pub position: Position,
    pub created_at: DateTime<Utc>,
    pub last_activated: DateTime<Utc>,
}

/// Polarity class of a connection, derived from its weight at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayType {
    Strengthening,
    Weakening,
    Neutral,
}

impl PathwayType {
    /// Weight above this is strengthening, below its negation weakening.
    pub const THRESHOLD: f64 = 0.3;

    pub fn from_weight(weight: f64) -> Self {
        Self::from_weight_with_threshold(weight, Self::THRESHOLD)
    }

    pub fn from_weight_with_threshold(weight: f64, threshold: f64) -> Self {
        if weight > threshold {
            PathwayType::Strengthening
        } else if weight < -threshold {
            PathwayType::Weakening
        } else {
            PathwayType::Neutral
        }
    }
}

/// Data stored on a directed connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionData {
    pub id: ConnectionId,
    pub source: NodeId,
    pub target: NodeId,
    /// Reinforcement strength, always within [0, 1].
    pub strength: f64,
    /// Signed learning weight within [-1, 1]. Positive is excitatory.
    pub weight: f64,
    /// Number of times this connection fired. Never decreases.
    pub activation_count: u64,
    pub pathway_type: PathwayType,
    pub created_at: DateTime<Utc>,
    pub last_fired: DateTime<Utc>,
}

/// Four-tier crisis severity used per pathway and for the engine-wide
/// assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// High or critical.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse two-valued flag reported in a network snapshot.
///
/// Distinct from [`RiskLevel`]: it only reports whether any pathway was
/// flagged high or critical when it was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotRiskLevel {
    Low,
    High,
}

impl fmt::Display for SnapshotRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotRiskLevel::Low => f.write_str("low"),
            SnapshotRiskLevel::High => f.write_str("high"),
        }
    }
}

/// A named induced subgraph representing a recurring pattern.
///
/// Holds ids only. Node and connection state lives in the registry, so
/// activation through one pathway is visible to every pathway sharing
/// the same elements. Membership is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pathway {
    pub id: PathwayId,
    pub user_id: UserId,
    pub name: String,
    pub node_ids: Vec<NodeId>,
    pub connection_ids: Vec<ConnectionId>,
    pub dominant_emotion: String,
    /// Classification taken when the pathway was created.
    pub crisis_risk_level: RiskLevel,
    /// Number of activations. Never decreases.
    pub activation_frequency: u64,
    pub created_at: DateTime<Utc>,
    pub last_activated: DateTime<Utc>,
}

impl Pathway {
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_ids.contains(id)
    }
}

/// What caused a pathway to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Message,
    MoodEntry,
    ExternalEvent,
}

impl TriggerType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "message" => Some(TriggerType::Message),
            "mood_entry" => Some(TriggerType::MoodEntry),
            "external_event" => Some(TriggerType::ExternalEvent),
            _ => None,
        }
    }
}

/// A single strength change caused by activation or explicit adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthChange {
    pub connection_id: ConnectionId,
    pub old_strength: f64,
    pub new_strength: f64,
}

/// Immutable audit record of one pathway firing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayActivation {
    pub pathway_id: PathwayId,
    pub trigger_type: TriggerType,
    pub trigger_content: String,
    pub fired_nodes: Vec<NodeId>,
    pub strength_changes: Vec<StrengthChange>,
    pub timestamp: DateTime<Utc>,
}

/// Point-in-time aggregate over the whole network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainNetworkSnapshot {
    pub user_id: UserId,
    pub total_nodes: usize,
    pub total_connections: usize,
    /// Pathways that have fired at least once.
    pub active_pathways: usize,
    /// |C| / (|N|(|N|-1)/2); 0 with fewer than two nodes.
    pub network_density: f64,
    pub average_activation: f64,
    pub average_connection_strength: f64,
    pub dominant_emotion: String,
    pub crisis_risk_level: SnapshotRiskLevel,
    /// Names of pathways flagged high or critical.
    pub crisis_indicators: Vec<String>,
    pub plasticity_score: f64,
    pub timestamp: DateTime<Utc>,
}

/// Label reported when no emotion node is present.
pub const NEUTRAL_EMOTION: &str = "neutral";

/// Label of the emotion node with the highest activation.
///
/// Ties keep the first node encountered. Returns [`NEUTRAL_EMOTION`] when
/// no emotion node is present.
pub fn dominant_emotion<'a>(nodes: impl IntoIterator<Item = &'a NodeData>) -> String {
    let mut best: Option<&NodeData> = None;
    for node in nodes {
        if node.node_type != NodeType::Emotion {
            continue;
        }
        match best {
            Some(current) if node.activation_level <= current.activation_level => {}
            _ => best = Some(node),
        }
    }
    best.map(|n| n.label.clone())
        .unwrap_or_else(|| NEUTRAL_EMOTION.to_string())
}

/// Clamp into [0, 1].
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
