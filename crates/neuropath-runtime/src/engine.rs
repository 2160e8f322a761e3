//! NeuralEngine, the per-user owner of a network.
//!
//! One engine holds every node, connection, pathway and activation record
//! for a single user session. It is `Send` but not internally
//! synchronized: callers sharing an engine across tasks serialize
//! mutating calls themselves (one actor per user, or a mutex).
//!
//! Data flows one way:
//! 1. Registries store nodes and connections
//! 2. Pathways are aggregated from registered nodes
//! 3. Activation mutates the registries through a pathway
//! 4. Metrics and risk assessment read the registries
//! 5. Suggestions read the risk assessment

use crate::activation::{adjust_strength, fire_pathway};
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::metrics::create_network_snapshot;
use crate::pathway::build_pathway;
use crate::registry_impl::PetRegistry;
use crate::risk;
use crate::suggestions::{self, PathwaySuggestion};
use neuropath_core::error::{ensure_range, NeuroError, Result};
use neuropath_core::lexicon::ContentTag;
use neuropath_core::registry::NeuralRegistry;
use neuropath_core::types::*;
use tracing::{debug, info};

/// Strength given to connections created from an adopted suggestion.
const ADOPTED_STRENGTH: f64 = 0.5;
/// Weight given to connections created from an adopted suggestion.
const ADOPTED_WEIGHT: f64 = 0.5;

/// Owns one user's associative network.
pub struct NeuralEngine {
    pub(crate) user_id: UserId,
    pub(crate) registry: PetRegistry,
    /// Indexed by `PathwayId`.
    pub(crate) pathways: Vec<Pathway>,
    pub(crate) history: Vec<PathwayActivation>,
    pub(crate) config: EngineConfig,
    pub(crate) clock: Box<dyn Clock>,
}

impl NeuralEngine {
    /// Create an empty engine with default configuration.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            registry: PetRegistry::new(),
            pathways: Vec::new(),
            history: Vec::new(),
            config: EngineConfig::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Create an empty engine with custom configuration.
    pub fn with_config(user_id: UserId, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = Self::new(user_id);
        engine.config = config;
        Ok(engine)
    }

    /// Replace the clock (e.g. with a `ManualClock` in tests).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &PetRegistry {
        &self.registry
    }

    // ── Registries ──────────────────────────────────────────────────

    /// Register a node. The content tag is derived from the label.
    pub fn add_node(&mut self, node_type: NodeType, label: impl Into<String>, position: Position) -> NodeData {
        let label = label.into();
        let tag = ContentTag::from_label(&label);
        self.add_tagged_node(node_type, label, position, tag)
    }

    /// Register a node with an explicit content tag.
    pub fn add_tagged_node(
        &mut self,
        node_type: NodeType,
        label: impl Into<String>,
        position: Position,
        tag: ContentTag,
    ) -> NodeData {
        let now = self.clock.now();
        let data = NodeData {
            id: self.registry.next_node_id(),
            node_type,
            label: label.into(),
            tag,
            activation_level: 0.0,
            position,
            created_at: now,
            last_activated: now,
        };
        debug!(node = %data.id, node_type = %data.node_type, tag = ?data.tag, "node added");
        self.registry.insert_node(data.clone());
        data
    }

    /// Create a directed connection between two registered nodes.
    ///
    /// `strength` must lie in [0, 1] and `weight` in [-1, 1].
    pub fn connect_nodes(
        &mut self,
        source: NodeId,
        target: NodeId,
        strength: f64,
        weight: f64,
    ) -> Result<ConnectionData> {
        ensure_range("strength", strength, 0.0, 1.0)?;
        ensure_range("weight", weight, -1.0, 1.0)?;

        let now = self.clock.now();
        let data = ConnectionData {
            id: self.registry.next_connection_id(),
            source,
            target,
            strength,
            weight,
            activation_count: 0,
            pathway_type: PathwayType::from_weight_with_threshold(
                weight,
                self.config.activation.polarity_threshold,
            ),
            created_at: now,
            last_fired: now,
        };
        self.registry.insert_connection(data.clone())?;
        debug!(connection = %data.id, %source, %target, strength, weight, "nodes connected");
        Ok(data)
    }

    // ── Pathways ────────────────────────────────────────────────────

    /// Group registered nodes into a named pathway.
    pub fn create_pathway(&mut self, name: impl Into<String>, node_ids: &[NodeId]) -> Result<Pathway> {
        let id = PathwayId(self.pathways.len() as u64);
        let pathway = build_pathway(
            &self.registry,
            id,
            self.user_id.clone(),
            name,
            node_ids,
            &self.config.risk,
            self.clock.now(),
        )?;
        info!(
            pathway = %pathway.id,
            name = %pathway.name,
            nodes = pathway.node_ids.len(),
            connections = pathway.connection_ids.len(),
            risk = %pathway.crisis_risk_level,
            "pathway created"
        );
        self.pathways.push(pathway.clone());
        Ok(pathway)
    }

    pub fn pathway(&self, id: PathwayId) -> Option<&Pathway> {
        self.pathways.get(id.0 as usize).filter(|p| p.id == id)
    }

    /// First pathway with the given name.
    pub fn pathway_by_name(&self, name: &str) -> Option<&Pathway> {
        self.pathways.iter().find(|p| p.name == name)
    }

    pub fn pathways(&self) -> &[Pathway] {
        &self.pathways
    }

    fn pathway_mut(&mut self, id: PathwayId) -> Result<&mut Pathway> {
        self.pathways
            .get_mut(id.0 as usize)
            .filter(|p| p.id == id)
            .ok_or(NeuroError::PathwayNotFound(id))
    }

    // ── Activation ──────────────────────────────────────────────────

    /// Fire a pathway and reinforce its connections.
    ///
    /// The returned record is also appended to the activation history.
    pub fn activate_pathway(
        &mut self,
        id: PathwayId,
        trigger_type: TriggerType,
        trigger_content: impl Into<String>,
    ) -> Result<PathwayActivation> {
        let now = self.clock.now();
        let config = self.config.activation.clone();
        let idx = self.pathway_mut(id).map(|p| p.id.0 as usize)?;
        let pathway = &mut self.pathways[idx];
        let record = fire_pathway(
            &mut self.registry,
            pathway,
            trigger_type,
            trigger_content,
            &config,
            now,
        )?;
        info!(
            pathway = %id,
            trigger = ?trigger_type,
            frequency = pathway.activation_frequency,
            changed = record.strength_changes.len(),
            "pathway activated"
        );
        self.history.push(record.clone());
        Ok(record)
    }

    /// Shift every connection strength in a pathway by `delta`.
    pub fn update_pathway_strength(&mut self, id: PathwayId, delta: f64) -> Result<Vec<StrengthChange>> {
        let pathway = self
            .pathways
            .get(id.0 as usize)
            .filter(|p| p.id == id)
            .ok_or(NeuroError::PathwayNotFound(id))?;
        let changes = adjust_strength(&mut self.registry, pathway, delta)?;
        debug!(pathway = %id, delta, changed = changes.len(), "pathway strength adjusted");
        Ok(changes)
    }

    /// Every activation record in firing order.
    pub fn activation_history(&self) -> &[PathwayActivation] {
        &self.history
    }

    /// Activation records for one pathway.
    pub fn activations_for(&self, id: PathwayId) -> Vec<&PathwayActivation> {
        self.history.iter().filter(|a| a.pathway_id == id).collect()
    }

    // ── Metrics and risk ────────────────────────────────────────────

    /// Snapshot of the whole network as of now.
    pub fn network_snapshot(&self) -> BrainNetworkSnapshot {
        create_network_snapshot(
            self.user_id.clone(),
            &self.registry.nodes(),
            &self.registry.connections(),
            &self.pathways,
            self.clock.now(),
        )
    }

    /// Four-tier crisis severity over live state.
    pub fn assess_crisis_risk(&self) -> RiskLevel {
        risk::assess_crisis_risk(&self.registry, &self.pathways, &self.config.risk)
    }

    /// Live classification of one pathway; `None` if it does not count.
    pub fn classify_pathway(&self, id: PathwayId) -> Result<Option<RiskLevel>> {
        let pathway = self.pathway(id).ok_or(NeuroError::PathwayNotFound(id))?;
        Ok(risk::classify_pathway(&self.registry, pathway, &self.config.risk))
    }

    pub fn protective_pathways(&self) -> Vec<&Pathway> {
        risk::protective_pathways(&self.registry, &self.pathways)
    }

    pub fn calculate_neural_plasticity(&self) -> f64 {
        risk::neural_plasticity(&self.registry, &self.pathways)
    }

    pub fn suggest_healthy_pathways(&self) -> Vec<PathwaySuggestion> {
        suggestions::suggest_healthy_pathways(&self.registry, &self.pathways, &self.config.risk)
    }

    /// Materialize a suggestion as new nodes, chained connections and a
    /// pathway named after it.
    pub fn adopt_suggestion(&mut self, suggestion: &PathwaySuggestion) -> Result<Pathway> {
        let mut node_ids = Vec::with_capacity(suggestion.steps.len());
        for (i, step) in suggestion.steps.iter().enumerate() {
            let node = self.add_node(step.node_type, step.label.clone(), Position::new(i as f64, 0.0));
            node_ids.push(node.id);
        }
        for pair in node_ids.windows(2) {
            self.connect_nodes(pair[0], pair[1], ADOPTED_STRENGTH, ADOPTED_WEIGHT)?;
        }
        self.create_pathway(suggestion.name.clone(), &node_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::Duration;

    fn engine() -> NeuralEngine {
        NeuralEngine::new(UserId::new("user-1")).with_clock(ManualClock::default())
    }

    #[test]
    fn engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<NeuralEngine>();
    }

    #[test]
    fn add_node_starts_inactive() {
        let mut e = engine();
        let n = e.add_node(NodeType::Emotion, "anxious", Position::with_z(1.0, 2.0, 3.0));
        assert_eq!(n.activation_level, 0.0);
        assert_eq!(n.created_at, n.last_activated);
        assert_eq!(n.tag, ContentTag::Neutral);
        assert_eq!(e.registry().node(&n.id), Some(&n));
    }

    #[test]
    fn connect_nodes_validates() {
        let mut e = engine();
        let a = e.add_node(NodeType::Trigger, "a", Position::default()).id;
        let b = e.add_node(NodeType::Emotion, "b", Position::default()).id;

        assert_eq!(
            e.connect_nodes(a, NodeId(9), 0.5, 0.5).unwrap_err(),
            NeuroError::NodeNotFound(NodeId(9))
        );
        assert!(matches!(
            e.connect_nodes(a, b, 1.2, 0.5),
            Err(NeuroError::InvalidRange { .. })
        ));
        assert!(matches!(
            e.connect_nodes(a, b, 0.5, -1.5),
            Err(NeuroError::InvalidRange { .. })
        ));
        assert_eq!(e.registry().connection_count(), 0);

        let c = e.connect_nodes(a, b, 0.5, -0.4).unwrap();
        assert_eq!(c.activation_count, 0);
        assert_eq!(c.pathway_type, PathwayType::Weakening);
    }

    #[test]
    fn unknown_pathway_is_reported() {
        let mut e = engine();
        assert_eq!(
            e.activate_pathway(PathwayId(3), TriggerType::Message, "hi").unwrap_err(),
            NeuroError::PathwayNotFound(PathwayId(3))
        );
        assert!(e.update_pathway_strength(PathwayId(0), 0.1).is_err());
        assert!(e.classify_pathway(PathwayId(0)).is_err());
    }

    #[test]
    fn update_pathway_strength_clamps_through_the_engine() {
        let mut e = engine();
        let a = e.add_node(NodeType::Trigger, "a", Position::default()).id;
        let b = e.add_node(NodeType::Emotion, "b", Position::default()).id;
        let ab = e.connect_nodes(a, b, 0.8, 0.0).unwrap().id;
        let ba = e.connect_nodes(b, a, 0.4, 0.0).unwrap().id;
        let p = e.create_pathway("ab", &[a, b]).unwrap().id;

        let changes = e.update_pathway_strength(p, 0.3).unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(e.registry().connection(&ab).unwrap().strength, 1.0);
        assert!((e.registry().connection(&ba).unwrap().strength - 0.7).abs() < 1e-12);
        assert_eq!(e.registry().connection(&ab).unwrap().activation_count, 0);
        assert_eq!(e.pathway(p).unwrap().activation_frequency, 0);

        assert!(matches!(
            e.update_pathway_strength(p, -1.5),
            Err(NeuroError::InvalidRange { .. })
        ));
    }

    #[test]
    fn activation_is_recorded_in_history() {
        let clock = ManualClock::default();
        let mut e = NeuralEngine::new(UserId::new("u")).with_clock(clock);
        let a = e.add_node(NodeType::Trigger, "a", Position::default()).id;
        let b = e.add_node(NodeType::Emotion, "b", Position::default()).id;
        e.connect_nodes(a, b, 0.5, 1.0).unwrap();
        let p = e.create_pathway("ab", &[a, b]).unwrap().id;
        let q = e.create_pathway("a", &[a]).unwrap().id;

        e.activate_pathway(p, TriggerType::Message, "one").unwrap();
        e.activate_pathway(q, TriggerType::MoodEntry, "two").unwrap();
        e.activate_pathway(p, TriggerType::Message, "three").unwrap();

        assert_eq!(e.activation_history().len(), 3);
        assert_eq!(e.activations_for(p).len(), 2);
        assert_eq!(e.pathway(p).unwrap().activation_frequency, 2);
        // Node a fired through both pathways.
        assert!((e.registry().node(&a).unwrap().activation_level - 0.3).abs() < 1e-9);
    }

    #[test]
    fn timestamps_follow_the_clock() {
        let clock = std::sync::Arc::new(ManualClock::default());
        struct Shared(std::sync::Arc<ManualClock>);
        impl Clock for Shared {
            fn now(&self) -> chrono::DateTime<chrono::Utc> {
                self.0.now()
            }
        }

        let mut e = NeuralEngine::new(UserId::new("u")).with_clock(Shared(clock.clone()));
        let a = e.add_node(NodeType::Trigger, "a", Position::default());
        let p = e.create_pathway("a", &[a.id]).unwrap();
        clock.advance(Duration::minutes(10));
        let record = e.activate_pathway(p.id, TriggerType::Message, "x").unwrap();

        let node = e.registry().node(&a.id).unwrap();
        assert_eq!(node.last_activated, a.created_at + Duration::minutes(10));
        assert_eq!(record.timestamp, node.last_activated);
        assert!(e.pathway(p.id).unwrap().last_activated > p.created_at);
    }

    #[test]
    fn adopt_suggestion_builds_a_chained_pathway() {
        let mut e = engine();
        let t = e.add_node(NodeType::Trigger, "criticism", Position::default()).id;
        let h = e.add_node(NodeType::Pattern, "feeling worthless", Position::default()).id;
        e.connect_nodes(t, h, 0.9, 0.5).unwrap();
        e.create_pathway("shame loop", &[t, h]).unwrap();

        let suggestions = e.suggest_healthy_pathways();
        assert!(!suggestions.is_empty());
        let before = e.registry().node_count();

        let adopted = e.adopt_suggestion(&suggestions[0]).unwrap();
        assert_eq!(adopted.node_ids.len(), suggestions[0].steps.len());
        assert_eq!(adopted.connection_ids.len(), suggestions[0].steps.len() - 1);
        assert_eq!(e.registry().node_count(), before + suggestions[0].steps.len());
        assert_eq!(adopted.crisis_risk_level, RiskLevel::Low);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.activation.learning_rate = -0.1;
        assert!(NeuralEngine::with_config(UserId::new("u"), config).is_err());
    }
}
