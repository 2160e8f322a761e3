//! Counter-pathway suggestions for elevated-risk networks.
//!
//! Suggestions are templates only. Nothing here touches the registry;
//! turning a suggestion into real nodes is an explicit engine call.

use crate::config::RiskConfig;
use crate::risk::classify_pathway;
use neuropath_core::registry::NeuralRegistry;
use neuropath_core::types::*;
use serde::{Deserialize, Serialize};

/// One node of a suggested pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedStep {
    pub node_type: NodeType,
    pub label: String,
}

impl SuggestedStep {
    fn new(node_type: NodeType, label: impl Into<String>) -> Self {
        Self { node_type, label: label.into() }
    }
}

/// A non-binding template for a healthier pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwaySuggestion {
    pub name: String,
    /// Names of the elevated pathways this responds to.
    pub addresses: Vec<String>,
    /// Ordered node sequence, wired source to target.
    pub steps: Vec<SuggestedStep>,
    pub rationale: String,
}

/// Effective level of a pathway: the higher of its creation-time level
/// and its live classification.
pub fn effective_level<R: NeuralRegistry + ?Sized>(
    registry: &R,
    pathway: &Pathway,
    risk: &RiskConfig,
) -> RiskLevel {
    match classify_pathway(registry, pathway, risk) {
        Some(live) => live.max(pathway.crisis_risk_level),
        None => pathway.crisis_risk_level,
    }
}

/// Propose counter-pathways when any pathway is high or critical.
///
/// Returns an empty list when nothing is elevated.
pub fn suggest_healthy_pathways<R: NeuralRegistry + ?Sized>(
    registry: &R,
    pathways: &[Pathway],
    risk: &RiskConfig,
) -> Vec<PathwaySuggestion> {
    let elevated: Vec<(&Pathway, RiskLevel)> = pathways
        .iter()
        .map(|p| (p, effective_level(registry, p, risk)))
        .filter(|(_, level)| level.is_elevated())
        .collect();

    if elevated.is_empty() {
        return Vec::new();
    }

    let addresses: Vec<String> = elevated.iter().map(|(p, _)| p.name.clone()).collect();
    let trigger = elevated
        .iter()
        .flat_map(|(p, _)| p.node_ids.iter())
        .filter_map(|id| registry.node(id))
        .find(|n| n.node_type == NodeType::Trigger)
        .map(|n| n.label.clone())
        .unwrap_or_else(|| "difficult moment".to_string());

    let mut suggestions = Vec::new();

    if elevated.iter().any(|(_, level)| *level == RiskLevel::Critical) {
        suggestions.push(PathwaySuggestion {
            name: "Crisis support".to_string(),
            addresses: addresses.clone(),
            steps: vec![
                SuggestedStep::new(NodeType::Trigger, trigger.clone()),
                SuggestedStep::new(NodeType::Response, "contact crisis line"),
                SuggestedStep::new(NodeType::Emotion, "safe"),
            ],
            rationale: "A harmful pathway is strongly reinforced and firing often. \
                        Routing the same trigger to immediate human support comes first."
                .to_string(),
        });
    }

    suggestions.push(PathwaySuggestion {
        name: "Grounding".to_string(),
        addresses: addresses.clone(),
        steps: vec![
            SuggestedStep::new(NodeType::Trigger, trigger.clone()),
            SuggestedStep::new(NodeType::Response, "deep breathing"),
            SuggestedStep::new(NodeType::Emotion, "calm"),
        ],
        rationale: "Pairing the trigger with a breathing response gives the same cue \
                    a calming outcome to reinforce instead."
            .to_string(),
    });

    suggestions.push(PathwaySuggestion {
        name: "Reach out".to_string(),
        addresses: addresses.clone(),
        steps: vec![
            SuggestedStep::new(NodeType::Trigger, trigger),
            SuggestedStep::new(NodeType::Response, "reach out for support"),
            SuggestedStep::new(NodeType::Emotion, "connected"),
        ],
        rationale: "Connecting with someone trusted interrupts isolation, which \
                    strengthens harmful loops."
            .to_string(),
    });

    suggestions.push(PathwaySuggestion {
        name: "Reframe".to_string(),
        addresses,
        steps: vec![
            SuggestedStep::new(NodeType::Pattern, "negative thought"),
            SuggestedStep::new(NodeType::Response, "cognitive reframing"),
            SuggestedStep::new(NodeType::Emotion, "hope"),
        ],
        rationale: "Challenging the automatic thought builds an alternative route \
                    that can outcompete the harmful one with repetition."
            .to_string(),
    });

    suggestions
}
