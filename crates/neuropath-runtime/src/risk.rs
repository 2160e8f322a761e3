//! Crisis risk assessment and protective-pathway detection.
//!
//! These read live registry state: a pathway that was low risk when
//! created can escalate once its connections are reinforced.

use crate::config::RiskConfig;
use crate::metrics::variance;
use crate::pathway::{has_node_where, mean_strength};
use neuropath_core::registry::NeuralRegistry;
use neuropath_core::types::*;
use std::collections::HashSet;
use tracing::warn;

/// Live classification of one pathway.
///
/// Only pathways with a harmful node are graded. Returns `Critical` when
/// the mean strength and activation frequency both pass their critical
/// thresholds, `High` when the mean strength passes the high threshold,
/// and `None` otherwise.
pub fn classify_pathway<R: NeuralRegistry + ?Sized>(
    registry: &R,
    pathway: &Pathway,
    risk: &RiskConfig,
) -> Option<RiskLevel> {
    if !has_node_where(registry, pathway, |n| n.tag.is_harmful()) {
        return None;
    }
    let mean = mean_strength(registry, &pathway.connection_ids);
    if mean > risk.critical_strength && pathway.activation_frequency > risk.critical_frequency {
        Some(RiskLevel::Critical)
    } else if mean > risk.high_strength {
        Some(RiskLevel::High)
    } else {
        None
    }
}

/// Four-tier aggregate over every pathway.
///
/// Any critical pathway makes the whole network critical. More than
/// `high_pathway_count` high pathways is high; at least one is medium.
pub fn assess_crisis_risk<R: NeuralRegistry + ?Sized>(
    registry: &R,
    pathways: &[Pathway],
    risk: &RiskConfig,
) -> RiskLevel {
    let mut critical = 0usize;
    let mut high = 0usize;
    for pathway in pathways {
        match classify_pathway(registry, pathway, risk) {
            Some(RiskLevel::Critical) => critical += 1,
            Some(RiskLevel::High) => high += 1,
            _ => {}
        }
    }

    if critical > 0 {
        warn!(critical, high, "critical crisis pathway detected");
        RiskLevel::Critical
    } else if high > risk.high_pathway_count {
        RiskLevel::High
    } else if high > 0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Pathways that contain a protective node and have actually fired.
pub fn protective_pathways<'a, R: NeuralRegistry + ?Sized>(
    registry: &R,
    pathways: &'a [Pathway],
) -> Vec<&'a Pathway> {
    pathways
        .iter()
        .filter(|p| p.activation_frequency > 0)
        .filter(|p| has_node_where(registry, p, |n| n.tag.is_protective()))
        .collect()
}

/// Pathway-level plasticity in [0, 1]; 0 without pathways.
///
/// Diversity is the number of distinct (case-folded) node labels across
/// all pathways over total node memberships plus one. Balance is
/// `1 / (1 + variance of activation frequencies)`, so evenly exercised
/// pathways score higher.
pub fn neural_plasticity<R: NeuralRegistry + ?Sized>(registry: &R, pathways: &[Pathway]) -> f64 {
    if pathways.is_empty() {
        return 0.0;
    }

    let mut labels = HashSet::new();
    let mut memberships = 0usize;
    for pathway in pathways {
        for node in pathway.node_ids.iter().filter_map(|id| registry.node(id)) {
            labels.insert(node.label.to_lowercase());
            memberships += 1;
        }
    }
    let diversity = labels.len() as f64 / (memberships + 1) as f64;

    let frequencies: Vec<f64> = pathways
        .iter()
        .map(|p| p.activation_frequency as f64)
        .collect();
    let balance = 1.0 / (1.0 + variance(&frequencies));

    clamp_unit((diversity + balance) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry_impl::PetRegistry;
    use chrono::Utc;
    use neuropath_core::lexicon::ContentTag;

    struct Fixture {
        reg: PetRegistry,
        pathways: Vec<Pathway>,
    }

    impl Fixture {
        fn new() -> Self {
            Self { reg: PetRegistry::new(), pathways: Vec::new() }
        }

        fn node(&mut self, label: &str) -> NodeId {
            let now = Utc::now();
            let data = NodeData {
                id: self.reg.next_node_id(),
                node_type: NodeType::Pattern,
                label: label.to_string(),
                tag: ContentTag::from_label(label),
                activation_level: 0.0,
                position: Position::default(),
                created_at: now,
                last_activated: now,
            };
            self.reg.insert_node(data)
        }

        /// Two-node pathway `trigger -> label` with one connection.
        fn pathway(&mut self, label: &str, strength: f64, frequency: u64) -> PathwayId {
            let a = self.node("trigger");
            let b = self.node(label);
            let now = Utc::now();
            let cid = self
                .reg
                .insert_connection(ConnectionData {
                    id: self.reg.next_connection_id(),
                    source: a,
                    target: b,
                    strength,
                    weight: 0.0,
                    activation_count: 0,
                    pathway_type: PathwayType::Neutral,
                    created_at: now,
                    last_fired: now,
                })
                .unwrap();
            let id = PathwayId(self.pathways.len() as u64);
            self.pathways.push(Pathway {
                id,
                user_id: UserId::new("u1"),
                name: format!("{} pathway", label),
                node_ids: vec![a, b],
                connection_ids: vec![cid],
                dominant_emotion: NEUTRAL_EMOTION.to_string(),
                crisis_risk_level: RiskLevel::Low,
                activation_frequency: frequency,
                created_at: now,
                last_activated: now,
            });
            id
        }

        fn assess(&self) -> RiskLevel {
            assess_crisis_risk(&self.reg, &self.pathways, &RiskConfig::default())
        }
    }

    #[test]
    fn strong_frequent_harmful_pathway_is_critical() {
        let mut f = Fixture::new();
        f.pathway("suicide", 0.85, 4);
        assert_eq!(f.assess(), RiskLevel::Critical);
    }

    #[test]
    fn strong_but_rare_harmful_pathway_is_only_high() {
        let mut f = Fixture::new();
        let id = f.pathway("suicide", 0.85, 3);
        let p = &f.pathways[id.0 as usize];
        assert_eq!(
            classify_pathway(&f.reg, p, &RiskConfig::default()),
            Some(RiskLevel::High)
        );
        assert_eq!(f.assess(), RiskLevel::Medium);
    }

    #[test]
    fn more_than_two_high_pathways_is_high() {
        let mut f = Fixture::new();
        f.pathway("worthless", 0.7, 0);
        f.pathway("hopelessness", 0.7, 0);
        assert_eq!(f.assess(), RiskLevel::Medium);
        f.pathway("self-harm urges", 0.65, 1);
        assert_eq!(f.assess(), RiskLevel::High);
    }

    #[test]
    fn weak_or_benign_pathways_are_low() {
        let mut f = Fixture::new();
        f.pathway("worthless", 0.5, 10);
        f.pathway("deadline stress", 1.0, 10);
        assert_eq!(f.assess(), RiskLevel::Low);
        assert_eq!(assess_crisis_risk(&f.reg, &[], &RiskConfig::default()), RiskLevel::Low);
    }

    #[test]
    fn protective_requires_activation() {
        let mut f = Fixture::new();
        f.pathway("breathing", 0.5, 0);
        assert!(protective_pathways(&f.reg, &f.pathways).is_empty());

        f.pathways[0].activation_frequency = 1;
        let found = protective_pathways(&f.reg, &f.pathways);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "breathing pathway");
    }

    #[test]
    fn plasticity_prefers_balanced_frequencies() {
        let mut balanced = Fixture::new();
        balanced.pathway("a", 0.5, 2);
        balanced.pathway("b", 0.5, 2);

        let mut skewed = Fixture::new();
        skewed.pathway("a", 0.5, 0);
        skewed.pathway("b", 0.5, 10);

        let pb = neural_plasticity(&balanced.reg, &balanced.pathways);
        let ps = neural_plasticity(&skewed.reg, &skewed.pathways);
        assert!(pb > ps);
        assert!((0.0..=1.0).contains(&pb));
        assert!((0.0..=1.0).contains(&ps));
    }

    #[test]
    fn plasticity_without_pathways_is_zero() {
        let reg = PetRegistry::new();
        assert_eq!(neural_plasticity(&reg, &[]), 0.0);
    }
}
