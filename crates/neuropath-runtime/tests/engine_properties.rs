//! Engine-level properties: bounds, monotonic counters, determinism,
//! and the end-to-end risk behaviors.

use chrono::Duration;
use neuropath_runtime::prelude::*;
use std::sync::Arc;

/// Clock handle that can be advanced while the engine owns a copy.
struct SharedClock(Arc<ManualClock>);

impl Clock for SharedClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.0.now()
    }
}

struct Network {
    engine: NeuralEngine,
    spiral: PathwayId,
    coping: PathwayId,
}

/// A small network with one harmful and one protective pathway that
/// share a trigger.
fn build(clock: Arc<ManualClock>) -> Network {
    let mut engine = NeuralEngine::new(UserId::new("user-1")).with_clock(SharedClock(clock));

    let trigger = engine.add_node(NodeType::Trigger, "criticism at work", Position::new(0.0, 0.0)).id;
    let shame = engine.add_node(NodeType::Emotion, "shame", Position::new(1.0, 0.0)).id;
    let thought = engine.add_node(NodeType::Pattern, "I am worthless", Position::new(2.0, 0.0)).id;
    let breathe = engine.add_node(NodeType::Response, "box breathing", Position::new(1.0, 1.0)).id;
    let calm = engine.add_node(NodeType::Emotion, "calm", Position::new(2.0, 1.0)).id;

    engine.connect_nodes(trigger, shame, 0.5, 0.9).unwrap();
    engine.connect_nodes(shame, thought, 0.55, 0.8).unwrap();
    engine.connect_nodes(trigger, breathe, 0.3, 0.6).unwrap();
    engine.connect_nodes(breathe, calm, 0.4, 1.0).unwrap();
    engine.connect_nodes(calm, shame, 0.7, -0.9).unwrap();

    let spiral = engine.create_pathway("shame spiral", &[trigger, shame, thought]).unwrap().id;
    let coping = engine.create_pathway("breathing", &[trigger, breathe, calm]).unwrap().id;

    Network { engine, spiral, coping }
}

fn assert_in_bounds(engine: &NeuralEngine) {
    for node in engine.registry().nodes() {
        assert!((0.0..=1.0).contains(&node.activation_level), "{} out of range", node.id);
    }
    for conn in engine.registry().connections() {
        assert!((0.0..=1.0).contains(&conn.strength), "{} out of range", conn.id);
    }
}

#[test]
fn values_stay_in_unit_range_and_counters_never_decrease() {
    let mut net = build(Arc::new(ManualClock::default()));
    let mut last_counts: Vec<u64> = vec![0; net.engine.registry().connection_count()];
    let mut last_freq = [0u64; 2];

    for round in 0..40 {
        let (id, slot) = if round % 3 == 0 {
            (net.coping, 1)
        } else {
            (net.spiral, 0)
        };
        net.engine
            .activate_pathway(id, TriggerType::Message, format!("round {}", round))
            .unwrap();
        let delta = if round % 5 == 0 { -0.4 } else { 0.25 };
        net.engine.update_pathway_strength(id, delta).unwrap();

        assert_in_bounds(&net.engine);

        let counts: Vec<u64> = net
            .engine
            .registry()
            .connections()
            .iter()
            .map(|c| c.activation_count)
            .collect();
        for (now, before) in counts.iter().zip(&last_counts) {
            assert!(now >= before);
        }
        last_counts = counts;

        let freq = net.engine.pathway(id).unwrap().activation_frequency;
        assert!(freq > last_freq[slot]);
        last_freq[slot] = freq;
    }
}

#[test]
fn replaying_the_same_calls_is_deterministic() {
    let run = || {
        let clock = Arc::new(ManualClock::default());
        let mut net = build(clock.clone());
        let mut records = Vec::new();
        for i in 0..6 {
            clock.advance(Duration::seconds(30));
            let id = if i % 2 == 0 { net.spiral } else { net.coping };
            records.push(
                net.engine
                    .activate_pathway(id, TriggerType::MoodEntry, "low mood")
                    .unwrap(),
            );
        }
        let state = net.engine.export_state();
        (records, state.nodes, state.connections, state.pathways)
    };

    assert_eq!(run(), run());
}

#[test]
fn only_induced_connections_join_a_pathway() {
    let net = build(Arc::new(ManualClock::default()));
    for pathway in net.engine.pathways() {
        for cid in &pathway.connection_ids {
            let conn = net.engine.registry().connection(cid).unwrap();
            assert!(pathway.contains_node(&conn.source));
            assert!(pathway.contains_node(&conn.target));
        }
    }
    // calm -> shame crosses the two pathways and belongs to neither.
    let spiral = net.engine.pathway(net.spiral).unwrap();
    assert_eq!(spiral.connection_ids.len(), 2);
}

#[test]
fn later_connection_between_members_stays_outside_the_pathway() {
    let mut net = build(Arc::new(ManualClock::default()));
    let before = net.engine.pathway(net.spiral).unwrap().clone();
    let thought = before.node_ids[2];
    let shame = before.node_ids[1];

    let late = net.engine.connect_nodes(thought, shame, 0.5, 0.9).unwrap().id;
    net.engine
        .activate_pathway(net.spiral, TriggerType::Message, "criticism again")
        .unwrap();

    let after = net.engine.pathway(net.spiral).unwrap();
    assert_eq!(after.connection_ids, before.connection_ids);
    assert!(!after.connection_ids.contains(&late));
    let conn = net.engine.registry().connection(&late).unwrap();
    assert_eq!(conn.activation_count, 0);
    assert_eq!(conn.strength, 0.5);
    for cid in &before.connection_ids {
        assert_eq!(net.engine.registry().connection(cid).unwrap().activation_count, 1);
    }
}

#[test]
fn harmful_pathway_escalates_to_critical() {
    let mut engine = NeuralEngine::new(UserId::new("u")).with_clock(ManualClock::default());
    let trigger = engine.add_node(NodeType::Trigger, "alone at night", Position::default()).id;
    let thought = engine.add_node(NodeType::Pattern, "suicide", Position::default()).id;
    engine.connect_nodes(trigger, thought, 0.85, 0.0).unwrap();
    let id = engine.create_pathway("night loop", &[trigger, thought]).unwrap().id;

    assert_eq!(engine.assess_crisis_risk(), RiskLevel::Medium);
    for _ in 0..4 {
        engine.activate_pathway(id, TriggerType::ExternalEvent, "").unwrap();
    }
    assert_eq!(engine.classify_pathway(id).unwrap(), Some(RiskLevel::Critical));
    assert_eq!(engine.assess_crisis_risk(), RiskLevel::Critical);

    let suggestions = engine.suggest_healthy_pathways();
    assert_eq!(suggestions[0].name, "Crisis support");
    assert_eq!(suggestions[0].steps[0].label, "alone at night");
}

#[test]
fn protective_pathway_counts_once_it_has_fired() {
    let mut net = build(Arc::new(ManualClock::default()));
    assert!(net.engine.protective_pathways().is_empty());

    net.engine
        .activate_pathway(net.coping, TriggerType::MoodEntry, "tense")
        .unwrap();
    let found: Vec<PathwayId> = net.engine.protective_pathways().iter().map(|p| p.id).collect();
    assert_eq!(found, vec![net.coping]);
}

#[test]
fn snapshot_reflects_live_activation() {
    let mut engine = NeuralEngine::new(UserId::new("u")).with_clock(ManualClock::default());
    let a = engine.add_node(NodeType::Emotion, "A", Position::default()).id;
    let b = engine.add_node(NodeType::Emotion, "B", Position::default()).id;
    let c = engine.add_node(NodeType::Trigger, "C", Position::default()).id;
    let d = engine.add_node(NodeType::Response, "D", Position::default()).id;
    engine.connect_nodes(c, a, 0.5, 0.0).unwrap();
    engine.connect_nodes(c, b, 0.5, 0.0).unwrap();
    engine.connect_nodes(a, d, 0.5, 0.0).unwrap();

    let pa = engine.create_pathway("a", &[a]).unwrap().id;
    let pb = engine.create_pathway("b", &[b]).unwrap().id;
    for _ in 0..2 {
        engine.activate_pathway(pa, TriggerType::Message, "").unwrap();
    }
    for _ in 0..7 {
        engine.activate_pathway(pb, TriggerType::Message, "").unwrap();
    }

    let snap = engine.network_snapshot();
    assert_eq!(snap.network_density, 0.5);
    assert_eq!(snap.dominant_emotion, "B");
    assert_eq!(snap.active_pathways, 2);
    assert_eq!(snap.crisis_risk_level, SnapshotRiskLevel::Low);
    assert!((0.0..=1.0).contains(&snap.plasticity_score));

    let plasticity = engine.calculate_neural_plasticity();
    assert!((0.0..=1.0).contains(&plasticity));
}

#[test]
fn state_survives_a_round_trip_through_disk() {
    let mut net = build(Arc::new(ManualClock::default()));
    net.engine
        .activate_pathway(net.spiral, TriggerType::Message, "review")
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".neuropath").join("state.json");
    save_state(&net.engine.export_state(), &path).unwrap();

    let restored = NeuralEngine::from_state(load_state(&path).unwrap(), EngineConfig::default()).unwrap();
    assert_eq!(restored.registry().node_count(), 5);
    assert_eq!(restored.registry().connection_count(), 5);
    assert_eq!(restored.activation_history().len(), 1);
    assert_eq!(
        restored.pathway(net.spiral).unwrap().activation_frequency,
        net.engine.pathway(net.spiral).unwrap().activation_frequency
    );
    assert_eq!(restored.assess_crisis_risk(), net.engine.assess_crisis_risk());
}
