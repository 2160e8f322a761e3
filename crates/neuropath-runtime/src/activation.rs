//! Activation: firing a pathway and Hebbian reinforcement.
//!
//! Elements that fire together are strengthened together. Each firing
//! raises every member node's activation by a fixed step and moves each
//! induced connection's strength by `learning_rate * weight`. The sign of
//! the weight makes one rule serve both excitatory and inhibitory links.

use crate::clock::monotonic;
use crate::config::ActivationConfig;
use chrono::{DateTime, Utc};
use neuropath_core::error::{ensure_range, NeuroError, Result};
use neuropath_core::registry::NeuralRegistry;
use neuropath_core::types::*;
use tracing::debug;

/// Hebbian update for a single connection, clamped to [0, 1].
pub fn hebbian_update(strength: f64, weight: f64, learning_rate: f64) -> f64 {
    clamp_unit(strength + learning_rate * weight)
}

/// Fire `pathway` once.
///
/// Nodes fire in stored order, then every induced connection is
/// reinforced. The returned record is an owned copy of what fired and
/// what changed; it does not alias live state.
pub fn fire_pathway<R: NeuralRegistry + ?Sized>(
    registry: &mut R,
    pathway: &mut Pathway,
    trigger_type: TriggerType,
    trigger_content: impl Into<String>,
    config: &ActivationConfig,
    now: DateTime<Utc>,
) -> Result<PathwayActivation> {
    ensure_members_exist(registry, pathway)?;

    // Lookups below cannot fail after the check above.
    let mut fired_nodes = Vec::with_capacity(pathway.node_ids.len());
    for node_id in &pathway.node_ids {
        let node = registry
            .node_mut(node_id)
            .ok_or(NeuroError::NodeNotFound(*node_id))?;
        node.activation_level = clamp_unit(node.activation_level + config.activation_step);
        node.last_activated = monotonic(node.last_activated, now);
        fired_nodes.push(*node_id);
    }

    let mut strength_changes = Vec::new();
    for connection_id in &pathway.connection_ids {
        let conn = registry
            .connection_mut(connection_id)
            .ok_or(NeuroError::ConnectionNotFound(*connection_id))?;
        let old_strength = conn.strength;
        let new_strength = hebbian_update(old_strength, conn.weight, config.learning_rate);
        conn.strength = new_strength;
        conn.activation_count += 1;
        conn.last_fired = monotonic(conn.last_fired, now);
        if new_strength != old_strength {
            strength_changes.push(StrengthChange {
                connection_id: *connection_id,
                old_strength,
                new_strength,
            });
        }
    }

    pathway.last_activated = monotonic(pathway.last_activated, now);
    pathway.activation_frequency += 1;

    debug!(
        pathway = %pathway.id,
        fired = fired_nodes.len(),
        changed = strength_changes.len(),
        "pathway fired"
    );

    Ok(PathwayActivation {
        pathway_id: pathway.id,
        trigger_type,
        trigger_content: trigger_content.into(),
        fired_nodes,
        strength_changes,
        timestamp: now,
    })
}

/// Add `delta` to the strength of every connection in `pathway`.
///
/// Used for reinforcement from outside a firing, e.g. reported outcome
/// feedback. Activation counters are untouched. `delta` must lie in
/// [-1, 1]. Returns the connections whose strength actually changed.
pub fn adjust_strength<R: NeuralRegistry + ?Sized>(
    registry: &mut R,
    pathway: &Pathway,
    delta: f64,
) -> Result<Vec<StrengthChange>> {
    ensure_range("delta", delta, -1.0, 1.0)?;
    ensure_members_exist(registry, pathway)?;

    let mut changes = Vec::new();
    for connection_id in &pathway.connection_ids {
        let conn = registry
            .connection_mut(connection_id)
            .ok_or(NeuroError::ConnectionNotFound(*connection_id))?;
        let old_strength = conn.strength;
        conn.strength = clamp_unit(old_strength + delta);
        if conn.strength != old_strength {
            changes.push(StrengthChange {
                connection_id: *connection_id,
                old_strength,
                new_strength: conn.strength,
            });
        }
    }
    Ok(changes)
}

/// Check up front so a firing never half-applies.
fn ensure_members_exist<R: NeuralRegistry + ?Sized>(registry: &R, pathway: &Pathway) -> Result<()> {
    if let Some(missing) = pathway.node_ids.iter().find(|id| registry.node(id).is_none()) {
        return Err(NeuroError::NodeNotFound(*missing));
    }
    if let Some(missing) = pathway
        .connection_ids
        .iter()
        .find(|id| registry.connection(id).is_none())
    {
        return Err(NeuroError::ConnectionNotFound(*missing));
    }
    Ok(())
}
