//! Concrete implementation of the NeuralRegistry trait using petgraph.
//!
//! Nodes and connections live in a directed petgraph `Graph` with HashMap
//! indices for O(1) lookup by id. Nothing is ever removed, so petgraph's
//! dense indices stay valid and iteration follows creation order.

use neuropath_core::error::{NeuroError, Result};
use neuropath_core::registry::NeuralRegistry;
use neuropath_core::types::*;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

/// Petgraph-backed registry of nodes and connections.
#[derive(Debug, Clone, Default)]
pub struct PetRegistry {
    graph: DiGraph<NodeData, ConnectionData>,
    /// Map from our NodeId to petgraph's internal index.
    node_index: HashMap<NodeId, NodeIndex>,
    /// Map from our ConnectionId to petgraph's edge index.
    edge_index: HashMap<ConnectionId, EdgeIndex>,
    next_node: u64,
    next_connection: u64,
}

impl PetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn edges_directed(&self, node: &NodeId, dir: Direction) -> Vec<&ConnectionData> {
        let Some(&idx) = self.node_index.get(node) else {
            return Vec::new();
        };
        let mut edges: Vec<&ConnectionData> = self
            .graph
            .edges_directed(idx, dir)
            .map(|e| e.weight())
            .collect();
        // petgraph walks adjacency lists newest-first
        edges.sort_by_key(|c| c.id);
        edges
    }
}

impl NeuralRegistry for PetRegistry {
    fn next_node_id(&self) -> NodeId {
        NodeId(self.next_node)
    }

    fn next_connection_id(&self) -> ConnectionId {
        ConnectionId(self.next_connection)
    }

    fn insert_node(&mut self, data: NodeData) -> NodeId {
        let id = data.id;
        if let Some(&idx) = self.node_index.get(&id) {
            self.graph[idx] = data;
        } else {
            let idx = self.graph.add_node(data);
            self.node_index.insert(id, idx);
        }
        self.next_node = self.next_node.max(id.0 + 1);
        id
    }

    fn insert_connection(&mut self, data: ConnectionData) -> Result<ConnectionId> {
        let from_idx = *self
            .node_index
            .get(&data.source)
            .ok_or(NeuroError::NodeNotFound(data.source))?;
        let to_idx = *self
            .node_index
            .get(&data.target)
            .ok_or(NeuroError::NodeNotFound(data.target))?;

        let id = data.id;
        if let Some(&edge_idx) = self.edge_index.get(&id) {
            self.graph[edge_idx] = data;
        } else {
            // Parallel connections between the same pair are allowed.
            let edge_idx = self.graph.add_edge(from_idx, to_idx, data);
            self.edge_index.insert(id, edge_idx);
        }
        self.next_connection = self.next_connection.max(id.0 + 1);
        Ok(id)
    }

    fn node(&self, id: &NodeId) -> Option<&NodeData> {
        self.node_index.get(id).map(|idx| &self.graph[*idx])
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut NodeData> {
        self.node_index
            .get(id)
            .copied()
            .map(|idx| &mut self.graph[idx])
    }

    fn connection(&self, id: &ConnectionId) -> Option<&ConnectionData> {
        self.edge_index.get(id).map(|idx| &self.graph[*idx])
    }

    fn connection_mut(&mut self, id: &ConnectionId) -> Option<&mut ConnectionData> {
        self.edge_index
            .get(id)
            .copied()
            .map(|idx| &mut self.graph[idx])
    }

    fn nodes(&self) -> Vec<&NodeData> {
        self.graph.node_indices().map(|idx| &self.graph[idx]).collect()
    }

    fn connections(&self) -> Vec<&ConnectionData> {
        self.graph.edge_indices().map(|idx| &self.graph[idx]).collect()
    }

    fn outgoing(&self, node: &NodeId) -> Vec<&ConnectionData> {
        self.edges_directed(node, Direction::Outgoing)
    }

    fn incoming(&self, node: &NodeId) -> Vec<&ConnectionData> {
        self.edges_directed(node, Direction::Incoming)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }
}
