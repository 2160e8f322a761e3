//! Registry: storage and identity for nodes and connections.
//!
//! The registry owns every node and connection of one network. Pathways,
//! activation records and snapshots refer to its elements by id only.

use crate::error::Result;
use crate::lexicon::ContentTag;
use crate::types::*;
use std::collections::HashSet;

/// Node and connection storage used by the engines.
///
/// This is a trait rather than a concrete type so that different
/// deployments can back it with different graph structures.
pub trait NeuralRegistry {
    /// Id the next inserted node will receive.
    fn next_node_id(&self) -> NodeId;

    /// Id the next inserted connection will receive.
    fn next_connection_id(&self) -> ConnectionId;

    /// Store a node and return its id.
    fn insert_node(&mut self, data: NodeData) -> NodeId;

    /// Store a connection. Fails with `NodeNotFound` if either endpoint is
    /// not registered.
    fn insert_connection(&mut self, data: ConnectionData) -> Result<ConnectionId>;

    fn node(&self, id: &NodeId) -> Option<&NodeData>;

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut NodeData>;

    fn connection(&self, id: &ConnectionId) -> Option<&ConnectionData>;

    fn connection_mut(&mut self, id: &ConnectionId) -> Option<&mut ConnectionData>;

    /// All nodes in creation order.
    fn nodes(&self) -> Vec<&NodeData>;

    /// All connections in creation order.
    fn connections(&self) -> Vec<&ConnectionData>;

    /// Connections leaving `node`.
    fn outgoing(&self, node: &NodeId) -> Vec<&ConnectionData>;

    /// Connections arriving at `node`.
    fn incoming(&self, node: &NodeId) -> Vec<&ConnectionData>;

    fn node_count(&self) -> usize;

    fn connection_count(&self) -> usize;

    /// Find nodes whose label contains `query` (case-insensitive).
    fn find_nodes_by_label(&self, query: &str) -> Vec<NodeId> {
        let query = query.to_lowercase();
        self.nodes()
            .into_iter()
            .filter(|n| n.label.to_lowercase().contains(&query))
            .map(|n| n.id)
            .collect()
    }

    /// Nodes carrying `tag`.
    fn nodes_with_tag(&self, tag: ContentTag) -> Vec<NodeId> {
        self.nodes()
            .into_iter()
            .filter(|n| n.tag == tag)
            .map(|n| n.id)
            .collect()
    }

    /// Connections whose source and target are both in `members`, in
    /// creation order.
    fn induced_connections(&self, members: &[NodeId]) -> Vec<ConnectionId> {
        let set: HashSet<&NodeId> = members.iter().collect();
        self.connections()
            .into_iter()
            .filter(|c| set.contains(&c.source) && set.contains(&c.target))
            .map(|c| c.id)
            .collect()
    }
}
