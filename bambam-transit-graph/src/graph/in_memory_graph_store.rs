use super::{
    fieldname, EdgeId, EdgeKind, EdgeRecord, GraphError, GraphStore, NodeId, NodeLabel,
    NodeRecord, Properties,
};
use std::collections::HashMap;

/// a [`GraphStore`] held in memory, with lookup indices on natural keys,
/// numeric ids and node pairs.
#[derive(Default, Debug, Clone)]
pub struct InMemoryGraphStore {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    keys: HashMap<(NodeLabel, String), NodeId>,
    ids: HashMap<(NodeLabel, i64), Vec<NodeId>>,
    adjacency: HashMap<(EdgeKind, NodeId, NodeId), EdgeId>,
}

impl InMemoryGraphStore {
    pub fn new() -> InMemoryGraphStore {
        InMemoryGraphStore::default()
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// nodes of a label in creation order.
    pub fn nodes_with_label(&self, label: NodeLabel) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.iter().filter(move |n| n.label == label)
    }

    /// edges of a kind in creation order.
    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &EdgeRecord> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }
}

impl GraphStore for InMemoryGraphStore {
    fn find_node(&self, label: NodeLabel, key: &str) -> Option<NodeId> {
        self.keys.get(&(label, key.to_string())).copied()
    }

    fn find_nodes_by_id(&self, label: NodeLabel, id: i64) -> Vec<NodeId> {
        self.ids.get(&(label, id)).cloned().unwrap_or_default()
    }

    fn create_node(
        &mut self,
        label: NodeLabel,
        key: &str,
        properties: Properties,
    ) -> Result<NodeId, GraphError> {
        let index_key = (label, key.to_string());
        if self.keys.contains_key(&index_key) {
            return Err(GraphError::DuplicateNodeKey(label, key.to_string()));
        }
        let node_id = NodeId(self.nodes.len());
        if let Some(id) = properties.get(fieldname::ID).and_then(|v| v.as_i64()) {
            self.ids.entry((label, id)).or_default().push(node_id);
        }
        self.keys.insert(index_key, node_id);
        self.nodes.push(NodeRecord {
            node_id,
            label,
            key: key.to_string(),
            properties,
        });
        Ok(node_id)
    }

    fn find_edge(&self, kind: EdgeKind, src: NodeId, dst: NodeId) -> Option<EdgeId> {
        self.adjacency.get(&(kind, src, dst)).copied()
    }

    fn create_edge(
        &mut self,
        kind: EdgeKind,
        src: NodeId,
        dst: NodeId,
        properties: Properties,
    ) -> Result<EdgeId, GraphError> {
        for node_id in [src, dst] {
            if self.node(node_id).is_none() {
                return Err(GraphError::GraphMissingNodeId(node_id));
            }
        }
        if self.adjacency.contains_key(&(kind, src, dst)) {
            return Err(GraphError::DuplicateEdge(kind, src, dst));
        }
        let edge_id = EdgeId(self.edges.len());
        self.adjacency.insert((kind, src, dst), edge_id);
        self.edges.push(EdgeRecord {
            edge_id,
            kind,
            src,
            dst,
            properties,
        });
        Ok(edge_id)
    }

    fn node(&self, node_id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(node_id.0)
    }

    fn edge(&self, edge_id: EdgeId) -> Option<&EdgeRecord> {
        self.edges.get(edge_id.0)
    }
}
