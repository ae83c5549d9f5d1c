use super::{EdgeId, EdgeKind, EdgeRecord, GraphError, NodeId, NodeLabel, NodeRecord, Properties};

/// storage adapter for the transit property graph. every call is expected
/// to be atomic on its own; no transaction spans multiple calls.
///
/// implementations must reject the creation of a node whose natural key is
/// already present for its label and of an edge already present between
/// the same pair of nodes for its kind.
pub trait GraphStore {
    /// finds a node by its natural key.
    fn find_node(&self, label: NodeLabel, key: &str) -> Option<NodeId>;

    /// finds all nodes of a label whose numeric `id` property matches.
    fn find_nodes_by_id(&self, label: NodeLabel, id: i64) -> Vec<NodeId>;

    fn create_node(
        &mut self,
        label: NodeLabel,
        key: &str,
        properties: Properties,
    ) -> Result<NodeId, GraphError>;

    fn find_edge(&self, kind: EdgeKind, src: NodeId, dst: NodeId) -> Option<EdgeId>;

    fn create_edge(
        &mut self,
        kind: EdgeKind,
        src: NodeId,
        dst: NodeId,
        properties: Properties,
    ) -> Result<EdgeId, GraphError>;

    fn node(&self, node_id: NodeId) -> Option<&NodeRecord>;

    fn edge(&self, edge_id: EdgeId) -> Option<&EdgeRecord>;
}
