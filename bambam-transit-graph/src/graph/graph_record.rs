use super::{EdgeId, EdgeKind, NodeId, NodeLabel, Properties};

#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub node_id: NodeId,
    pub label: NodeLabel,
    /// natural key of the node, unique per label
    pub key: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub edge_id: EdgeId,
    pub kind: EdgeKind,
    pub src: NodeId,
    pub dst: NodeId,
    pub properties: Properties,
}
