mod attributes;
mod edge_kind;
mod graph_error;
mod graph_ids;
mod graph_record;
mod graph_store;
mod graph_upsert_model;
mod graph_writer;
mod in_memory_graph_store;
mod midnight_crossing_policy;
mod node_label;
mod upsert_outcome;

pub use attributes::{
    fieldname, from_properties, into_properties, LineAttributes, MembershipAttributes, Properties,
    SequenceAttributes, StopAttributes,
};
pub use edge_kind::EdgeKind;
pub use graph_error::GraphError;
pub use graph_ids::{EdgeId, NodeId};
pub use graph_record::{EdgeRecord, NodeRecord};
pub use graph_store::GraphStore;
pub use graph_upsert_model::GraphUpsertModel;
pub use graph_writer::{filenames, GraphWriter};
pub use in_memory_graph_store::InMemoryGraphStore;
pub use midnight_crossing_policy::MidnightCrossingPolicy;
pub use node_label::NodeLabel;
pub use upsert_outcome::UpsertOutcome;
