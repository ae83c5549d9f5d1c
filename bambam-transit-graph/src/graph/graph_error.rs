use super::{EdgeId, EdgeKind, NodeId, NodeLabel};
use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("cannot create {kind} edge, no {label} node has id {id}")]
    MissingEndpoint {
        kind: EdgeKind,
        label: NodeLabel,
        id: i64,
    },
    #[error("cannot create LINEA_ID edge, stop {stop_id} has no STOP_IN edge from line {line_id}")]
    MissingMembership { line_id: i64, stop_id: i64 },
    #[error("negative travel time of {minutes} minutes from stop {origin_stop_id} ({origin_run}) to stop {destination_stop_id} ({destination_run}) on line {line_id}")]
    NegativeDuration {
        line_id: i64,
        origin_stop_id: i64,
        destination_stop_id: i64,
        origin_run: NaiveTime,
        destination_run: NaiveTime,
        minutes: i64,
    },
    #[error("stop id {0} matches {1} stop nodes")]
    AmbiguousStop(i64, usize),
    #[error("line id {0} matches {1} line nodes")]
    AmbiguousLine(i64, usize),
    #[error("{0} node with key '{1}' already exists")]
    DuplicateNodeKey(NodeLabel, String),
    #[error("cannot create {label} node '{key}', id {id} already belongs to node '{existing_key}'")]
    DuplicateNodeId {
        label: NodeLabel,
        id: i64,
        key: String,
        existing_key: String,
    },
    #[error("{0} edge {1} -> {2} already exists")]
    DuplicateEdge(EdgeKind, NodeId, NodeId),
    #[error("attempting to get node '{0}' not in graph")]
    GraphMissingNodeId(NodeId),
    #[error("attempting to get edge '{0}' not in graph")]
    GraphMissingEdgeId(EdgeId),
    #[error("invalid property '{0}': {1}")]
    InvalidProperty(String, String),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("{0}")]
    InternalError(String),
}
