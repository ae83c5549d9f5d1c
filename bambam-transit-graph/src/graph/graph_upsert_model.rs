use super::{
    attributes::{from_properties, into_properties},
    EdgeId, EdgeKind, GraphError, GraphStore, LineAttributes, MembershipAttributes,
    MidnightCrossingPolicy, NodeId, NodeLabel, SequenceAttributes, StopAttributes, UpsertOutcome,
};
use chrono::NaiveTime;
use serde::Serialize;

/// create-once write operations for the transit graph.
///
/// nodes are identified by their natural key (the stop or line name) and
/// are never modified after creation. schedule data references nodes by
/// their numeric id, which must resolve to exactly one node of the label.
/// edges are identified by their kind and node pair; repeating a write for
/// an existing pair keeps the attributes of the first write.
pub struct GraphUpsertModel<S: GraphStore> {
    store: S,
    midnight_crossing_policy: MidnightCrossingPolicy,
}

impl<S: GraphStore> GraphUpsertModel<S> {
    pub fn new(store: S, midnight_crossing_policy: MidnightCrossingPolicy) -> Self {
        Self {
            store,
            midnight_crossing_policy,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn upsert_stop(
        &mut self,
        key: &str,
        attributes: &StopAttributes,
    ) -> Result<UpsertOutcome<NodeId>, GraphError> {
        self.upsert_node(NodeLabel::Stop, key, attributes.id, attributes)
    }

    pub fn upsert_line(
        &mut self,
        key: &str,
        attributes: &LineAttributes,
    ) -> Result<UpsertOutcome<NodeId>, GraphError> {
        self.upsert_node(NodeLabel::Line, key, attributes.id, attributes)
    }

    /// links a line to a stop it serves. the pair is the identity of the
    /// edge, so later runs of the same line at the same stop leave the
    /// sequence and run of the first write in place.
    pub fn upsert_membership(
        &mut self,
        line_id: i64,
        stop_id: i64,
        sequence: i64,
        run: NaiveTime,
    ) -> Result<UpsertOutcome<EdgeId>, GraphError> {
        let line = self.resolve_node(NodeLabel::Line, line_id, EdgeKind::StopIn)?;
        let stop = self.resolve_node(NodeLabel::Stop, stop_id, EdgeKind::StopIn)?;
        if let Some(edge_id) = self.store.find_edge(EdgeKind::StopIn, line, stop) {
            log::debug!(
                "line {line_id} already serves stop {stop_id}, ignoring sequence {sequence} run {run}"
            );
            return Ok(UpsertOutcome::Existing(edge_id));
        }
        let properties = into_properties(&MembershipAttributes { sequence, run })?;
        let edge_id = self
            .store
            .create_edge(EdgeKind::StopIn, line, stop, properties)?;
        Ok(UpsertOutcome::Created(edge_id))
    }

    /// links two consecutive stops of a line with the travel time between
    /// them, taken from the run times of their memberships in that line.
    pub fn upsert_sequence_edge(
        &mut self,
        origin_stop_id: i64,
        destination_stop_id: i64,
        line_id: i64,
    ) -> Result<UpsertOutcome<EdgeId>, GraphError> {
        let line = self.resolve_node(NodeLabel::Line, line_id, EdgeKind::LineaId)?;
        let origin = self.resolve_node(NodeLabel::Stop, origin_stop_id, EdgeKind::LineaId)?;
        let destination =
            self.resolve_node(NodeLabel::Stop, destination_stop_id, EdgeKind::LineaId)?;

        if let Some(edge_id) = self.store.find_edge(EdgeKind::LineaId, origin, destination) {
            log::debug!(
                "LINEA_ID edge {origin_stop_id} -> {destination_stop_id} already exists, ignoring line {line_id}"
            );
            return Ok(UpsertOutcome::Existing(edge_id));
        }

        let origin_run = self.membership_run(line, origin, line_id, origin_stop_id)?;
        let destination_run =
            self.membership_run(line, destination, line_id, destination_stop_id)?;
        let elapsed = destination_run - origin_run;
        let duration = self
            .midnight_crossing_policy
            .apply(elapsed)
            .ok_or(GraphError::NegativeDuration {
                line_id,
                origin_stop_id,
                destination_stop_id,
                origin_run,
                destination_run,
                minutes: elapsed.num_minutes(),
            })?;

        let attributes = SequenceAttributes {
            duration,
            line_id,
        };
        let edge_id = self.store.create_edge(
            EdgeKind::LineaId,
            origin,
            destination,
            into_properties(&attributes)?,
        )?;
        Ok(UpsertOutcome::Created(edge_id))
    }

    fn upsert_node<T: Serialize>(
        &mut self,
        label: NodeLabel,
        key: &str,
        id: i64,
        attributes: &T,
    ) -> Result<UpsertOutcome<NodeId>, GraphError> {
        if let Some(node_id) = self.store.find_node(label, key) {
            log::debug!("{label} '{key}' already exists as node {node_id}, keeping first write");
            return Ok(UpsertOutcome::Existing(node_id));
        }
        if let Some(existing) = self.store.find_nodes_by_id(label, id).first() {
            let existing_key = self
                .store
                .node(*existing)
                .map(|n| n.key.clone())
                .ok_or(GraphError::GraphMissingNodeId(*existing))?;
            return Err(GraphError::DuplicateNodeId {
                label,
                id,
                key: key.to_string(),
                existing_key,
            });
        }
        let properties = into_properties(attributes)?;
        let node_id = self.store.create_node(label, key, properties)?;
        Ok(UpsertOutcome::Created(node_id))
    }

    fn resolve_node(&self, label: NodeLabel, id: i64, kind: EdgeKind) -> Result<NodeId, GraphError> {
        match self.store.find_nodes_by_id(label, id).as_slice() {
            [] => Err(GraphError::MissingEndpoint { kind, label, id }),
            [node_id] => Ok(*node_id),
            matches => match label {
                NodeLabel::Stop => Err(GraphError::AmbiguousStop(id, matches.len())),
                NodeLabel::Line => Err(GraphError::AmbiguousLine(id, matches.len())),
            },
        }
    }

    fn membership_run(
        &self,
        line: NodeId,
        stop: NodeId,
        line_id: i64,
        stop_id: i64,
    ) -> Result<NaiveTime, GraphError> {
        let edge_id = self
            .store
            .find_edge(EdgeKind::StopIn, line, stop)
            .ok_or(GraphError::MissingMembership { line_id, stop_id })?;
        let edge = self
            .store
            .edge(edge_id)
            .ok_or(GraphError::GraphMissingEdgeId(edge_id))?;
        let membership: MembershipAttributes = from_properties(&edge.properties)?;
        Ok(membership.run)
    }
}
