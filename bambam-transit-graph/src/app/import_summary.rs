use crate::graph::UpsertOutcome;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// counts of created and already existing graph elements per import pass.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub stops_created: usize,
    pub stops_existing: usize,
    pub lines_created: usize,
    pub lines_existing: usize,
    pub memberships_created: usize,
    pub memberships_existing: usize,
    pub sequence_edges_created: usize,
    pub sequence_edges_existing: usize,
    pub records_skipped: usize,
}

impl ImportSummary {
    pub fn add_stop<T: Copy>(&mut self, outcome: &UpsertOutcome<T>) {
        increment(outcome, &mut self.stops_created, &mut self.stops_existing);
    }

    pub fn add_line<T: Copy>(&mut self, outcome: &UpsertOutcome<T>) {
        increment(outcome, &mut self.lines_created, &mut self.lines_existing);
    }

    pub fn add_membership<T: Copy>(&mut self, outcome: &UpsertOutcome<T>) {
        increment(
            outcome,
            &mut self.memberships_created,
            &mut self.memberships_existing,
        );
    }

    pub fn add_sequence_edge<T: Copy>(&mut self, outcome: &UpsertOutcome<T>) {
        increment(
            outcome,
            &mut self.sequence_edges_created,
            &mut self.sequence_edges_existing,
        );
    }
}

fn increment<T: Copy>(outcome: &UpsertOutcome<T>, created: &mut usize, existing: &mut usize) {
    if outcome.is_created() {
        *created += 1;
    } else {
        *existing += 1;
    }
}

impl Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "stops: {} created, {} existing",
            self.stops_created, self.stops_existing
        )?;
        writeln!(
            f,
            "lines: {} created, {} existing",
            self.lines_created, self.lines_existing
        )?;
        writeln!(
            f,
            "STOP_IN edges: {} created, {} existing",
            self.memberships_created, self.memberships_existing
        )?;
        writeln!(
            f,
            "LINEA_ID edges: {} created, {} existing",
            self.sequence_edges_created, self.sequence_edges_existing
        )?;
        write!(f, "skipped records: {}", self.records_skipped)
    }
}
