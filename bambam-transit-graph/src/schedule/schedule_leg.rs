use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// two consecutive stops of a line, ordered by sequence index. the run
/// times of both stops are carried along for reporting, travel duration is
/// derived from the membership edges when the leg is written to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleLeg {
    pub line_id: i64,
    pub origin_stop_id: i64,
    pub destination_stop_id: i64,
    pub origin_run: NaiveTime,
    pub destination_run: NaiveTime,
}

impl Display for ScheduleLeg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: stop {} ({}) -> stop {} ({})",
            self.line_id,
            self.origin_stop_id,
            self.origin_run,
            self.destination_stop_id,
            self.destination_run
        )
    }
}
