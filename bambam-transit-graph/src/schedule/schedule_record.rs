use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// the scheduled passage of a line at a stop during one run. records are
/// unordered; `sequence` places the stop within the line and `run` is the
/// local clock time of this passage, which is only meaningful within its run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub line_id: i64,
    pub stop_id: i64,
    pub sequence: i64,
    pub run: NaiveTime,
}

impl ScheduleRecord {
    pub fn new(line_id: i64, stop_id: i64, sequence: i64, run: NaiveTime) -> ScheduleRecord {
        ScheduleRecord {
            line_id,
            stop_id,
            sequence,
            run,
        }
    }
}
