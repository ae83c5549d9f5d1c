use super::{ScheduleLeg, ScheduleRecord};
use itertools::Itertools;

/// all schedule records of a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSchedule {
    pub line_id: i64,
    pub records: Vec<ScheduleRecord>,
}

impl LineSchedule {
    pub fn new(line_id: i64) -> LineSchedule {
        LineSchedule {
            line_id,
            records: vec![],
        }
    }

    /// stable sort by sequence index, records sharing an index keep their input order.
    pub fn sort_by_sequence(&mut self) {
        self.records.sort_by_key(|r| r.sequence);
    }

    /// ids of the stops of this line, in their current order.
    pub fn stop_ids(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.stop_id).collect_vec()
    }

    /// pairs each record with its successor. when several runs of a line are
    /// interleaved, consecutive records may name the same stop; those pairs
    /// are dropped since a stop is never its own successor.
    pub fn legs(&self) -> Vec<ScheduleLeg> {
        self.records
            .iter()
            .tuple_windows()
            .filter_map(|(prev, cur)| {
                if prev.stop_id == cur.stop_id {
                    log::debug!(
                        "line {}: skipping repeated stop {} at sequence {}",
                        self.line_id,
                        cur.stop_id,
                        cur.sequence
                    );
                    return None;
                }
                Some(ScheduleLeg {
                    line_id: self.line_id,
                    origin_stop_id: prev.stop_id,
                    destination_stop_id: cur.stop_id,
                    origin_run: prev.run,
                    destination_run: cur.run,
                })
            })
            .collect_vec()
    }
}
