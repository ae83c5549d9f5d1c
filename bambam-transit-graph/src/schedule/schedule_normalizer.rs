use super::{LineSchedule, ScheduleLeg, ScheduleRecord};
use indexmap::IndexMap;
use itertools::Itertools;
use rayon::prelude::*;

/// orders unordered schedule records into per-line stop sequences and
/// derives the legs between consecutive stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleNormalizer {
    /// sort line groups on the rayon thread pool. groups share no state, so
    /// the result is identical to the sequential ordering.
    pub parallelize: bool,
}

impl ScheduleNormalizer {
    pub fn new(parallelize: bool) -> ScheduleNormalizer {
        ScheduleNormalizer { parallelize }
    }

    /// groups records by line id, in order of first appearance, and sorts
    /// each group by sequence index.
    pub fn lines(&self, records: &[ScheduleRecord]) -> Vec<LineSchedule> {
        let mut groups: IndexMap<i64, LineSchedule> = IndexMap::new();
        for record in records.iter() {
            groups
                .entry(record.line_id)
                .or_insert_with(|| LineSchedule::new(record.line_id))
                .records
                .push(record.clone());
        }
        let mut lines = groups.into_values().collect_vec();
        if self.parallelize {
            lines.par_iter_mut().for_each(LineSchedule::sort_by_sequence);
        } else {
            lines.iter_mut().for_each(LineSchedule::sort_by_sequence);
        }
        lines
    }

    /// the legs of every line, grouped by line and ordered by sequence
    /// within each line. lines with fewer than two records produce no legs.
    pub fn legs(&self, records: &[ScheduleRecord]) -> Vec<ScheduleLeg> {
        let lines = self.lines(records);
        let legs = lines.iter().flat_map(LineSchedule::legs).collect_vec();
        log::debug!(
            "derived {} legs from {} schedule records on {} lines",
            legs.len(),
            records.len(),
            lines.len()
        );
        legs
    }
}
