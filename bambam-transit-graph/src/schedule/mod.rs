mod line_schedule;
mod run_time;
mod schedule_error;
mod schedule_leg;
mod schedule_normalizer;
mod schedule_record;

pub use line_schedule::LineSchedule;
pub use run_time::parse_run_time;
pub use schedule_error::ScheduleError;
pub use schedule_leg::ScheduleLeg;
pub use schedule_normalizer::ScheduleNormalizer;
pub use schedule_record::ScheduleRecord;
