use super::ScheduleError;
use chrono::NaiveTime;

const RUN_TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M", "%H:%M:%S%.f"];

/// parses the scheduled passage time of a run at a stop. runs carry a local
/// clock time with no date, written as `HH:MM` or `HH:MM:SS`.
pub fn parse_run_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    let trimmed = value.trim();
    RUN_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ScheduleError::InvalidRunTime(value.to_string()))
}
