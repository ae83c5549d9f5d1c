#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("run time '{0}' is not a local clock time, expected HH:MM or HH:MM:SS")]
    InvalidRunTime(String),
}
