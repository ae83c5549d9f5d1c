use chrono::Duration;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a leg whose destination run time
/// is earlier than its origin run time, which happens when a run crosses
/// midnight since run times carry no date.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MidnightCrossingPolicy {
    /// negative durations fail with a `NegativeDuration` error
    #[default]
    Reject,
    /// negative durations are moved forward by one day
    Wrap,
}

impl MidnightCrossingPolicy {
    /// whole minutes (truncated toward zero) of the elapsed time between two
    /// run times, with this policy applied when that minute count is
    /// negative. returns `None` when the elapsed time is rejected.
    pub fn apply(&self, elapsed: Duration) -> Option<i64> {
        let minutes = elapsed.num_minutes();
        if minutes >= 0 {
            return Some(minutes);
        }
        match self {
            MidnightCrossingPolicy::Reject => None,
            MidnightCrossingPolicy::Wrap => Some((elapsed + Duration::hours(24)).num_minutes()),
        }
    }
}
