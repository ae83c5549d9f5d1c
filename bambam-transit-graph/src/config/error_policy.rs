use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a survey record
/// that cannot be written to the graph
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// abort the import on the first failing record
    #[default]
    Fail,
    /// log the failure, count it in the summary and continue
    Skip,
}
