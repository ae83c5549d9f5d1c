use crate::{geometry::GeometryError, schedule::ScheduleError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("feature {feature} is missing property '{property}'")]
    MissingProperty { feature: String, property: String },
    #[error("feature {feature} has invalid property '{property}': {message}")]
    InvalidProperty {
        feature: String,
        property: String,
        message: String,
    },
    #[error("feature {feature} has invalid geometry: {source}")]
    Geometry {
        feature: String,
        source: GeometryError,
    },
    #[error("invalid schedule record: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("failure reading {0}: {1}")]
    ReadError(String, String),
    #[error("failure writing {0}: {1}")]
    WriteError(String, String),
}
