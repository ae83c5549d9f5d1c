use crate::{geometry::GeometryError, graph::GraphError, input::InputError};

#[derive(thiserror::Error, Debug)]
pub enum TransitGraphAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading survey data: {source}")]
    InputError {
        #[from]
        source: InputError,
    },
    #[error("failure building transit graph: {source}")]
    GraphError {
        #[from]
        source: GraphError,
    },
    #[error("failure encoding geometry: {source}")]
    GeometryError {
        #[from]
        source: GeometryError,
    },
    #[error("failure accessing file system: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
