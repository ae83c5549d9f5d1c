use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// relationship types of the transit graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeKind {
    /// line -> stop, the line serves the stop at some sequence index and run time
    #[serde(rename = "STOP_IN")]
    StopIn,
    /// stop -> stop, consecutive stops of a line with the travel duration between them
    #[serde(rename = "LINEA_ID")]
    LineaId,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::StopIn => "STOP_IN",
            EdgeKind::LineaId => "LINEA_ID",
        }
    }
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
