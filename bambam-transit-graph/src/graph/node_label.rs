use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// node labels of the transit graph. the label names match the ones used
/// by the survey database (`Fermata` for stops, `Linea` for lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeLabel {
    #[serde(rename = "Fermata")]
    Stop,
    #[serde(rename = "Linea")]
    Line,
}

impl NodeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLabel::Stop => "Fermata",
            NodeLabel::Line => "Linea",
        }
    }
}

impl Display for NodeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
