//! Output rendering: plain text, JSON and visualizer scenes.

pub mod scene;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

pub use scene::{Scene, SceneEdge, SceneNode};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON documents.
    Json,
}

impl OutputFormat {
    /// Parse a format name.
    pub fn from_name(name: &str) -> GraphResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(GraphError::UnknownFormat(name.to_string())),
        }
    }
}

/// Serialize `value` as JSON, pretty-printed if asked.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> GraphResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
