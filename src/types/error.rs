//! Error types for the graph-tutor library.

use thiserror::Error;

/// All errors that can occur in the graph-tutor library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Source or destination of an edge is blank.
    #[error("Source and destination cannot be empty")]
    EmptyEndpoint,

    /// Weight text is present but is not an integer.
    #[error("Weight must be an integer, got {0:?}")]
    InvalidWeight(String),

    /// An algorithm run was requested on an empty graph without a start node.
    #[error("No graph defined or no start node selected")]
    NoStartNode,

    /// Algorithm name not recognised.
    #[error("Unknown algorithm: {0} (expected bfs, dfs, kruskal or prim)")]
    UnknownAlgorithm(String),

    /// Output format name not recognised.
    #[error("Unknown output format: {0} (expected text or json)")]
    UnknownFormat(String),

    /// Compact edge spec did not have the shape `u,v[,w]`.
    #[error("Invalid edge spec {0:?} (expected u,v or u,v,w)")]
    InvalidEdgeSpec(String),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Whether this error came from user input (edge fields, names, specs).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyEndpoint
                | Self::InvalidWeight(_)
                | Self::UnknownAlgorithm(_)
                | Self::UnknownFormat(_)
                | Self::InvalidEdgeSpec(_)
        )
    }
}

/// Convenience result type for graph-tutor operations.
pub type GraphResult<T> = Result<T, GraphError>;
