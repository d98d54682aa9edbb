//! Parsing raw edge input (source, destination and weight text fields).

use crate::graph::GraphStore;
use crate::types::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// A validated edge ready to be added to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRequest {
    /// Source node name.
    pub source: String,
    /// Destination node name.
    pub target: String,
    /// Integer weight.
    pub weight: i64,
}

impl EdgeRequest {
    /// Apply this edge to `graph`.
    pub fn apply(&self, graph: &mut GraphStore) -> GraphResult<()> {
        graph.add_edge(&self.source, &self.target, Some(self.weight))
    }
}

/// Parse three text fields into an edge.
///
/// Fields are trimmed. A blank weight means [`DEFAULT_WEIGHT`].
pub fn parse_edge(source: &str, target: &str, weight: &str) -> GraphResult<EdgeRequest> {
    let source = source.trim();
    let target = target.trim();
    if source.is_empty() || target.is_empty() {
        return Err(GraphError::EmptyEndpoint);
    }

    Ok(EdgeRequest {
        source: source.to_string(),
        target: target.to_string(),
        weight: parse_weight(weight)?,
    })
}

/// Parse a weight field. Blank means [`DEFAULT_WEIGHT`].
pub fn parse_weight(text: &str) -> GraphResult<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(DEFAULT_WEIGHT);
    }
    text.parse::<i64>()
        .map_err(|_| GraphError::InvalidWeight(text.to_string()))
}

/// Parse the compact `u,v` or `u,v,w` form used on the command line.
pub fn parse_edge_spec(spec: &str) -> GraphResult<EdgeRequest> {
    let parts: Vec<&str> = spec.split(',').collect();
    match parts.as_slice() {
        [source, target] => parse_edge(source, target, ""),
        [source, target, weight] => parse_edge(source, target, weight),
        _ => Err(GraphError::InvalidEdgeSpec(spec.to_string())),
    }
}

/// Parse whitespace-separated `u v` or `u v w`, as typed in the REPL.
pub fn parse_edge_words(line: &str) -> GraphResult<EdgeRequest> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] | [_] => Err(GraphError::EmptyEndpoint),
        [source, target] => parse_edge(source, target, ""),
        [source, target, weight] => parse_edge(source, target, weight),
        _ => Err(GraphError::InvalidEdgeSpec(line.trim().to_string())),
    }
}
