//! Weighted undirected edges and adjacency entries.

use serde::Serialize;

/// An undirected weighted edge between two named nodes.
///
/// The pair is unordered for graph semantics; `source` and `target` only
/// record the orientation in which an algorithm reported the edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// First endpoint.
    pub source: String,
    /// Second endpoint.
    pub target: String,
    /// Integer weight.
    pub weight: i64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: i64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// The endpoints ordered ascending, for orientation-independent comparison.
    pub fn unordered_pair(&self) -> (&str, &str) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }

    /// Whether this edge connects `a` and `b` in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.weight)
    }
}

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEntry {
    /// Index of the neighboring node in the store.
    pub neighbor: usize,
    /// Weight of the connecting edge.
    pub weight: i64,
    /// Index of the inserted edge this entry belongs to.
    pub edge_id: usize,
}
