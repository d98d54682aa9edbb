//! Algorithm selectors and the uniform result handed to front ends.

use serde::Serialize;

use super::{Edge, GraphError, GraphResult};

/// The four algorithms the tool can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Kruskal's minimum spanning forest.
    Kruskal,
    /// Prim's minimum spanning tree from a root.
    Prim,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Kruskal, Self::Prim];

    /// Display name, as shown in the algorithm menu.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }

    /// Parse an algorithm from a name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bfs" | "breadth" => Some(Self::Bfs),
            "dfs" | "depth" => Some(Self::Dfs),
            "kruskal" => Some(Self::Kruskal),
            "prim" => Some(Self::Prim),
            _ => None,
        }
    }

    /// Parse an algorithm name, failing with [`GraphError::UnknownAlgorithm`].
    pub fn parse(name: &str) -> GraphResult<Self> {
        Self::from_name(name).ok_or_else(|| GraphError::UnknownAlgorithm(name.to_string()))
    }

    /// Whether this algorithm produces a visit order rather than an edge set.
    pub fn is_traversal(&self) -> bool {
        matches!(self, Self::Bfs | Self::Dfs)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What an algorithm produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Visit order of a traversal, every node exactly once.
    Order(Vec<String>),
    /// Selected edges of a spanning tree or forest.
    Edges(Vec<Edge>),
}

/// Result of one algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmResult {
    /// Which algorithm ran.
    pub algorithm: Algorithm,
    /// The start node the run used (ignored by Kruskal, still reported).
    pub start: String,
    /// Order or edge set.
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Sum of selected edge weights, for spanning results. `None` for
    /// traversals and for sums that do not fit in an `i64`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<i64>,
}

impl AlgorithmResult {
    /// Wrap a traversal order.
    pub fn traversal(algorithm: Algorithm, start: impl Into<String>, order: Vec<String>) -> Self {
        Self {
            algorithm,
            start: start.into(),
            outcome: Outcome::Order(order),
            total_weight: None,
        }
    }

    /// Wrap a spanning edge set.
    pub fn spanning(algorithm: Algorithm, start: impl Into<String>, edges: Vec<Edge>) -> Self {
        let total = edges
            .iter()
            .try_fold(0i64, |acc, e| acc.checked_add(e.weight));
        if total.is_none() {
            log::warn!("{} total weight overflows i64; omitting it", algorithm);
        }
        Self {
            algorithm,
            start: start.into(),
            outcome: Outcome::Edges(edges),
            total_weight: total,
        }
    }

    /// The visit order, if this is a traversal result.
    pub fn order(&self) -> Option<&[String]> {
        match &self.outcome {
            Outcome::Order(order) => Some(order),
            Outcome::Edges(_) => None,
        }
    }

    /// The selected edges, if this is a spanning result.
    pub fn edges(&self) -> Option<&[Edge]> {
        match &self.outcome {
            Outcome::Edges(edges) => Some(edges),
            Outcome::Order(_) => None,
        }
    }
}
