//! Algorithm dispatcher: maps a selector and start node to an engine call.

use log::debug;

use crate::graph::{bfs, dfs, kruskal, prim, GraphStore};
use crate::types::{Algorithm, AlgorithmResult, GraphError, GraphResult};

/// Runs the four algorithms against a graph and wraps their output uniformly.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dispatcher;

impl Dispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Pick the start node for a run.
    ///
    /// A blank or missing start falls back to the smallest node name. Fails
    /// with [`GraphError::NoStartNode`] when there is nothing to fall back to.
    pub fn resolve_start<'a>(
        &self,
        graph: &'a GraphStore,
        start: Option<&'a str>,
    ) -> GraphResult<&'a str> {
        match start.map(str::trim).filter(|s| !s.is_empty()) {
            Some(start) => Ok(start),
            None => graph.default_start().ok_or(GraphError::NoStartNode),
        }
    }

    /// Run `algorithm` from `start`.
    ///
    /// Kruskal ignores the start node but the resolved value is still
    /// reported in the result.
    pub fn run(
        &self,
        graph: &GraphStore,
        algorithm: Algorithm,
        start: Option<&str>,
    ) -> GraphResult<AlgorithmResult> {
        let start = self.resolve_start(graph, start)?;
        debug!(
            "running {} from {} on {} nodes / {} edges",
            algorithm,
            start,
            graph.node_count(),
            graph.edge_count()
        );

        let result = match algorithm {
            Algorithm::Bfs => AlgorithmResult::traversal(algorithm, start, bfs(graph, start)),
            Algorithm::Dfs => AlgorithmResult::traversal(algorithm, start, dfs(graph, start)),
            Algorithm::Kruskal => AlgorithmResult::spanning(algorithm, start, kruskal(graph)),
            Algorithm::Prim => AlgorithmResult::spanning(algorithm, start, prim(graph, start)),
        };
        Ok(result)
    }
}
