//! Fluent API for building GraphStore instances.

use crate::types::GraphResult;

use super::GraphStore;

/// Fluent builder for constructing a GraphStore.
///
/// Edges are applied in the order given, so the built graph has the same
/// adjacency order as entering them one by one.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: Vec<(String, String, Option<i64>)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weighted edge.
    pub fn edge(mut self, source: &str, target: &str, weight: i64) -> Self {
        self.edges
            .push((source.to_string(), target.to_string(), Some(weight)));
        self
    }

    /// Add an edge with the default weight.
    pub fn link(mut self, source: &str, target: &str) -> Self {
        self.edges.push((source.to_string(), target.to_string(), None));
        self
    }

    /// Add several weighted edges.
    pub fn edges<'a, I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, i64)>,
    {
        for (source, target, weight) in edges {
            self = self.edge(source, target, weight);
        }
        self
    }

    /// Build the final GraphStore.
    pub fn build(self) -> GraphResult<GraphStore> {
        let mut graph = GraphStore::new();
        for (source, target, weight) in self.edges {
            graph.add_edge(&source, &target, weight)?;
        }
        Ok(graph)
    }
}
