//! Core graph structure: named nodes with insertion-ordered adjacency lists.

use std::collections::HashMap;

use log::debug;

use crate::types::{AdjacencyEntry, Edge, GraphError, GraphResult, DEFAULT_WEIGHT};

/// Undirected weighted graph built up one edge at a time.
///
/// Nodes are kept in first-appearance order and each adjacency list in edge
/// insertion order. Both orders are observable through the algorithms.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node names, in first-appearance order.
    nodes: Vec<String>,
    /// Node name -> position in `nodes`.
    index: HashMap<String, usize>,
    /// Per-node adjacency lists, parallel to `nodes`.
    adjacency: Vec<Vec<AdjacencyEntry>>,
    /// Every inserted edge, in insertion order.
    edges: Vec<Edge>,
}

impl GraphStore {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of inserted edges (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `name` is a node of the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All node names, in first-appearance order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// All node names in ascending order.
    pub fn sorted_nodes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The smallest node name, offered as the default start node.
    pub fn default_start(&self) -> Option<&str> {
        self.nodes.iter().map(String::as_str).min()
    }

    /// All inserted edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Position of a node, if it exists.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of the node at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid node index.
    pub fn name(&self, idx: usize) -> &str {
        &self.nodes[idx]
    }

    /// Adjacency list of the node at `idx`.
    pub fn adjacency(&self, idx: usize) -> &[AdjacencyEntry] {
        self.adjacency.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbors of `name` with edge weights, in insertion order.
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, i64)> {
        match self.index_of(name) {
            Some(idx) => self
                .adjacency(idx)
                .iter()
                .map(|entry| (self.name(entry.neighbor), entry.weight))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Add an undirected edge between `source` and `target`.
    ///
    /// A missing weight defaults to 1. Both endpoints are created if they
    /// are new. Blank endpoints are rejected without touching the graph.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: Option<i64>) -> GraphResult<()> {
        if source.trim().is_empty() || target.trim().is_empty() {
            return Err(GraphError::EmptyEndpoint);
        }
        let weight = weight.unwrap_or(DEFAULT_WEIGHT);

        let u = self.intern(source);
        let v = self.intern(target);
        let edge_id = self.edges.len();

        self.adjacency[u].push(AdjacencyEntry {
            neighbor: v,
            weight,
            edge_id,
        });
        self.adjacency[v].push(AdjacencyEntry {
            neighbor: u,
            weight,
            edge_id,
        });
        self.edges.push(Edge::new(source, target, weight));

        debug!("added edge {} --({})-- {}", source, weight, target);
        Ok(())
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        debug!(
            "clearing graph ({} nodes, {} edges)",
            self.nodes.len(),
            self.edges.len()
        );
        self.nodes.clear();
        self.index.clear();
        self.adjacency.clear();
        self.edges.clear();
    }

    /// Look up a node, creating it if needed.
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }
}
