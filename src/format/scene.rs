//! Highlight data for an external graph visualizer.
//!
//! A scene lists every node and every distinct node pair, marking what a
//! result touched: visited nodes carry their 1-based visit number, and
//! spanning results mark their edges and ask for weight labels. Positions
//! and colors are left to the visualizer.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::graph::GraphStore;
use crate::types::{AlgorithmResult, Outcome};

/// A node as the visualizer should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneNode {
    /// Node name.
    pub id: String,
    /// Display label; `"{id}\n#{n}"` for visited nodes.
    pub label: String,
    /// Whether the node is highlighted.
    pub highlighted: bool,
    /// 1-based visit number for traversal results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<usize>,
}

/// One drawn edge per distinct unordered node pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneEdge {
    /// First endpoint, as first inserted.
    pub source: String,
    /// Second endpoint, as first inserted.
    pub target: String,
    /// Weight of the most recently inserted edge between the pair.
    pub weight: i64,
    /// Whether the edge is part of a spanning result.
    pub highlighted: bool,
}

/// Everything a visualizer needs to draw the graph and a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    /// Nodes in ascending name order.
    pub nodes: Vec<SceneNode>,
    /// Edges in first-insertion order of their pair.
    pub edges: Vec<SceneEdge>,
    /// Whether edge weights should be labelled.
    pub show_weights: bool,
}

impl Scene {
    /// The graph with nothing highlighted.
    pub fn plain(graph: &GraphStore) -> Self {
        Self {
            nodes: graph
                .sorted_nodes()
                .into_iter()
                .map(|id| SceneNode {
                    id: id.to_string(),
                    label: id.to_string(),
                    highlighted: false,
                    sequence: None,
                })
                .collect(),
            edges: collapse_edges(graph),
            show_weights: false,
        }
    }

    /// The graph with `result` highlighted.
    pub fn for_result(graph: &GraphStore, result: &AlgorithmResult) -> Self {
        let mut scene = Self::plain(graph);
        match &result.outcome {
            Outcome::Order(order) => {
                let sequence: HashMap<&str, usize> = order
                    .iter()
                    .enumerate()
                    .map(|(i, id)| (id.as_str(), i + 1))
                    .collect();
                for node in &mut scene.nodes {
                    if let Some(&n) = sequence.get(node.id.as_str()) {
                        node.highlighted = true;
                        node.sequence = Some(n);
                        node.label = format!("{}\n#{}", node.id, n);
                    }
                }
            }
            Outcome::Edges(edges) => {
                let selected: HashSet<(&str, &str)> =
                    edges.iter().map(|e| e.unordered_pair()).collect();
                for edge in &mut scene.edges {
                    edge.highlighted = selected.contains(&ordered(&edge.source, &edge.target));
                }
                scene.show_weights = true;
            }
        }
        scene
    }

    /// Highlighted nodes in visit order.
    pub fn highlighted_nodes(&self) -> Vec<&SceneNode> {
        let mut nodes: Vec<&SceneNode> = self.nodes.iter().filter(|n| n.highlighted).collect();
        nodes.sort_by_key(|n| n.sequence);
        nodes
    }

    /// Highlighted edges.
    pub fn highlighted_edges(&self) -> Vec<&SceneEdge> {
        self.edges.iter().filter(|e| e.highlighted).collect()
    }
}

/// One edge per unordered pair; later parallel edges overwrite the weight.
fn collapse_edges(graph: &GraphStore) -> Vec<SceneEdge> {
    let mut positions: HashMap<(&str, &str), usize> = HashMap::new();
    let mut edges: Vec<SceneEdge> = Vec::new();

    for edge in graph.edges() {
        let key = edge.unordered_pair();
        match positions.get(&key) {
            Some(&pos) => edges[pos].weight = edge.weight,
            None => {
                positions.insert(key, edges.len());
                edges.push(SceneEdge {
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    weight: edge.weight,
                    highlighted: false,
                });
            }
        }
    }
    edges
}

fn ordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
