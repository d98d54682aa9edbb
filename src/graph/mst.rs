//! Minimum spanning tree algorithms (Kruskal, Prim).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace, warn};

use crate::index::UnionFind;
use crate::types::Edge;

use super::GraphStore;

/// Kruskal's minimum spanning forest over the whole graph.
///
/// Candidate edges are collected once each by walking nodes in
/// first-appearance order and their adjacency lists in insertion order, then
/// stably sorted by weight, so equal weights keep collection order.
pub fn kruskal(graph: &GraphStore) -> Vec<Edge> {
    let candidates = collect_edges(graph);
    let mut sets = UnionFind::new(graph.node_count());
    let mut forest: Vec<Edge> = Vec::new();

    for (u, v, weight) in candidates {
        if sets.union(u, v) {
            trace!("Kruskal take {} --({})-- {}", graph.name(u), weight, graph.name(v));
            forest.push(Edge::new(graph.name(u), graph.name(v), weight));
        } else {
            trace!("Kruskal skip {} --({})-- {}", graph.name(u), weight, graph.name(v));
        }
    }

    debug!(
        "Kruskal: {} of {} edges selected",
        forest.len(),
        graph.edge_count()
    );
    forest
}

/// Every inserted edge once, as `(walking node, neighbor, weight)`, sorted by weight.
fn collect_edges(graph: &GraphStore) -> Vec<(usize, usize, i64)> {
    let mut seen = vec![false; graph.edge_count()];
    let mut candidates = Vec::with_capacity(graph.edge_count());

    for u in 0..graph.node_count() {
        for entry in graph.adjacency(u) {
            if seen[entry.edge_id] {
                continue;
            }
            seen[entry.edge_id] = true;
            candidates.push((u, entry.neighbor, entry.weight));
        }
    }

    candidates.sort_by_key(|&(_, _, weight)| weight);
    candidates
}

/// Prim's minimum spanning tree of the component containing `start`.
///
/// The frontier is a min-heap of `(weight, node, predecessor)` compared
/// component-wise, so equal weights resolve to the smaller node name.
/// Nodes outside the start's component are left out. An unknown start
/// yields an empty tree.
pub fn prim(graph: &GraphStore, start: &str) -> Vec<Edge> {
    let mut tree: Vec<Edge> = Vec::new();
    if !graph.contains(start) {
        warn!("Prim start node {:?} is not in the graph", start);
        return tree;
    }

    let mut visited = vec![false; graph.node_count()];
    let mut frontier: BinaryHeap<Reverse<(i64, &str, Option<&str>)>> = BinaryHeap::new();
    frontier.push(Reverse((0, start, None)));

    while let Some(Reverse((weight, node, prev))) = frontier.pop() {
        let Some(current) = graph.index_of(node) else {
            continue;
        };
        if visited[current] {
            continue;
        }
        visited[current] = true;

        if let Some(prev) = prev {
            trace!("Prim take {} --({})-- {}", prev, weight, node);
            tree.push(Edge::new(prev, node, weight));
        }

        for entry in graph.adjacency(current) {
            if !visited[entry.neighbor] {
                frontier.push(Reverse((
                    entry.weight,
                    graph.name(entry.neighbor),
                    Some(graph.name(current)),
                )));
            }
        }
    }

    debug!("Prim from {}: {} edges selected", start, tree.len());
    tree
}
