//! Graph traversal algorithms (BFS, DFS).

use std::collections::{HashSet, VecDeque};

use log::{debug, trace, warn};

use super::GraphStore;

/// Breadth-first visit order from `start`.
///
/// Neighbors are expanded in adjacency insertion order and a node is queued
/// at most once while pending. Nodes outside the start's component follow in
/// ascending name order, so every node appears exactly once.
pub fn bfs(graph: &GraphStore, start: &str) -> Vec<String> {
    let mut visited = vec![false; graph.node_count()];
    let mut pending: HashSet<usize> = HashSet::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut order: Vec<String> = Vec::with_capacity(graph.node_count());

    match graph.index_of(start) {
        Some(idx) => {
            queue.push_back(idx);
            pending.insert(idx);
        }
        None => warn!("BFS start node {:?} is not in the graph", start),
    }

    while let Some(current) = queue.pop_front() {
        pending.remove(&current);
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(graph.name(current).to_string());
        trace!("BFS visit {}", graph.name(current));

        for entry in graph.adjacency(current) {
            let next = entry.neighbor;
            if !visited[next] && !pending.contains(&next) {
                queue.push_back(next);
                pending.insert(next);
            }
        }
    }

    append_unvisited(graph, &visited, &mut order);
    debug!("BFS from {}: {} nodes", start, order.len());
    order
}

/// Depth-first visit order from `start`, using an explicit stack.
///
/// Neighbors are pushed in reverse adjacency order so the first-inserted
/// neighbor is explored first. Unreached nodes follow in ascending name order.
pub fn dfs(graph: &GraphStore, start: &str) -> Vec<String> {
    let mut visited = vec![false; graph.node_count()];
    let mut stack: Vec<usize> = Vec::new();
    let mut order: Vec<String> = Vec::with_capacity(graph.node_count());

    match graph.index_of(start) {
        Some(idx) => stack.push(idx),
        None => warn!("DFS start node {:?} is not in the graph", start),
    }

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(graph.name(current).to_string());
        trace!("DFS visit {}", graph.name(current));

        for entry in graph.adjacency(current).iter().rev() {
            if !visited[entry.neighbor] {
                stack.push(entry.neighbor);
            }
        }
    }

    append_unvisited(graph, &visited, &mut order);
    debug!("DFS from {}: {} nodes", start, order.len());
    order
}

/// Append every node not yet visited, in ascending name order.
fn append_unvisited(graph: &GraphStore, visited: &[bool], order: &mut Vec<String>) {
    let mut rest: Vec<&str> = visited
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(idx, _)| graph.name(idx))
        .collect();
    rest.sort_unstable();
    order.extend(rest.into_iter().map(str::to_string));
}
