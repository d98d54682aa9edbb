//! Plain-text rendering of edges and results.

use crate::engine::EdgeRequest;
use crate::types::{AlgorithmResult, Edge, Outcome};

/// Separator between nodes of a traversal order.
pub const ORDER_SEPARATOR: &str = " -> ";

/// `Added edge u --(w)-- v`
pub fn edge_added_line(request: &EdgeRequest) -> String {
    format!(
        "Added edge {} --({})-- {}",
        request.source, request.weight, request.target
    )
}

/// `Running BFS from A...`
pub fn running_line(result: &AlgorithmResult) -> String {
    format!("Running {} from {}...", result.algorithm, result.start)
}

/// `BFS order: A -> B` or `Kruskal MST edges: [(B, C, 1), (A, C, 2)]`
pub fn result_line(result: &AlgorithmResult) -> String {
    match &result.outcome {
        Outcome::Order(order) => format!(
            "{} order: {}",
            result.algorithm,
            order.join(ORDER_SEPARATOR)
        ),
        Outcome::Edges(edges) => {
            format!("{} MST edges: {}", result.algorithm, edge_list(edges))
        }
    }
}

/// `[(u, v, w), ...]`
pub fn edge_list(edges: &[Edge]) -> String {
    let items: Vec<String> = edges.iter().map(Edge::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Full text block for a result: header, result line, and total weight for MSTs.
pub fn render_result(result: &AlgorithmResult) -> Vec<String> {
    let mut lines = vec![running_line(result), result_line(result)];
    if let Some(total) = result.total_weight {
        lines.push(format!("Total weight: {}", total));
    }
    lines
}
