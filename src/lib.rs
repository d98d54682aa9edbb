//! graph-tutor: build small undirected weighted graphs and run classic
//! algorithms on them.
//!
//! Edges go into a [`GraphStore`]; the [`Dispatcher`] runs breadth-first or
//! depth-first search, or Kruskal's or Prim's minimum spanning tree, and
//! returns an [`AlgorithmResult`] that front ends render as text, JSON or a
//! highlight [`Scene`] for a visualizer.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::ToolConfig;
pub use engine::{parse_edge, Dispatcher, EdgeRequest, Session};
pub use format::{OutputFormat, Scene};
pub use graph::{bfs, dfs, kruskal, prim, GraphBuilder, GraphStore};
pub use index::UnionFind;
pub use types::{
    Algorithm, AlgorithmResult, Edge, GraphError, GraphResult, Outcome, DEFAULT_WEIGHT,
};
