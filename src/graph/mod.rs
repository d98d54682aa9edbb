//! In-memory graph operations: the store and the algorithms over it.

pub mod builder;
pub mod mst;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use mst::{kruskal, prim};
pub use store::GraphStore;
pub use traversal::{bfs, dfs};
