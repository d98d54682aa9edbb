//! Auxiliary structures used by the algorithms.

pub mod union_find;

pub use union_find::UnionFind;
