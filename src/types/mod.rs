//! All data types for the graph-tutor library.

pub mod algorithm;
pub mod edge;
pub mod error;

pub use algorithm::{Algorithm, AlgorithmResult, Outcome};
pub use edge::{AdjacencyEntry, Edge};
pub use error::{GraphError, GraphResult};

/// Weight given to an edge entered without one.
pub const DEFAULT_WEIGHT: i64 = 1;
