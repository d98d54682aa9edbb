//! High-level operations: edge input, algorithm dispatch and sessions.

pub mod dispatch;
pub mod input;
pub mod session;

pub use dispatch::Dispatcher;
pub use input::{parse_edge, parse_edge_spec, parse_edge_words, parse_weight, EdgeRequest};
pub use session::Session;
