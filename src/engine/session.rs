//! An interactive session: one graph, a selected algorithm, and the output log.

use log::info;

use crate::format::text;
use crate::graph::GraphStore;
use crate::types::{Algorithm, AlgorithmResult, GraphResult};

use super::dispatch::Dispatcher;
use super::input::{parse_edge, EdgeRequest};

/// Owns the graph for the lifetime of a session and records what happened.
#[derive(Debug)]
pub struct Session {
    graph: GraphStore,
    dispatcher: Dispatcher,
    algorithm: Algorithm,
    start: Option<String>,
    transcript: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start a session with an empty graph and BFS selected.
    pub fn new() -> Self {
        Self {
            graph: GraphStore::new(),
            dispatcher: Dispatcher::new(),
            algorithm: Algorithm::Bfs,
            start: None,
            transcript: Vec::new(),
        }
    }

    /// The session's graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Currently selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Select the algorithm used by [`Session::run_selected`].
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// The start node a run would use right now, if any.
    pub fn start(&self) -> Option<&str> {
        self.start
            .as_deref()
            .or_else(|| self.graph.default_start())
    }

    /// Pick an explicit start node. `None` goes back to the default.
    pub fn select_start(&mut self, start: Option<&str>) {
        self.start = start
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
    }

    /// Lines written since the last clear.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Parse and add an edge from raw text fields.
    ///
    /// Adding an edge resets the start selection to the smallest node.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: &str) -> GraphResult<String> {
        let request = parse_edge(source, target, weight)?;
        self.add_request(&request)
    }

    /// Add an already parsed edge.
    pub fn add_request(&mut self, request: &EdgeRequest) -> GraphResult<String> {
        request.apply(&mut self.graph)?;
        self.start = None;
        let line = text::edge_added_line(request);
        self.transcript.push(line.clone());
        Ok(line)
    }

    /// Drop the graph, the start selection and the transcript.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.start = None;
        self.transcript.clear();
        info!("graph cleared");
    }

    /// Run the selected algorithm from the selected start node.
    pub fn run_selected(&mut self) -> GraphResult<AlgorithmResult> {
        let start = self.start.clone();
        self.run(self.algorithm, start.as_deref())
    }

    /// Run `algorithm`, falling back to the session's start selection.
    pub fn run(&mut self, algorithm: Algorithm, start: Option<&str>) -> GraphResult<AlgorithmResult> {
        let start = start
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or(self.start.as_deref());
        let result = self.dispatcher.run(&self.graph, algorithm, start)?;

        info!("{} run from {}", result.algorithm, result.start);
        self.transcript.push(String::new());
        self.transcript.push(text::running_line(&result));
        self.transcript.push(text::result_line(&result));
        Ok(result)
    }
}
