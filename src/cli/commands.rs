//! CLI command implementations.

use std::io::Write;

use log::debug;

use crate::config::ToolConfig;
use crate::engine::{parse_edge_spec, Dispatcher};
use crate::format::{text, to_json, OutputFormat, Scene};
use crate::graph::GraphStore;
use crate::types::{Algorithm, AlgorithmResult, GraphResult};

/// Build a graph from compact `u,v[,w]` specs, in order.
pub fn build_graph(edge_specs: &[String]) -> GraphResult<GraphStore> {
    let mut graph = GraphStore::new();
    for spec in edge_specs {
        parse_edge_spec(spec)?.apply(&mut graph)?;
    }
    debug!(
        "built graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Build a graph from edge specs, run one algorithm and print the result.
pub fn cmd_run(
    out: &mut dyn Write,
    edge_specs: &[String],
    algorithm: Algorithm,
    start: Option<&str>,
    with_scene: bool,
    config: &ToolConfig,
) -> GraphResult<()> {
    let graph = build_graph(edge_specs)?;
    let result = Dispatcher::new().run(&graph, algorithm, start)?;
    print_result(out, &graph, &result, with_scene, config)
}

/// Print a result in the configured format, optionally with its scene.
pub fn print_result(
    out: &mut dyn Write,
    graph: &GraphStore,
    result: &AlgorithmResult,
    with_scene: bool,
    config: &ToolConfig,
) -> GraphResult<()> {
    match config.output.format {
        OutputFormat::Json => {
            if with_scene {
                let doc = serde_json::json!({
                    "result": result,
                    "scene": Scene::for_result(graph, result),
                });
                writeln!(out, "{}", to_json(&doc, config.output.pretty)?)?;
            } else {
                writeln!(out, "{}", to_json(result, config.output.pretty)?)?;
            }
        }
        OutputFormat::Text => {
            for line in text::render_result(result) {
                writeln!(out, "{}", line)?;
            }
            if with_scene {
                print_scene_text(out, &Scene::for_result(graph, result))?;
            }
        }
    }
    Ok(())
}

/// Print a scene in the configured format.
pub fn print_scene(out: &mut dyn Write, scene: &Scene, config: &ToolConfig) -> GraphResult<()> {
    match config.output.format {
        OutputFormat::Json => writeln!(out, "{}", to_json(scene, config.output.pretty)?)?,
        OutputFormat::Text => print_scene_text(out, scene)?,
    }
    Ok(())
}

fn print_scene_text(out: &mut dyn Write, scene: &Scene) -> GraphResult<()> {
    writeln!(out, "Nodes:")?;
    for node in &scene.nodes {
        match node.sequence {
            Some(n) => writeln!(out, "  {} #{}", node.id, n)?,
            None => writeln!(out, "  {}", node.id)?,
        }
    }
    writeln!(out, "Edges:")?;
    for edge in &scene.edges {
        let mark = if edge.highlighted { "*" } else { " " };
        if scene.show_weights {
            writeln!(
                out,
                " {} {} --({})-- {}",
                mark, edge.source, edge.weight, edge.target
            )?;
        } else {
            writeln!(out, " {} {} -- {}", mark, edge.source, edge.target)?;
        }
    }
    Ok(())
}

/// Print node and edge counts.
pub fn print_stats(out: &mut dyn Write, graph: &GraphStore, config: &ToolConfig) -> GraphResult<()> {
    match config.output.format {
        OutputFormat::Json => {
            let stats = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "default_start": graph.default_start(),
            });
            writeln!(out, "{}", to_json(&stats, config.output.pretty)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Nodes: {}", graph.node_count())?;
            writeln!(out, "Edges: {}", graph.edge_count())?;
            if let Some(start) = graph.default_start() {
                writeln!(out, "Default start: {}", start)?;
            }
        }
    }
    Ok(())
}
