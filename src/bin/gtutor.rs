//! CLI entry point for the `gtutor` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_tutor::cli::{commands, repl};
use graph_tutor::config::ToolConfig;
use graph_tutor::format::OutputFormat;
use graph_tutor::types::{Algorithm, GraphError};

#[derive(Parser)]
#[command(
    name = "gtutor",
    about = "graph-tutor CLI: build a weighted graph and run BFS, DFS, Kruskal or Prim on it"
)]
struct Cli {
    /// Output format: "text" or "json" (overrides the config file)
    #[arg(long)]
    format: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    Repl,
    /// Build a graph from edges and run one algorithm
    Run {
        /// Edge as u,v or u,v,w (repeatable, applied in order)
        #[arg(long = "edge", short = 'e', required = true)]
        edges: Vec<String>,
        /// Algorithm: bfs, dfs, kruskal, prim
        #[arg(long, short = 'a', default_value = "bfs")]
        algorithm: String,
        /// Start node (defaults to the smallest node name)
        #[arg(long, short = 's')]
        start: Option<String>,
        /// Also print highlight data for a visualizer
        #[arg(long)]
        scene: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<ToolConfig, GraphError> {
    let mut config = ToolConfig::load_or_default(cli.config.as_deref())?;
    if let Some(format) = &cli.format {
        config.output.format = OutputFormat::from_name(format)?;
    }
    Ok(config)
}

fn exit_code(e: &GraphError) -> i32 {
    match e {
        GraphError::Io(_) | GraphError::Config(_) => 1,
        e if e.is_input_error() => 3,
        GraphError::NoStartNode => 4,
        _ => 5,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    };

    let result = match cli.command {
        None | Some(Commands::Repl) => {
            if let Err(e) = repl::run(config) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Run {
            edges,
            algorithm,
            start,
            scene,
        }) => Algorithm::parse(&algorithm).and_then(|algorithm| {
            let mut stdout = std::io::stdout().lock();
            commands::cmd_run(
                &mut stdout,
                &edges,
                algorithm,
                start.as_deref(),
                scene,
                &config,
            )
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
