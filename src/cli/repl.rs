//! Interactive REPL for gtutor: slash command interface.
//!
//! Launch with `gtutor` (no subcommand) to enter interactive mode.
//! Type `/help` for available commands.

use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use crate::cli::commands;
use crate::config::ToolConfig;
use crate::engine::{parse_edge_words, Session};
use crate::format::{text, Scene};
use crate::types::{Algorithm, AlgorithmResult, GraphResult};

/// Available commands and their one-line help.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/add u v [w]", "Add an undirected edge (weight defaults to 1)"),
    ("/clear", "Remove every node and edge"),
    ("/nodes", "List nodes in sorted order"),
    ("/edges", "List edges in insertion order"),
    ("/algo <name>", "Select bfs, dfs, kruskal or prim"),
    ("/start [node]", "Select the start node (blank = smallest)"),
    ("/run [algo] [start]", "Run an algorithm"),
    ("/scene", "Show highlight data for the last result"),
    ("/log", "Show the session output log"),
    ("/stats", "Node and edge counts"),
    ("/help", "Show this help"),
    ("/exit", "Quit"),
];

/// REPL state: the session plus the last result for `/scene`.
pub struct ReplState {
    /// The session holding the graph.
    pub session: Session,
    /// Output configuration.
    pub config: ToolConfig,
    last_result: Option<AlgorithmResult>,
}

impl ReplState {
    pub fn new(config: ToolConfig) -> Self {
        Self {
            session: Session::new(),
            config,
            last_result: None,
        }
    }
}

/// Execute one command line. Returns `true` if the REPL should exit.
pub fn execute(input: &str, state: &mut ReplState, out: &mut dyn Write) -> GraphResult<bool> {
    let input = input.trim();
    let input = input.strip_prefix('/').unwrap_or(input);
    if input.is_empty() {
        return Ok(false);
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    match cmd {
        "exit" | "quit" | "q" => return Ok(true),
        "help" | "h" | "?" => cmd_help(out)?,
        "add" => {
            let request = parse_edge_words(args)?;
            let line = state.session.add_request(&request)?;
            writeln!(out, "{}", line)?;
            state.last_result = None;
        }
        "clear" => {
            state.session.clear();
            state.last_result = None;
            writeln!(out, "Graph cleared")?;
        }
        "nodes" => {
            let nodes = state.session.graph().sorted_nodes();
            writeln!(out, "{}", nodes.join(", "))?;
        }
        "edges" => {
            writeln!(out, "{}", text::edge_list(state.session.graph().edges()))?;
        }
        "algo" | "algorithm" => {
            if args.is_empty() {
                writeln!(out, "Selected: {}", state.session.algorithm())?;
            } else {
                let algorithm = Algorithm::parse(args)?;
                state.session.select_algorithm(algorithm);
                writeln!(out, "Selected: {}", algorithm)?;
            }
        }
        "start" => {
            state.session.select_start(Some(args));
            match state.session.start() {
                Some(start) => writeln!(out, "Start node: {}", start)?,
                None => writeln!(out, "Start node: (none)")?,
            }
        }
        "run" => cmd_run(args, state, out)?,
        "scene" => {
            let graph = state.session.graph();
            let scene = match &state.last_result {
                Some(result) => Scene::for_result(graph, result),
                None => Scene::plain(graph),
            };
            commands::print_scene(out, &scene, &state.config)?;
        }
        "log" => {
            for line in state.session.transcript() {
                writeln!(out, "{}", line)?;
            }
        }
        "stats" => {
            commands::print_stats(out, state.session.graph(), &state.config)?;
            writeln!(out, "Algorithm: {}", state.session.algorithm())?;
        }
        _ => {
            writeln!(out, "Unknown command: /{}. Type /help for commands.", cmd)?;
        }
    }
    Ok(false)
}

/// `/run [algo] [start]`. An algorithm name as first word selects it.
fn cmd_run(args: &str, state: &mut ReplState, out: &mut dyn Write) -> GraphResult<()> {
    let words: Vec<&str> = args.split_whitespace().collect();
    let (algorithm, start) = match words.as_slice() {
        [] => (state.session.algorithm(), None),
        [first] => match Algorithm::from_name(first) {
            Some(algorithm) => (algorithm, None),
            None => (state.session.algorithm(), Some(*first)),
        },
        [first, second, ..] => (Algorithm::parse(first)?, Some(*second)),
    };

    state.session.select_algorithm(algorithm);
    let result = state.session.run(algorithm, start)?;
    commands::print_result(out, state.session.graph(), &result, false, &state.config)?;
    state.last_result = Some(result);
    Ok(())
}

fn cmd_help(out: &mut dyn Write) -> GraphResult<()> {
    writeln!(out)?;
    writeln!(out, "  Commands:")?;
    writeln!(out)?;
    for (cmd, desc) in COMMANDS {
        writeln!(out, "    {cmd:<22} {desc}")?;
    }
    writeln!(out)?;
    writeln!(out, "  The leading slash is optional.")?;
    Ok(())
}

/// Run the interactive REPL.
pub fn run(config: ToolConfig) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!(
        "gtutor v{}. Type /help for commands, /exit to quit.",
        env!("CARGO_PKG_VERSION")
    );

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut rl = DefaultEditor::with_config(rl_config)?;

    let hist_path = config.history_path();
    if config.repl.history && hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let prompt = config.repl.prompt.clone();
    let history = config.repl.history;
    let mut state = ReplState::new(config);
    let stdout = std::io::stdout();

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let mut out = stdout.lock();
                match execute(&line, &mut state, &mut out) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("(Ctrl+C) Type /exit to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    if history {
        let _ = rl.save_history(&hist_path);
    }
    Ok(())
}
