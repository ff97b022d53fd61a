//! Command dispatch logic for latmap

use std::fs;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use latmap_core::error::{LatmapError, Result};
use latmap_core::graph::Graph;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return Err(LatmapError::UsageError(
            "no command given (try --help)".to_string(),
        ));
    };

    let graph = load_graph(cli)?;
    tracing::debug!(elapsed = ?start.elapsed(), nodes = graph.node_count(), "load_graph");

    match command {
        Commands::Latency { trace } => commands::latency::run(cli, &graph, trace),
        Commands::Paths(args) => commands::paths::run(cli, &graph, args),
        Commands::Shortest { from, to } => commands::shortest::run(cli, &graph, from, to),
        Commands::Report => commands::report::run(cli, &graph),
    }
}

fn load_graph(cli: &Cli) -> Result<Graph> {
    let path = cli.graph.as_ref().ok_or_else(|| {
        LatmapError::UsageError("no graph given (use --graph or LATMAP_GRAPH)".to_string())
    })?;
    let text = fs::read_to_string(path)?;
    Graph::from_edge_list(&text)
}
