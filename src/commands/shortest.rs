//! `latmap shortest` - minimum latency between two nodes

use crate::cli::{Cli, OutputFormat};
use crate::commands::latency::NO_SUCH_TRACE;
use latmap_core::error::Result;
use latmap_core::graph::Graph;

pub fn run(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let latency = graph.shortest_latency(from, to)?;

    match cli.format {
        OutputFormat::Json => {
            let envelope = serde_json::json!({
                "from": from,
                "to": to,
                "found": latency.is_some(),
                "latency": latency,
            });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        OutputFormat::Human => match latency {
            Some(latency) => println!("{}", latency),
            None => println!("{}", NO_SUCH_TRACE),
        },
    }

    Ok(())
}
