//! `latmap latency` - evaluate the latency of an explicit trace

use crate::cli::{Cli, OutputFormat};
use latmap_core::error::Result;
use latmap_core::graph::{Graph, Trace};

/// Printed when a named walk does not exist in the graph
pub const NO_SUCH_TRACE: &str = "NO SUCH TRACE";

pub fn run(cli: &Cli, graph: &Graph, trace: &str) -> Result<()> {
    let trace: Trace = trace.parse()?;
    let latency = graph.latency_of(&trace);

    match cli.format {
        OutputFormat::Json => {
            let envelope = serde_json::json!({
                "trace": trace,
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
