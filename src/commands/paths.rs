//! `latmap paths` - enumerate traces under a hop or latency bound

use crate::cli::{Cli, OutputFormat, PathsArgs};
use latmap_core::error::{LatmapError, Result};
use latmap_core::graph::Graph;

pub fn run(cli: &Cli, graph: &Graph, args: &PathsArgs) -> Result<()> {
    let (mut traces, bound) = match (args.max_hops, args.max_latency) {
        (Some(hops), None) => {
            let traces = if args.exact {
                graph.paths_exact(&args.from, &args.to, hops)?
            } else {
                graph.paths_within(&args.from, &args.to, hops)?
            };
            (traces, serde_json::json!({ "max_hops": hops, "exact": args.exact }))
        }
        (None, Some(latency)) => (
            graph.paths_under_latency(&args.from, &args.to, latency)?,
            serde_json::json!({ "max_latency": latency }),
        ),
        _ => {
            return Err(LatmapError::UsageError(
                "one of --max-hops or --max-latency is required".to_string(),
            ))
        }
    };

    // enumeration order is unspecified; sort for stable output
    traces.sort();

    match cli.format {
        OutputFormat::Json => {
            let envelope = serde_json::json!({
                "from": args.from,
                "to": args.to,
                "bound": bound,
                "count": traces.len(),
                "paths": traces,
            });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        OutputFormat::Human => {
            for trace in &traces {
                println!("{}", trace);
            }
            if !cli.quiet {
                eprintln!("{} trace(s)", traces.len());
            }
        }
    }

    Ok(())
}
