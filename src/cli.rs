//! CLI argument parsing for latmap
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --format, --quiet, --verbose

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

pub use latmap_core::format::OutputFormat;

/// Latmap - directed latency graph query CLI
#[derive(Parser, Debug)]
#[command(name = "latmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the graph description (comma-separated connections, e.g. "AB5, BC4")
    #[arg(long, global = true, env = "LATMAP_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Total latency of an explicit trace
    Latency {
        /// The trace to evaluate, e.g. "A-B-C"
        trace: String,
    },

    /// Enumerate traces between two nodes under a hop or latency bound
    Paths(PathsArgs),

    /// Shortest latency between two nodes
    Shortest {
        /// Starting node name
        from: String,

        /// Destination node name
        to: String,
    },

    /// Run the canonical ten-query report over the loaded graph
    Report,
}

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Starting node name
    pub from: String,

    /// Destination node name
    pub to: String,

    /// Maximum number of hops (inclusive)
    #[arg(long, conflicts_with = "max_latency")]
    pub max_hops: Option<usize>,

    /// Exclusive upper bound on accumulated latency
    #[arg(long)]
    pub max_latency: Option<u64>,

    /// Only traces with exactly --max-hops hops
    #[arg(long, requires = "max_hops")]
    pub exact: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}
