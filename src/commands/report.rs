//! `latmap report` - the canonical ten-query report
//!
//! Answers the fixed query set the original tool printed for its sample
//! graph: five trace latencies, two enumeration counts, two shortest
//! latencies, and one bounded-latency count.

use crate::cli::{Cli, OutputFormat};
use crate::commands::latency::NO_SUCH_TRACE;
use latmap_core::error::Result;
use latmap_core::graph::{Graph, Trace};

const REPORT_TRACES: [&str; 5] = ["A-B-C", "A-D", "A-D-C", "A-E-B-C-D", "A-E-D"];

enum Answer {
    Latency(Option<u64>),
    Count(usize),
}

impl Answer {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Answer::Latency(latency) => serde_json::json!(latency),
            Answer::Count(count) => serde_json::json!(count),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Latency(Some(latency)) => write!(f, "{}", latency),
            Answer::Latency(None) => write!(f, "{}", NO_SUCH_TRACE),
            Answer::Count(count) => write!(f, "{}", count),
        }
    }
}

pub fn run(cli: &Cli, graph: &Graph) -> Result<()> {
    let mut answers: Vec<(String, Answer)> = Vec::new();

    for text in REPORT_TRACES {
        let trace: Trace = text.parse()?;
        let latency = graph.latency_of(&trace);
        answers.push((format!("latency {}", text), Answer::Latency(latency)));
    }

    answers.push((
        "paths C C max-hops 3".to_string(),
        Answer::Count(graph.paths_within("C", "C", 3)?.len()),
    ));
    answers.push((
        "paths A C exact 4".to_string(),
        Answer::Count(graph.paths_exact("A", "C", 4)?.len()),
    ));
    answers.push((
        "shortest A C".to_string(),
        Answer::Latency(graph.shortest_latency("A", "C")?),
    ));
    answers.push((
        "shortest B B".to_string(),
        Answer::Latency(graph.shortest_latency("B", "B")?),
    ));
    answers.push((
        "paths C C max-latency 30".to_string(),
        Answer::Count(graph.paths_under_latency("C", "C", 30)?.len()),
    ));

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = answers
                .iter()
                .enumerate()
                .map(|(i, (query, answer))| {
                    serde_json::json!({
                        "n": i + 1,
                        "query": query,
                        "answer": answer.to_json(),
                    })
                })
                .collect();
            let envelope = serde_json::json!({ "answers": entries });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        OutputFormat::Human => {
            for (i, (_, answer)) in answers.iter().enumerate() {
                println!("{}. {}", i + 1, answer);
            }
        }
    }

    Ok(())
}
