//! Trace latency evaluation

use crate::graph::{Graph, Trace};

/// Total weight of the named walk, or `None` as soon as any leg has no
/// edge.
///
/// The walk is strictly forward along explicit edges: the trace names
/// every hop, so there is no search and no backtracking. An unknown node
/// name anywhere in the trace is an absent leg, not an error. Traces
/// shorter than two nodes name no hop and have no latency.
pub fn trace_latency(graph: &Graph, trace: &Trace) -> Option<u64> {
    if trace.hops() == 0 {
        return None;
    }

    let mut total: u64 = 0;
    for (from, to) in trace.legs() {
        let from_id = graph.resolve(from)?;
        let to_id = graph.resolve(to)?;
        let edge = graph.node(from_id).edge_to(to_id)?;
        total += u64::from(edge.weight());
    }
    Some(total)
}
