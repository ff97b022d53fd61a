//! Bounded path enumeration
//!
//! Both searches explore outgoing edges depth-first with an explicit
//! stack rather than native recursion, so adversarial bounds cannot
//! exhaust the call stack. Cycles and node revisits are allowed: the only
//! pruning is the caller's bound, and a trace that reaches the target and
//! continues past it counts again when it returns.

use crate::graph::{Graph, NodeId, Trace};

/// One in-flight walk: the node to expand next, the ids walked so far
/// (ending at that node), and the remaining budget.
struct Walk<B> {
    at: NodeId,
    path: Vec<NodeId>,
    budget: B,
}

/// Every trace from `from` to `to` using at most `max_hops` edges.
///
/// Each edge out of the current node is checked against the target
/// independently of whether the walk continues through it, so shorter and
/// longer arrivals through the same edge are both recorded.
#[tracing::instrument(skip(graph))]
pub fn paths_within(graph: &Graph, from: NodeId, to: NodeId, max_hops: usize) -> Vec<Trace> {
    let mut found = Vec::new();
    if max_hops == 0 {
        return found;
    }

    let mut stack = vec![Walk {
        at: from,
        path: vec![from],
        budget: max_hops,
    }];

    while let Some(walk) = stack.pop() {
        for edge in graph.node(walk.at).edges() {
            if edge.to() == to {
                let mut arrived = walk.path.clone();
                arrived.push(to);
                found.push(graph.trace_of(&arrived));
            }
            if walk.budget > 1 {
                let mut extended = walk.path.clone();
                extended.push(edge.to());
                stack.push(Walk {
                    at: edge.to(),
                    path: extended,
                    budget: walk.budget - 1,
                });
            }
        }
    }

    tracing::debug!(count = found.len(), "paths_within");
    found
}

/// Every trace from `from` to `to` whose accumulated latency stays
/// strictly below `max_latency`.
///
/// There is no depth limit: an edge is skipped only when taking it would
/// meet or exceed the bound, and exploration continues past the target to
/// find longer qualifying traces. Termination therefore requires every
/// cycle to carry positive weight; a zero-weight cycle under a positive
/// bound would enumerate forever.
#[tracing::instrument(skip(graph))]
pub fn paths_under(graph: &Graph, from: NodeId, to: NodeId, max_latency: u64) -> Vec<Trace> {
    let mut found = Vec::new();
    let mut stack = vec![Walk {
        at: from,
        path: vec![from],
        budget: 0u64,
    }];

    while let Some(walk) = stack.pop() {
        for edge in graph.node(walk.at).edges() {
            let spent = walk.budget + u64::from(edge.weight());
            if spent >= max_latency {
                continue;
            }
            let mut extended = walk.path.clone();
            extended.push(edge.to());
            if edge.to() == to {
                found.push(graph.trace_of(&extended));
            }
            stack.push(Walk {
                at: edge.to(),
                path: extended,
                budget: spent,
            });
        }
    }

    tracing::debug!(count = found.len(), "paths_under");
    found
}
