//! Shortest-latency search (Dijkstra)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeId};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated latency)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    node: NodeId,
    latency: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.latency.cmp(&other.latency)
    }
}

/// Minimum latency from every node reachable from `from`. Unreached slots
/// stay `None`.
///
/// Relaxation only ever decreases a distance, so the order in which
/// equal-latency entries leave the heap cannot change the result.
fn distances(graph: &Graph, from: NodeId) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut heap = BinaryHeap::new();

    dist[from.index()] = Some(0);
    heap.push(Reverse(HeapEntry {
        node: from,
        latency: 0,
    }));

    while let Some(Reverse(HeapEntry { node, latency })) = heap.pop() {
        if visited[node.index()] {
            continue; // stale heap entry, already settled cheaper
        }
        visited[node.index()] = true;

        for edge in graph.node(node).edges() {
            let next = edge.to();
            if visited[next.index()] {
                continue;
            }
            let candidate = latency + u64::from(edge.weight());
            if dist[next.index()].map_or(true, |known| candidate < known) {
                dist[next.index()] = Some(candidate);
                heap.push(Reverse(HeapEntry {
                    node: next,
                    latency: candidate,
                }));
            }
        }
    }

    dist
}

/// Minimum latency from `from` to `to`, or `None` when no route exists.
///
/// When `from` and `to` are the same node the zero-latency empty walk is
/// excluded: the answer is the cheapest cycle through at least one edge,
/// found by closing the walk over any reachable node holding a direct
/// edge back to `from`.
#[tracing::instrument(skip(graph))]
pub fn shortest_latency(graph: &Graph, from: NodeId, to: NodeId) -> Option<u64> {
    let dist = distances(graph, from);

    if from != to {
        return dist[to.index()];
    }

    graph
        .node_ids()
        .filter_map(|via| {
            let reached = dist[via.index()]?;
            let closing = graph.node(via).edge_to(from)?;
            Some(reached + u64::from(closing.weight()))
        })
        .min()
}
