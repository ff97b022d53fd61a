//! The latency graph and its query operations
//!
//! A [`Graph`] owns every node in a slot registry and resolves names to
//! [`NodeId`]s; queries walk the structure read-only:
//! - trace latency evaluation
//! - bounded-hop and bounded-latency path enumeration
//! - Dijkstra shortest latency (with a cycle-closing special case)

pub mod algos;
pub mod parse;
pub mod trace;
pub mod types;

use std::collections::HashMap;

use crate::error::{LatmapError, Result};

pub use parse::{parse_edge_list, Connection};
pub use trace::{Trace, DELIMITER};
pub use types::{Edge, Node, NodeId};

/// A directed, weighted graph of named nodes.
///
/// Built once from connections and immutable afterward, apart from the
/// per-edge weight setter reachable through [`Graph::edge_mut`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Build a graph from a textual edge list, e.g. "AB5, BC4"
    pub fn from_edge_list(text: &str) -> Result<Self> {
        Graph::from_connections(parse_edge_list(text)?)
    }

    /// Build a graph from parsed connections
    pub fn from_connections<I>(connections: I) -> Result<Self>
    where
        I: IntoIterator<Item = Connection>,
    {
        let mut graph = Graph::new();
        for connection in connections {
            graph.connect(&connection.from, &connection.to, connection.weight)?;
        }
        Ok(graph)
    }

    /// Look up a node by name, creating it when absent. Idempotent: the
    /// same name always yields the same id.
    pub fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Create the single directed edge `from -> to`, registering both
    /// nodes as needed.
    ///
    /// Fails on self-loops and on an ordered pair connected twice.
    pub fn connect(&mut self, from: &str, to: &str, weight: u32) -> Result<()> {
        if from == to {
            return Err(LatmapError::SelfLoop(from.to_string()));
        }

        let from_id = self.intern(from);
        let to_id = self.intern(to);

        let edge = Edge::new(from_id, to_id, weight);
        if !self.nodes[from_id.index()].attach(edge) {
            return Err(LatmapError::DuplicateConnection {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(())
    }

    /// Resolve a node name to its id, if the node exists
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    fn require(&self, name: &str) -> Result<NodeId> {
        self.resolve(name)
            .ok_or_else(|| LatmapError::UnknownNode(name.to_string()))
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids, in registry order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Mutable access to the edge `from -> to`, the graph's only
    /// post-construction mutation surface
    pub fn edge_mut(&mut self, from: &str, to: &str) -> Option<&mut Edge> {
        let to_id = self.resolve(to)?;
        let from_id = self.resolve(from)?;
        self.nodes[from_id.index()].edge_to_mut(to_id)
    }

    /// Materialize a trace from a walk over node ids
    pub(crate) fn trace_of(&self, ids: &[NodeId]) -> Trace {
        Trace::from_nodes(ids.iter().map(|&id| self.node(id).name().to_string()).collect())
    }

    /// Total latency of the named walk, or `None` when any leg (including
    /// the first node) does not exist in the graph
    pub fn latency_of(&self, trace: &Trace) -> Option<u64> {
        algos::latency::trace_latency(self, trace)
    }

    /// Every trace from `from` to `to` with at most `max_hops` edge
    /// traversals. Cycles are allowed; `max_hops == 0` yields no traces.
    pub fn paths_within(&self, from: &str, to: &str, max_hops: usize) -> Result<Vec<Trace>> {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;
        Ok(algos::enumerate::paths_within(self, from_id, to_id, max_hops))
    }

    /// Traces from `from` to `to` with exactly `hops` edge traversals
    pub fn paths_exact(&self, from: &str, to: &str, hops: usize) -> Result<Vec<Trace>> {
        let mut traces = self.paths_within(from, to, hops)?;
        traces.retain(|trace| trace.hops() == hops);
        Ok(traces)
    }

    /// Every trace from `from` to `to` whose total latency stays strictly
    /// below `max_latency`. No depth limit; see
    /// [`algos::enumerate::paths_under`] for the termination precondition.
    pub fn paths_under_latency(&self, from: &str, to: &str, max_latency: u64) -> Result<Vec<Trace>> {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;
        Ok(algos::enumerate::paths_under(self, from_id, to_id, max_latency))
    }

    /// Minimum latency from `from` to `to`, or `Ok(None)` when no route
    /// exists. A node queried against itself must close a real cycle; the
    /// zero-cost empty walk never counts.
    pub fn shortest_latency(&self, from: &str, to: &str) -> Result<Option<u64>> {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;
        Ok(algos::dijkstra::shortest_latency(self, from_id, to_id))
    }
}
