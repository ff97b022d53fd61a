//! Query algorithms over the latency graph
//!
//! - trace latency evaluation (strictly forward walk)
//! - bounded-hop and bounded-latency path enumeration (explicit-stack DFS)
//! - Dijkstra shortest latency

pub mod dijkstra;
pub mod enumerate;
pub mod latency;
