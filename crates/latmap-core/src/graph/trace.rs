//! Trace: an ordered walk through named nodes

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::LatmapError;

/// Separator between node names in the textual trace form, e.g. "A-B-C"
pub const DELIMITER: char = '-';

/// An ordered sequence of node names denoting a walk through the graph,
/// possibly revisiting nodes. Names are not required to resolve in any
/// particular graph; resolution happens at query time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Trace {
    nodes: Vec<String>,
}

impl Trace {
    /// Build a trace directly from a sequence of names.
    ///
    /// Skips the textual validation applied by [`FromStr`]; used for
    /// traces assembled programmatically during enumeration.
    pub fn from_nodes(nodes: Vec<String>) -> Self {
        Trace { nodes }
    }

    /// The node names of this trace, in walk order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edge traversals the trace names (node count minus one)
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Decompose the trace into its consecutive (from, to) legs
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl FromStr for Trace {
    type Err = LatmapError;

    /// Parse a delimited trace string, e.g. "A-B-C".
    ///
    /// Rejected: no delimiter at all, leading or trailing delimiter, and
    /// empty segments ("A--B").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| LatmapError::MalformedTrace {
            trace: s.to_string(),
            reason: reason.to_string(),
        };

        if !s.contains(DELIMITER) {
            return Err(malformed("missing delimiter"));
        }
        if s.starts_with(DELIMITER) {
            return Err(malformed("leading delimiter"));
        }
        if s.ends_with(DELIMITER) {
            return Err(malformed("trailing delimiter"));
        }
        if s.split(DELIMITER).any(str::is_empty) {
            return Err(malformed("empty segment"));
        }

        Ok(Trace {
            nodes: s.split(DELIMITER).map(String::from).collect(),
        })
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in &self.nodes {
            if !first {
                write!(f, "{}", DELIMITER)?;
            }
            write!(f, "{}", node)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
