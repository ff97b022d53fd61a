//! Edge-list parsing for the textual graph description
//!
//! The description is a comma-separated list of connections, each
//! `<from><to><weight>` with single-character node tokens, e.g.
//! "AB5, BC4" connects A to B at latency 5 and B to C at latency 4.

use crate::error::{LatmapError, Result};

/// A single (from, to, weight) connection parsed from the edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// Parse a textual edge list into connections.
///
/// Whitespace around items is trimmed. Items shorter than three
/// characters (including empty ones) are malformed. Weight tokens must
/// parse as non-negative integers that fit the edge weight type.
pub fn parse_edge_list(text: &str) -> Result<Vec<Connection>> {
    text.split(',')
        .map(|item| parse_connection(item.trim()))
        .collect()
}

fn parse_connection(item: &str) -> Result<Connection> {
    let mut chars = item.chars();
    let (Some(from), Some(to)) = (chars.next(), chars.next()) else {
        return Err(LatmapError::MalformedConnection {
            item: item.to_string(),
        });
    };

    let token = chars.as_str();
    if token.is_empty() {
        return Err(LatmapError::MalformedConnection {
            item: item.to_string(),
        });
    }

    let weight: i64 = token
        .parse()
        .map_err(|_| LatmapError::InvalidWeight {
            item: item.to_string(),
            token: token.to_string(),
        })?;
    if weight < 0 {
        return Err(LatmapError::NegativeWeight {
            item: item.to_string(),
        });
    }
    let weight = u32::try_from(weight).map_err(|_| LatmapError::InvalidWeight {
        item: item.to_string(),
        token: token.to_string(),
    })?;

    Ok(Connection {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge_list() {
        let connections = parse_edge_list("AB5, BC4").unwrap();
        assert_eq!(
            connections,
            [
                Connection {
                    from: "A".to_string(),
                    to: "B".to_string(),
                    weight: 5,
                },
                Connection {
                    from: "B".to_string(),
                    to: "C".to_string(),
                    weight: 4,
                },
            ]
        );
    }

    #[test]
    fn test_parse_multi_digit_weight() {
        let connections = parse_edge_list("AB42").unwrap();
        assert_eq!(connections[0].weight, 42);
    }

    #[test]
    fn test_parse_rejects_short_item() {
        assert!(parse_edge_list("AB").is_err());
        assert!(parse_edge_list("").is_err());
        assert!(parse_edge_list("AB5,").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_weight_token() {
        let err = parse_edge_list("ABx").unwrap_err();
        assert!(matches!(err, LatmapError::InvalidWeight { .. }));
    }

    #[test]
    fn test_parse_rejects_negative_weight() {
        let err = parse_edge_list("AB-3").unwrap_err();
        assert!(matches!(err, LatmapError::NegativeWeight { .. }));
    }

    #[test]
    fn test_parse_rejects_oversized_weight() {
        let err = parse_edge_list("AB4294967296").unwrap_err();
        assert!(matches!(err, LatmapError::InvalidWeight { .. }));
    }
}
