//! Parsing of the textual schedule encoding.
//!
//! Graphs arrive as comma-separated edge tokens, two single-character city
//! codes followed by the connection distance (`"AB5, BC4"`). Explicit routes
//! are dash-separated city codes (`"A-B-C"`). The core graph and query
//! functions never see this encoding; they only consume the decoded values.

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Parse the edge-list encoding into a graph over `char` city codes.
///
/// Blank tokens are skipped, so an empty input yields an empty graph.
/// Distance validation happens in [`Graph::from_edges`], which reports the
/// offending edge for non-positive distances.
pub fn parse_graph(input: &str) -> Result<Graph<char>> {
    let mut edges = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        edges.push(parse_edge(token)?);
    }
    Graph::from_edges(edges)
}

fn parse_edge(token: &str) -> Result<(char, char, f64)> {
    let mut chars = token.chars();
    let (Some(from), Some(to)) = (chars.next(), chars.next()) else {
        return Err(Error::InvalidEdge {
            token: token.to_string(),
        });
    };
    let weight = chars.as_str().parse().map_err(|_| Error::InvalidEdge {
        token: token.to_string(),
    })?;
    Ok((from, to, weight))
}

/// Parse a dash-separated route into its city codes.
///
/// An empty input is an empty route, which `route_distance` then reports as
/// not found.
pub fn parse_route(input: &str) -> Result<Vec<char>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split('-')
        .map(|token| {
            let token = token.trim();
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(city), None) => Ok(city),
                _ => Err(Error::InvalidRoute {
                    token: token.to_string(),
                }),
            }
        })
        .collect()
}
