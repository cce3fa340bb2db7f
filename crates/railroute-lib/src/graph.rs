use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Bound for identifiers usable as city labels.
///
/// The reference encoding uses single-character city codes, but nothing in
/// the graph assumes that; any hashable, comparable identifier works. The
/// blanket impl makes this a pure alias rather than an opt-in trait.
pub trait Node: Clone + Eq + Ord + Hash + fmt::Display {}

impl<T: Clone + Eq + Ord + Hash + fmt::Display> Node for T {}

/// Immutable adjacency representation of the railway network.
///
/// Cities with no outgoing edges are absent from the adjacency map (they may
/// still appear as destinations); [`Graph::neighbors`] papers over the
/// absence by returning an empty mapping.
#[derive(Debug, Clone)]
pub struct Graph<N: Node> {
    adjacency: HashMap<N, HashMap<N, f64>>,
    empty: HashMap<N, f64>,
}

impl<N: Node> Graph<N> {
    /// Build a graph from decoded edges.
    ///
    /// A later edge with the same (from, to) pair overwrites an earlier one.
    /// Fails with [`Error::InvalidWeight`] if any distance is not strictly
    /// positive.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut adjacency: HashMap<N, HashMap<N, f64>> = HashMap::new();
        for (from, to, weight) in edges {
            if weight <= 0.0 {
                return Err(Error::InvalidWeight {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                });
            }
            adjacency.entry(from).or_default().insert(to, weight);
        }
        Ok(Self {
            adjacency,
            empty: HashMap::new(),
        })
    }

    /// Outgoing connections for `city`; empty for a city with no departures.
    pub fn neighbors(&self, city: &N) -> &HashMap<N, f64> {
        self.adjacency.get(city).unwrap_or(&self.empty)
    }

    /// Distance of the direct connection from `from` to `to`, if one exists.
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        self.adjacency
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
    }

    /// Cities with at least one outgoing connection.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }
}

/// Build the railway graph from a decoded edge list.
pub fn build_graph<N, I>(edges: I) -> Result<Graph<N>>
where
    N: Node,
    I: IntoIterator<Item = (N, N, f64)>,
{
    Graph::from_edges(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_edges_keep_the_last_distance() {
        let graph = Graph::from_edges([('A', 'B', 5.0), ('A', 'B', 2.0)]).unwrap();
        assert_eq!(graph.edge_weight(&'A', &'B'), Some(2.0));
    }

    #[test]
    fn zero_distance_is_rejected() {
        let err = Graph::from_edges([('A', 'B', 0.0)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidWeight {
                from: "A".to_string(),
                to: "B".to_string(),
                weight: 0.0,
            }
        );
    }

    #[test]
    fn negative_distance_is_rejected() {
        let err = Graph::from_edges([('A', 'B', -3.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { .. }));
    }

    #[test]
    fn city_without_departures_has_empty_neighbors() {
        let graph = Graph::from_edges([('A', 'B', 5.0)]).unwrap();
        assert!(graph.neighbors(&'B').is_empty());
        assert!(graph.neighbors(&'Z').is_empty());
    }
}
