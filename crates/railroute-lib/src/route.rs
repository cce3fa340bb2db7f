use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// Total distance of an explicit route, given as the ordered cities visited.
///
/// An empty route is [`Error::RouteNotFound`]. A single-city route traverses
/// no edges and has distance 0. Any consecutive pair without a direct
/// connection short-circuits to [`Error::RouteNotFound`] without evaluating
/// the remaining stops.
pub fn route_distance<N: Node>(graph: &Graph<N>, route: &[N]) -> Result<f64> {
    if route.is_empty() {
        return Err(Error::RouteNotFound);
    }

    let mut total = 0.0;
    for pair in route.windows(2) {
        match graph.edge_weight(&pair[0], &pair[1]) {
            Some(weight) => total += weight,
            None => return Err(Error::RouteNotFound),
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_city_route_has_zero_distance() {
        let graph = Graph::from_edges([('A', 'B', 5.0)]).unwrap();
        assert_eq!(route_distance(&graph, &['A']), Ok(0.0));
        // Holds even for a city the graph has never seen.
        assert_eq!(route_distance(&graph, &['Z']), Ok(0.0));
    }

    #[test]
    fn empty_route_is_not_found() {
        let graph = Graph::from_edges([('A', 'B', 5.0)]).unwrap();
        assert_eq!(route_distance(&graph, &[]), Err(Error::RouteNotFound));
    }
}
