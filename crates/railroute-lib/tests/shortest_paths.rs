mod common;

use common::reference_graph;
use railroute_lib::{Error, ShortestPaths};

const CITIES: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

#[test]
fn direct_connection_can_be_shortest() {
    let paths = ShortestPaths::build(&reference_graph());
    assert_eq!(paths.distance(&'A', &'B'), Ok(5.0));
}

#[test]
fn indirect_connection_beats_direct_when_cheaper() {
    let paths = ShortestPaths::build(&reference_graph());
    // A -> E directly is 7; no cheaper detour exists.
    assert_eq!(paths.distance(&'A', &'E'), Ok(7.0));
    // Two routes tie at 9 (A-B-C and A-D-C).
    assert_eq!(paths.distance(&'A', &'C'), Ok(9.0));
}

#[test]
fn self_distance_is_the_cheapest_round_trip() {
    let paths = ShortestPaths::build(&reference_graph());
    assert_eq!(paths.distance(&'D', &'D'), Ok(16.0));
    assert_eq!(paths.distance(&'B', &'B'), Ok(9.0));
}

#[test]
fn unreachable_destination_is_not_found() {
    let paths = ShortestPaths::build(&reference_graph());
    // Nothing leads back to A.
    assert_eq!(paths.distance(&'C', &'A'), Err(Error::RouteNotFound));
}

#[test]
fn unknown_source_is_not_found() {
    let paths = ShortestPaths::build(&reference_graph());
    assert_eq!(paths.distance(&'Z', &'A'), Err(Error::RouteNotFound));
}

#[test]
fn table_satisfies_the_triangle_inequality() {
    let paths = ShortestPaths::build(&reference_graph());
    for a in CITIES {
        for b in CITIES {
            for c in CITIES {
                let (Ok(ab), Ok(bc)) = (paths.distance(&a, &b), paths.distance(&b, &c)) else {
                    continue;
                };
                let ac = paths
                    .distance(&a, &c)
                    .expect("a->c reachable through a->b->c");
                assert!(
                    ac <= ab + bc + f64::EPSILON,
                    "distance {a}->{c} = {ac} exceeds {a}->{b}->{c} = {}",
                    ab + bc
                );
            }
        }
    }
}
