use serde::Serialize;

use crate::graph::{Graph, Node};

/// How the stop budget of [`count_trips`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TripMode {
    /// Count only trips using exactly the budgeted number of stops.
    ExactStops,
    /// Count every trip using up to the budgeted number of stops.
    MaxStops,
}

/// Count trips from `start` to `end` within a stop budget.
///
/// One stop is one edge traversal. The enumeration recurses on every
/// outgoing connection even after reaching `end`, since longer trips running
/// through `end` and back are still valid. No memoization; the graphs this
/// serves are small and the budget bounds the recursion depth.
pub fn count_trips<N: Node>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
    stop_budget: u32,
    mode: TripMode,
) -> u64 {
    if stop_budget == 0 {
        return 0;
    }

    let mut found = 0;
    for next in graph.neighbors(start).keys() {
        if next == end && (mode == TripMode::MaxStops || stop_budget == 1) {
            found += 1;
        }
        found += count_trips(graph, next, end, stop_budget - 1, mode);
    }
    found
}

/// Count trips from `start` to `end` of total distance strictly less than
/// `max_distance`.
///
/// Terminates because every edge distance is strictly positive: the budget
/// shrinks on every hop until no connection fits under it. A non-positive
/// `max_distance` admits no edge at all and yields 0.
pub fn count_trips_within<N: Node>(graph: &Graph<N>, start: &N, end: &N, max_distance: f64) -> u64 {
    let mut found = 0;
    for (next, &weight) in graph.neighbors(start) {
        if weight < max_distance {
            if next == end {
                found += 1;
            }
            found += count_trips_within(graph, next, end, max_distance - weight);
        }
    }
    found
}
