use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// All-pairs shortest distance table.
///
/// Built eagerly at construction by running Dijkstra's algorithm once per
/// city with outgoing connections, and never mutated afterwards, so one table
/// serves every subsequent query (and can be shared across threads).
///
/// A city's distance to itself is the cheapest cycle back through at least
/// one edge, never 0; a city with no such cycle has no entry for itself.
/// Unreachable destinations are likewise absent rather than infinite.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N: Node> {
    table: HashMap<N, HashMap<N, f64>>,
}

impl<N: Node> ShortestPaths<N> {
    /// Compute the full table for `graph`.
    pub fn build(graph: &Graph<N>) -> Self {
        let mut table = HashMap::new();
        for source in graph.nodes() {
            let settled = settle_from(graph, source);
            tracing::debug!(
                source = %source,
                reachable = settled.len(),
                "settled shortest distances"
            );
            table.insert(source.clone(), settled);
        }
        Self { table }
    }

    /// Shortest distance from `source` to `destination`, or
    /// [`Error::RouteNotFound`] when the destination is unreachable or the
    /// source is unknown.
    pub fn distance(&self, source: &N, destination: &N) -> Result<f64> {
        self.table
            .get(source)
            .and_then(|settled| settled.get(destination))
            .copied()
            .ok_or(Error::RouteNotFound)
    }
}

/// Dijkstra from a single source. Stale heap entries are skipped lazily when
/// popped instead of being removed on relaxation.
fn settle_from<N: Node>(graph: &Graph<N>, source: &N) -> HashMap<N, f64> {
    let mut settled: HashMap<N, f64> = HashMap::new();
    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry::new(source.clone(), 0.0));

    while let Some(entry) = queue.pop() {
        if settled.contains_key(&entry.node) {
            continue;
        }
        let distance = entry.cost.0;

        for (next, weight) in graph.neighbors(&entry.node) {
            if settled.contains_key(next) {
                continue;
            }
            queue.push(QueueEntry::new(next.clone(), distance + weight));
        }

        // The zero-distance seed is not a real arrival, so the source only
        // settles when reached again through a cycle. This is what makes a
        // self-distance mean "cheapest round trip" instead of 0.
        if entry.node != *source || distance > 0.0 {
            settled.insert(entry.node, distance);
        }
    }

    settled
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry<N> {
    node: N,
    cost: FloatOrd,
}

impl<N: Node> QueueEntry<N> {
    fn new(node: N, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl<N: Node> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Node> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
