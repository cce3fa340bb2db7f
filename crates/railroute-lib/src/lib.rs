//! Railroute library entry points.
//!
//! This crate models a small directed railway network with strictly positive
//! edge distances and answers three kinds of queries over it: the distance of
//! an explicit route, the shortest distance between any two cities, and the
//! number of trips between two cities under a stop or distance constraint.
//! Higher-level consumers (the CLI, tests) should only depend on the items
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod route;
pub mod schedule;
pub mod shortest;
pub mod trips;

pub use error::{Error, Result};
pub use graph::{build_graph, Graph, Node};
pub use route::route_distance;
pub use schedule::{parse_graph, parse_route};
pub use shortest::ShortestPaths;
pub use trips::{count_trips, count_trips_within, TripMode};
