use railroute_lib::{parse_graph, Graph};

/// Reference network used throughout the query tests.
pub const REFERENCE_SCHEDULE: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

pub fn reference_graph() -> Graph<char> {
    parse_graph(REFERENCE_SCHEDULE).expect("reference schedule parses")
}
