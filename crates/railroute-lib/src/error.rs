use thiserror::Error;

/// Convenient result alias for the railroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The requested route does not exist. This is a normal query outcome
    /// (empty route, missing connection, unreachable destination), not a
    /// fault.
    #[error("no such route")]
    RouteNotFound,

    /// Raised at graph construction for a non-positive edge distance.
    /// Termination of the trip enumeration and correctness of the shortest
    /// path table both depend on strictly positive distances.
    #[error("invalid distance {weight} on edge {from} -> {to}; distances must be greater than zero")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when an edge token in the schedule encoding is malformed.
    #[error("invalid edge specification: {token:?}")]
    InvalidEdge { token: String },

    /// Raised when a stop in a textual route is not a single city code.
    #[error("invalid route stop: {token:?}")]
    InvalidRoute { token: String },
}
