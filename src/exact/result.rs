//! Search result representation.

use serde::{Deserialize, Serialize};

use crate::models::Route;

/// Outcome of an exhaustive route search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Shortest route found.
    pub route: Route,

    /// Number of visiting orders scored.
    pub permutations_evaluated: u64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Whether the search was cancelled before every order was scored.
    pub cancelled: bool,
}

impl SearchResult {
    /// Length of the best route.
    pub fn length(&self) -> f64 {
        self.route.length()
    }

    /// Returns true if every order was scored, so the route is the global
    /// minimum.
    pub fn is_exact(&self) -> bool {
        !self.cancelled
    }

    /// Consumes the result, keeping only the route.
    pub fn into_route(self) -> Route {
        self.route
    }
}
