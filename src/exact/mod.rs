//! Exact route search by exhaustive permutation.
//!
//! - [`Permutations`] / [`next_permutation`] — Lexicographic ordering generator
//! - [`SearchConfig`] — Size limit, progress logging, cancellation
//! - [`RouteSearch`] — Scores every order and keeps the shortest, O(n! · n)
//! - [`SearchResult`] — Best route plus search statistics

mod config;
mod permutation;
mod result;
mod search;

pub use config::SearchConfig;
pub use permutation::{next_permutation, permutation_count, Permutations};
pub use result::SearchResult;
pub use search::{find_shortest_route, RouteSearch};
