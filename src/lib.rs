//! # u-route-exact
//!
//! Exact shortest-route search over a small set of 2D points. Every visiting
//! order is scored and the shortest open path is returned.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSet, Route)
//! - [`distance`] — Euclidean distance matrix
//! - [`evaluation`] — Route length evaluation
//! - [`exact`] — Permutation generator and exhaustive route search
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_route_exact::models::{Point, PointSet};
//! use u_route_exact::find_shortest_route;
//!
//! let mut points = PointSet::new();
//! points.push(Point::new(0.0, 0.0));
//! points.push(Point::new(10.0, 0.0));
//! points.push(Point::new(10.0, 10.0));
//!
//! let route = find_shortest_route(points.points()).unwrap();
//! assert!((route.length() - 20.0).abs() < 1e-10);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod models;

pub use error::{InputError, RouteDataError, RouteError};
pub use exact::find_shortest_route;
