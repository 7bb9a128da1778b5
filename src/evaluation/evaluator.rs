//! Route length evaluation.

use crate::distance::DistanceMatrix;
use crate::models::{Point, Route};

/// Total length of an open path through `points`, summed left to right.
///
/// Zero for fewer than two points.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::Point;
/// use u_route_exact::evaluation::path_length;
///
/// let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
/// assert!((path_length(&pts) - 20.0).abs() < 1e-10);
/// assert_eq!(path_length(&pts[..1]), 0.0);
/// ```
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .fold(0.0, |acc, w| acc + w[0].distance_to(&w[1]))
}

/// Scores visiting orders over a fixed point sequence.
///
/// Pairwise distances are computed once up front; scoring an order is then
/// a left-to-right sum of matrix lookups, which yields exactly the same value
/// as [`path_length`] over the reordered points.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::Point;
/// use u_route_exact::evaluation::RouteEvaluator;
///
/// let pts = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(10.0, 0.0)];
/// let evaluator = RouteEvaluator::new(&pts);
/// assert!((evaluator.order_length(&[0, 2, 1]) - 20.0).abs() < 1e-10);
///
/// let route = evaluator.build_route(&[0, 2, 1]).unwrap();
/// assert_eq!(route.points()[1], Point::new(10.0, 0.0));
/// ```
pub struct RouteEvaluator<'a> {
    points: &'a [Point],
    distances: DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over the given points.
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            distances: DistanceMatrix::from_points(points),
        }
    }

    /// The points this evaluator scores orders over.
    pub fn points(&self) -> &[Point] {
        self.points
    }

    /// The precomputed pairwise distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Length of visiting the points in `order`.
    ///
    /// # Panics
    ///
    /// Panics if `order` contains a position outside the point sequence.
    pub fn order_length(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .fold(0.0, |acc, w| acc + self.distances.get(w[0], w[1]))
    }

    /// Builds the route for `order`.
    ///
    /// Returns `None` if `order` is not a permutation of the point positions.
    pub fn build_route(&self, order: &[usize]) -> Option<Route> {
        Route::from_order(self.points, order.to_vec())
    }
}
