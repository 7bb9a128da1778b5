//! Exhaustive shortest-route search.
//!
//! # Algorithm
//!
//! Every ordering of the input positions is generated in lexicographic order,
//! starting from the input order itself. Each ordering is scored as the
//! left-to-right sum of consecutive Euclidean distances, and the first
//! ordering reaching the minimum is kept. Nothing is fixed and nothing is
//! pruned, so the result is the exact minimum over all `n!` orders.
//!
//! # Complexity
//!
//! O(n! · n) time, O(n²) memory for the distance matrix. Only practical for
//! the handful of points a person places by hand.

use std::time::Instant;

use crate::error::{InputError, Result};
use crate::evaluation::RouteEvaluator;
use crate::models::{Point, Route};

use super::permutation::{next_permutation, permutation_count};
use super::{SearchConfig, SearchResult};

/// Inputs above this size get a warning: 11! is ~40 million orders.
const LARGE_INPUT_WARN: usize = 10;

/// Finds the shortest open path visiting every point exactly once.
///
/// Uses the default [`SearchConfig`]: no size limit and no cancellation.
/// Fails with [`RouteError::InvalidInput`](crate::RouteError::InvalidInput)
/// for fewer than two points or non-finite coordinates.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::Point;
/// use u_route_exact::find_shortest_route;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ];
/// let route = find_shortest_route(&points).unwrap();
/// assert!((route.length() - 20.0).abs() < 1e-10);
/// assert_eq!(route.order(), &[0, 2, 1]);
/// ```
pub fn find_shortest_route(points: &[Point]) -> Result<Route> {
    RouteSearch::default()
        .solve(points)
        .map(SearchResult::into_route)
}

/// Exact route search over all visiting orders.
///
/// Holds only its configuration; every call to [`RouteSearch::solve`] is a
/// pure function of the given points.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::Point;
/// use u_route_exact::exact::{RouteSearch, SearchConfig};
///
/// let search = RouteSearch::new(SearchConfig::new().with_max_points(8));
/// let result = search
///     .solve(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
///     .unwrap();
/// assert!(result.is_exact());
/// assert_eq!(result.permutations_evaluated, 2);
/// assert!((result.length() - 2.0_f64.sqrt()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteSearch {
    config: SearchConfig,
}

impl RouteSearch {
    /// Creates a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Checks the point count and coordinates against this configuration.
    ///
    /// Distance overflow is detected by [`RouteSearch::solve`] once the
    /// distance matrix is built.
    pub fn validate(&self, points: &[Point]) -> std::result::Result<(), InputError> {
        let count = points.len();
        if count < 2 {
            return Err(InputError::TooFewPoints { count });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(InputError::NonFiniteCoordinate { index });
        }
        if !self.config.is_within_limit(count) {
            let limit = self.config.max_points.unwrap_or(usize::MAX);
            return Err(InputError::TooManyPoints { count, limit });
        }
        Ok(())
    }

    /// Scores every visiting order of `points` and returns the shortest.
    ///
    /// Ties go to the order generated first. If the configured cancellation
    /// flag is raised, the search stops early and returns the best route seen
    /// so far with [`SearchResult::cancelled`] set.
    ///
    /// Points far enough apart that a pairwise distance overflows are
    /// rejected with [`InputError::DistanceOverflow`] before any order is
    /// scored.
    pub fn solve(&self, points: &[Point]) -> Result<SearchResult> {
        self.validate(points)?;

        let n = points.len();
        let orders = permutation_count(n)
            .map_or_else(|| "more than u64::MAX".to_string(), |t| t.to_string());
        if n > LARGE_INPUT_WARN {
            log::warn!(
                "Exhaustive route search over {} points: {} orders to score",
                n,
                orders
            );
        } else {
            log::debug!("Exhaustive route search over {} points ({} orders)", n, orders);
        }

        let start = Instant::now();
        let evaluator = RouteEvaluator::new(points);
        if let Some((from, to)) = evaluator.distances().first_non_finite() {
            log::error!(
                "Distance between points {} and {} overflows; search rejected",
                from,
                to
            );
            return Err(InputError::DistanceOverflow { from, to }.into());
        }

        let mut order: Vec<usize> = (0..n).collect();
        let mut best_order = order.clone();
        let mut best_length = evaluator.order_length(&order);
        let mut evaluated: u64 = 1;
        let mut cancelled = false;

        while next_permutation(&mut order) {
            if self.config.is_cancelled() {
                cancelled = true;
                break;
            }

            let length = evaluator.order_length(&order);
            evaluated += 1;
            if length < best_length {
                best_length = length;
                best_order.copy_from_slice(&order);
            }

            if self.config.log_every > 0 && evaluated % self.config.log_every == 0 {
                log::debug!(
                    "Route search progress: {} orders scored, best length {:.6}",
                    evaluated,
                    best_length
                );
            }
        }

        let computation_time_ms = start.elapsed().as_millis() as u64;
        if cancelled {
            log::warn!(
                "Route search cancelled after {} orders, best length so far {:.6}",
                evaluated,
                best_length
            );
        } else {
            log::info!(
                "Route search over {} points finished: {} orders, best length {:.6} in {}ms",
                n,
                evaluated,
                best_length,
                computation_time_ms
            );
        }

        Ok(SearchResult {
            route: Route::from_parts(points, best_order, best_length),
            permutations_evaluated: evaluated,
            computation_time_ms,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::evaluation::path_length;
    use crate::exact::Permutations;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_corner_scenario() {
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let route = find_shortest_route(&points).expect("valid input");
        assert!((route.length() - 20.0).abs() < 1e-10);
        assert_eq!(route.order(), &[0, 1, 2]);
        assert_eq!(route.points(), points.as_slice());
    }

    #[test]
    fn test_two_points() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let route = find_shortest_route(&points).expect("valid input");
        assert!((route.length() - 1.414214).abs() < 1e-6);
        assert_eq!(route.order(), &[0, 1]);
    }

    #[test]
    fn test_rejects_empty_and_single() {
        assert_eq!(
            find_shortest_route(&[]),
            Err(RouteError::InvalidInput(InputError::TooFewPoints {
                count: 0
            }))
        );
        assert_eq!(
            find_shortest_route(&pts(&[(4.0, 2.0)])),
            Err(RouteError::InvalidInput(InputError::TooFewPoints {
                count: 1
            }))
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let points = pts(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 2.0)]);
        assert_eq!(
            find_shortest_route(&points),
            Err(RouteError::InvalidInput(InputError::NonFiniteCoordinate {
                index: 1
            }))
        );
    }

    #[test]
    fn test_rejects_overflowing_distance() {
        let points = pts(&[(0.0, 0.0), (2e200, 0.0), (1e200, 0.0)]);
        assert_eq!(
            find_shortest_route(&points),
            Err(RouteError::InvalidInput(InputError::DistanceOverflow {
                from: 0,
                to: 1
            }))
        );
    }

    #[test]
    fn test_large_finite_distances_stay_exact() {
        // Far apart, but squared differences still fit in f64.
        let points = pts(&[(0.0, 0.0), (2e150, 0.0), (1e150, 0.0)]);
        let route = find_shortest_route(&points).expect("valid input");
        assert_eq!(route.order(), &[0, 2, 1]);
        assert!(route.length().is_finite());
        assert!((route.length() / 2e150 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_above_limit() {
        let search = RouteSearch::new(SearchConfig::new().with_max_points(3));
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(
            search.solve(&points).map(|r| r.length()),
            Err(RouteError::InvalidInput(InputError::TooManyPoints {
                count: 4,
                limit: 3
            }))
        );
        assert!(search.solve(&points[..3]).is_ok());
    }

    #[test]
    fn test_tie_keeps_first_generated() {
        // Identity and its reverse share the minimum; identity comes first.
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let route = find_shortest_route(&points).expect("valid input");
        assert_eq!(route.order(), &[0, 1, 2]);
    }

    #[test]
    fn test_shuffled_line() {
        let points = pts(&[(3.0, 0.0), (0.0, 0.0), (2.0, 0.0), (1.0, 0.0)]);
        let route = find_shortest_route(&points).expect("valid input");
        assert!((route.length() - 3.0).abs() < 1e-12);
        // First minimal order in lexicographic order: 0 → 2 → 3 → 1.
        assert_eq!(route.order(), &[0, 2, 3, 1]);
    }

    #[test]
    fn test_duplicates_are_distinct_stops() {
        let points = pts(&[(5.0, 5.0), (0.0, 0.0), (5.0, 5.0)]);
        let result = RouteSearch::default().solve(&points).expect("valid input");
        assert_eq!(result.permutations_evaluated, 6);
        assert_eq!(result.route.len(), 3);
        assert!((result.length() - 50.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(result.route.order(), &[0, 2, 1]);
    }

    #[test]
    fn test_all_coincident() {
        let points = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        let route = find_shortest_route(&points).expect("valid input");
        assert_eq!(route.length(), 0.0);
        assert_eq!(route.order(), &[0, 1, 2]);
    }

    #[test]
    fn test_counts_every_order() {
        let points = pts(&[(0.0, 0.0), (3.0, 1.0), (1.0, 4.0), (5.0, 5.0), (2.0, 2.0)]);
        let result = RouteSearch::default().solve(&points).expect("valid input");
        assert_eq!(result.permutations_evaluated, 120);
        assert!(result.is_exact());
    }

    #[test]
    fn test_minimum_over_all_orders() {
        let points = pts(&[(0.0, 0.0), (7.0, 3.0), (2.0, 9.0), (4.0, 4.0), (8.0, 8.0)]);
        let route = find_shortest_route(&points).expect("valid input");
        for order in Permutations::new(points.len()) {
            let candidate: Vec<Point> = order.iter().map(|&i| points[i]).collect();
            assert!(route.length() <= path_length(&candidate));
        }
    }

    #[test]
    fn test_reported_length_matches_points() {
        let points = pts(&[(0.1, 0.7), (3.3, -1.2), (-2.5, 4.0), (6.0, 6.5)]);
        let route = find_shortest_route(&points).expect("valid input");
        assert_eq!(route.length(), path_length(route.points()));
    }

    #[test]
    fn test_input_untouched_and_deterministic() {
        let points = pts(&[(9.0, 1.0), (0.0, 0.0), (4.0, 7.0), (2.0, 3.0)]);
        let snapshot = points.clone();
        let a = find_shortest_route(&points).expect("valid input");
        let b = find_shortest_route(&points).expect("valid input");
        assert_eq!(points, snapshot);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cancelled_before_start() {
        let flag = Arc::new(AtomicBool::new(true));
        let search = RouteSearch::new(SearchConfig::new().with_cancellation(flag));
        let points = pts(&[(0.0, 0.0), (5.0, 5.0), (1.0, 0.0), (2.0, 2.0)]);
        let result = search.solve(&points).expect("valid input");
        assert!(result.cancelled);
        assert!(!result.is_exact());
        assert_eq!(result.permutations_evaluated, 1);
        assert_eq!(result.route.order(), &[0, 1, 2, 3]);
        assert_eq!(result.length(), path_length(&points));
    }

    #[test]
    fn test_not_cancelled_when_flag_clear() {
        let flag = Arc::new(AtomicBool::new(false));
        let search = RouteSearch::new(
            SearchConfig::new()
                .with_cancellation(flag)
                .with_log_every(1),
        );
        let points = pts(&[(0.0, 0.0), (5.0, 5.0), (1.0, 0.0)]);
        let result = search.solve(&points).expect("valid input");
        assert!(!result.cancelled);
        assert_eq!(result.permutations_evaluated, 6);
    }

    #[test]
    fn test_cancelled_mid_search() {
        // 11! orders keeps the search busy well past the flag being raised.
        let points: Vec<Point> = (0..11)
            .map(|i| Point::new(((i * 7) % 11) as f64, ((i * 4) % 11) as f64))
            .collect();
        let flag = Arc::new(AtomicBool::new(false));
        let search = RouteSearch::new(SearchConfig::new().with_cancellation(flag.clone()));

        let raiser = thread::spawn(move || {
            thread::sleep(Duration::from_millis(2));
            flag.store(true, Ordering::Relaxed);
        });
        let result = search.solve(&points).expect("valid input");
        raiser.join().expect("flag thread");

        assert!(result.cancelled);
        assert!(!result.is_exact());
        assert!(result.permutations_evaluated < permutation_count(11).expect("fits u64"));

        let mut order = result.route.order().to_vec();
        order.sort_unstable();
        assert_eq!(order, (0..11).collect::<Vec<_>>());
        assert_eq!(result.length(), path_length(result.route.points()));
        assert!(result.length() <= path_length(&points));
    }
}
