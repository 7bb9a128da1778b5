//! Route type.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::RouteDataError;
use crate::evaluation::path_length;

/// An ordered visiting sequence over a set of points.
///
/// A route is an open path: it does not return to its first point. It keeps
/// the visit order as positions into the input sequence alongside the
/// resolved points and the total length.
///
/// Deserialization checks that `order` is a permutation matching `points`
/// and that `length` agrees with the points; the stored length is replaced
/// by the recomputed one.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::{Point, Route};
///
/// let input = [Point::new(0.0, 0.0), Point::new(0.0, 3.0), Point::new(4.0, 0.0)];
/// let route = Route::from_order(&input, vec![1, 0, 2]).unwrap();
/// assert_eq!(route.order(), &[1, 0, 2]);
/// assert!((route.length() - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteData")]
pub struct Route {
    order: Vec<usize>,
    points: Vec<Point>,
    length: f64,
}

impl Route {
    /// Builds the route visiting `input` in the given order.
    ///
    /// Returns `None` unless `order` contains every position of `input`
    /// exactly once.
    pub fn from_order(input: &[Point], order: Vec<usize>) -> Option<Self> {
        if !is_permutation_of(&order, input.len()) {
            return None;
        }
        let points: Vec<Point> = order.iter().map(|&i| input[i]).collect();
        let length = path_length(&points);
        Some(Self {
            order,
            points,
            length,
        })
    }

    /// Assembles a route from an order already known to be a permutation and
    /// its precomputed length.
    pub(crate) fn from_parts(input: &[Point], order: Vec<usize>, length: f64) -> Self {
        debug_assert!(is_permutation_of(&order, input.len()));
        let points = order.iter().map(|&i| input[i]).collect();
        Self {
            order,
            points,
            length,
        }
    }

    /// Positions into the input sequence, in visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Points in visit order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Total path length (sum of consecutive distances).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the same route travelled backwards.
    ///
    /// The length is re-evaluated along the new direction.
    pub fn reversed(&self) -> Self {
        let order: Vec<usize> = self.order.iter().rev().copied().collect();
        let points: Vec<Point> = self.points.iter().rev().copied().collect();
        let length = path_length(&points);
        Self {
            order,
            points,
            length,
        }
    }
}

/// Unchecked wire form of [`Route`].
#[derive(Deserialize)]
struct RouteData {
    order: Vec<usize>,
    points: Vec<Point>,
    length: f64,
}

impl TryFrom<RouteData> for Route {
    type Error = RouteDataError;

    fn try_from(data: RouteData) -> Result<Self, Self::Error> {
        if !is_permutation_of(&data.order, data.points.len()) {
            return Err(RouteDataError::NotAPermutation {
                len: data.points.len(),
            });
        }
        let computed = path_length(&data.points);
        let tolerance = 1e-9 * computed.max(1.0);
        if !data.length.is_finite() || (data.length - computed).abs() > tolerance {
            return Err(RouteDataError::LengthMismatch {
                stored: data.length,
                computed,
            });
        }
        Ok(Self {
            order: data.order,
            points: data.points,
            length: computed,
        })
    }
}

fn is_permutation_of(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in order {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
