//! Dense distance matrix.

use crate::models::Point;

/// Pairwise Euclidean distances over a point sequence, row-major.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::Point;
/// use u_route_exact::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.first_non_finite(), None);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn zeroed(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    fn put(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Computes the matrix from point coordinates.
    ///
    /// Each pair is computed once with [`Point::distance_to`] and mirrored,
    /// so `get(i, j)` and `get(j, i)` are bit-identical.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::zeroed(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.put(i, j, d);
                dm.put(j, i, d);
            }
        }
        dm
    }

    /// Distance between positions `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of points covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First pair `(from, to)` with `from < to` whose distance overflowed to
    /// infinity (or is NaN), scanning rows in order.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        (0..self.size)
            .flat_map(|i| ((i + 1)..self.size).map(move |j| (i, j)))
            .find(|&(i, j)| !self.get(i, j).is_finite())
    }
}
