//! Error types.

use thiserror::Error;

/// Why an input point sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Fewer than two points were supplied.
    #[error("at least 2 points are required, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input.
        index: usize,
    },

    /// More points than the configured search limit.
    #[error("{count} points exceed the configured limit of {limit}")]
    TooManyPoints {
        /// Number of points supplied.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Two points are so far apart that their distance is not representable.
    #[error("distance between points {from} and {to} overflows")]
    DistanceOverflow {
        /// Lower position of the pair.
        from: usize,
        /// Higher position of the pair.
        to: usize,
    },
}

/// Errors returned by route search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The point sequence cannot be searched.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Why serialized route data was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RouteDataError {
    /// `order` does not visit every point position exactly once.
    #[error("route order is not a permutation of {len} positions")]
    NotAPermutation {
        /// Number of points in the route data.
        len: usize,
    },

    /// `length` disagrees with the path through `points`.
    #[error("stored route length {stored} does not match path length {computed}")]
    LengthMismatch {
        /// Length found in the data.
        stored: f64,
        /// Length recomputed from the points.
        computed: f64,
    },
}

/// Convenience alias for results of route search.
pub type Result<T> = std::result::Result<T, RouteError>;
