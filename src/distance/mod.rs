//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix over the input points, built
//! once per search so each candidate order is scored by lookups only.

mod matrix;

pub use matrix::DistanceMatrix;
