//! Route length evaluation.

mod evaluator;

pub use evaluator::{path_length, RouteEvaluator};
