//! Domain model types for route search.
//!
//! Points placed by the caller, the append-only point set they form, and the
//! routes (visiting orders) produced over them.

mod point;
mod route;

pub use point::{Point, PointSet};
pub use route::Route;
