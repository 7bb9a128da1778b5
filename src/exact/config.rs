//! Search configuration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration for exhaustive route search.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::AtomicBool;
/// use std::sync::Arc;
/// use u_route_exact::exact::SearchConfig;
///
/// let cancel = Arc::new(AtomicBool::new(false));
/// let config = SearchConfig::new()
///     .with_max_points(9)
///     .with_log_every(50_000)
///     .with_cancellation(cancel.clone());
///
/// assert!(config.is_within_limit(9));
/// assert!(!config.is_within_limit(10));
/// assert!(!config.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of points accepted, if any.
    pub max_points: Option<usize>,

    /// Emit a progress record every this many evaluated orders (0 = never).
    pub log_every: u64,

    /// Cooperative cancellation flag, checked before each order is scored.
    pub cancellation: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_points: None,
            log_every: 1_000_000,
            cancellation: None,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inputs with more than `max` points.
    ///
    /// Values below 2 are raised to 2, the smallest searchable input.
    pub fn with_max_points(mut self, max: usize) -> Self {
        self.max_points = Some(max.max(2));
        self
    }

    /// Set the progress log interval.
    pub fn with_log_every(mut self, every: u64) -> Self {
        self.log_every = every;
        self
    }

    /// Attach a cancellation flag owned by the caller.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancellation = Some(flag);
        self
    }

    /// Check if `num_points` is within the configured limit.
    pub fn is_within_limit(&self, num_points: usize) -> bool {
        self.max_points.map_or(true, |max| num_points <= max)
    }

    /// Returns `true` if the caller has requested cancellation.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
