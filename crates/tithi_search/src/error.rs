//! Error types for tithi search.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from argument validation or a search that failed to converge.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Range start is not strictly before its end.
    #[error("invalid range: start {start} must be before end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Angular precision is not a finite positive number.
    #[error("invalid precision: {0} (must be > 0)")]
    InvalidPrecision(f64),
    /// A search configuration rule was violated.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// A bisection exceeded its iteration cap.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}

impl SearchError {
    /// True for errors caused by caller arguments (range, precision, config).
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::InvalidPrecision(_) | Self::InvalidConfig(_)
        )
    }
}
