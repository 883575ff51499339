//! Shared bisection plumbing for the crossing and reversal searches.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::error::SearchError;

/// A closed UTC time interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Instant halfway between the endpoints.
    pub fn midpoint(&self) -> DateTime<Utc> {
        self.start + self.span() / 2
    }

    /// `[start, midpoint]`.
    pub fn lower_half(&self) -> Self {
        Self::new(self.start, self.midpoint())
    }

    /// `[midpoint, end]`.
    pub fn upper_half(&self) -> Self {
        Self::new(self.midpoint(), self.end)
    }
}

/// Outcome of one narrowing step.
pub(crate) enum Narrow<S> {
    /// The search settled on this instant.
    Found(DateTime<Utc>),
    /// Keep going from this narrower state.
    Continue(S),
}

/// Drive a bisection to completion.
///
/// `step` consumes the current state and returns either the answer or the next,
/// narrower state. Exceeding `max_iterations` is an error, not a best guess.
pub(crate) fn narrow<S, F>(
    initial: S,
    max_iterations: u32,
    what: &'static str,
    step: F,
) -> Result<DateTime<Utc>, SearchError>
where
    F: Fn(S) -> Narrow<S>,
{
    let mut state = initial;
    for _ in 0..max_iterations {
        match step(state) {
            Narrow::Found(t) => return Ok(t),
            Narrow::Continue(next) => state = next,
        }
    }
    warn!(max_iterations, "{what}");
    Err(SearchError::NoConvergence(what))
}
