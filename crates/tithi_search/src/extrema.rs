//! Reversal search: the new or full moon hidden inside a day.
//!
//! At a reversal the separation touches 0 or 180, both cell boundaries, and
//! turns around without wrapping in the normalized frame. The crossing search
//! cannot see it, so it is found as the minimum of the normalized angle.

use chrono::{DateTime, Utc};
use tithi_ephem::AngleOracle;
use tracing::trace;

use crate::direction::normalized_angle;
use crate::error::SearchError;
use crate::search_types::SearchConfig;
use crate::search_util::{Interval, Narrow, narrow};

/// Locate the reversal in `[start, end]`.
///
/// `reverse` is the mirroring to apply before the turn: `true` when the
/// separation was increasing at `start` (heading for a full moon). Each step
/// compares the midpoint with a probe one `resolution` later and keeps the half
/// the normalized angle is descending into. Stops when the midpoint is within
/// `precision_deg` of a boundary or within one `resolution` of the upper end.
pub fn locate_extremum<O>(
    oracle: &O,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    reverse: bool,
    config: &SearchConfig,
) -> Result<DateTime<Utc>, SearchError>
where
    O: AngleOracle + ?Sized,
{
    let step = config.step();
    let resolution = config.resolution;

    narrow(
        Interval::new(start, end),
        config.max_iterations,
        "reversal bisection did not converge",
        |interval| {
            let mid = interval.midpoint();
            let mid_value = normalized_angle(oracle, mid, reverse, step);
            if config.is_boundary(mid_value) || interval.end - mid < resolution {
                return Narrow::Found(mid);
            }
            let ahead = normalized_angle(oracle, mid + resolution, reverse, step);
            trace!(%mid, mid_value, ahead, "reversal bisection step");
            if ahead > mid_value {
                // Past the turn, climbing away from it.
                Narrow::Continue(interval.lower_half())
            } else {
                Narrow::Continue(interval.upper_half())
            }
        },
    )
}
