//! Cell-boundary crossing search.
//!
//! In the normalized frame the separation is a rising sawtooth: it climbs
//! toward `step` and drops back to 0 at every boundary. A crossing shows up as
//! a wrap, i.e. a later sample that is smaller than an earlier one.

use chrono::{DateTime, Utc};
use tithi_ephem::AngleOracle;
use tracing::trace;

use crate::direction::{Direction, normalized_angle};
use crate::error::SearchError;
use crate::search_types::SearchConfig;
use crate::search_util::{Interval, Narrow, narrow};

// ---------------------------------------------------------------------------
// Single bracketed crossing
// ---------------------------------------------------------------------------

/// Bisect `[start, end]`, known to hold exactly one wrap, down to the boundary.
///
/// Stops at the first probe whose normalized angle is within `precision_deg`
/// of 0 or `step`. Endpoints already on a boundary are returned as-is.
pub fn locate_crossing<O>(
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
    let start_value = normalized_angle(oracle, start, reverse, step);
    if config.is_boundary(start_value) {
        return Ok(start);
    }
    if config.is_boundary(normalized_angle(oracle, end, reverse, step)) {
        return Ok(end);
    }

    narrow(
        (Interval::new(start, end), start_value),
        config.max_iterations,
        "crossing bisection did not converge",
        |(interval, start_value)| {
            let mid = interval.midpoint();
            let mid_value = normalized_angle(oracle, mid, reverse, step);
            trace!(%mid, start_value, mid_value, "crossing bisection step");
            if config.is_boundary(mid_value) {
                Narrow::Found(mid)
            } else if start_value < mid_value {
                // Still climbing: the wrap is later.
                Narrow::Continue((interval.upper_half(), mid_value))
            } else {
                Narrow::Continue((interval.lower_half(), start_value))
            }
        },
    )
}

/// Look for a crossing in `[start, end]` and bisect it if one is there.
///
/// The midpoint is compared with both endpoints: a midpoint below both means
/// the wrap is in the first half, above both means the second half. Anything
/// else means the normalized angle rose monotonically and nothing was crossed.
pub fn try_locate_crossing<O>(
    oracle: &O,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    reverse: bool,
    config: &SearchConfig,
) -> Result<Option<DateTime<Utc>>, SearchError>
where
    O: AngleOracle + ?Sized,
{
    if start >= end {
        return Ok(None);
    }
    let step = config.step();
    let mid = Interval::new(start, end).midpoint();
    let s = normalized_angle(oracle, start, reverse, step);
    let e = normalized_angle(oracle, end, reverse, step);
    let m = normalized_angle(oracle, mid, reverse, step);

    if config.is_boundary(s) {
        return Ok(Some(start));
    }
    if config.is_boundary(e) {
        return Ok(Some(end));
    }
    if m < s && m < e {
        return locate_crossing(oracle, start, mid, reverse, config).map(Some);
    }
    if m > s && m > e {
        return locate_crossing(oracle, mid, end, reverse, config).map(Some);
    }
    Ok(None)
}

// ---------------------------------------------------------------------------
// Monotonic span scan
// ---------------------------------------------------------------------------

/// All crossings in `[start, end]` over which the separation moves in `direction`.
///
/// Walks the span in windows of [`SearchConfig::crossing_gap`], short enough
/// that no window holds two crossings. After a hit the next window starts one
/// gap later. Results are in chronological order.
pub fn crossings_in_range<O>(
    oracle: &O,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    direction: Direction,
    config: &SearchConfig,
) -> Result<Vec<DateTime<Utc>>, SearchError>
where
    O: AngleOracle + ?Sized,
{
    let gap = config.crossing_gap();
    let reverse = direction.is_reversed();
    let mut found = Vec::new();
    let mut window_start = start;

    while window_start < end {
        let window_end = (window_start + gap).min(end);
        match try_locate_crossing(oracle, window_start, window_end, reverse, config)? {
            Some(t) => {
                trace!(%t, "crossing");
                found.push(t);
                window_start = t + gap;
            }
            None => window_start = window_end,
        }
    }
    Ok(found)
}
